pub mod admin_service;
pub mod coc_service;
pub mod contribute_service;
pub mod events_service;
pub mod faq_service;
pub mod health_service;
pub mod home_service;
pub mod markdown_lite;
pub mod platform_service;
pub mod validation;

/// Public URL for an uploaded file path stored on a record.
pub fn media_url(path: Option<&str>) -> Option<String> {
    let path = path.map(str::trim).filter(|p| !p.is_empty())?;
    if path.starts_with("http://") || path.starts_with("https://") {
        return Some(path.to_string());
    }
    Some(format!("/media/{}", path.trim_start_matches('/')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_url_prefixes_relative_paths() {
        assert_eq!(media_url(None), None);
        assert_eq!(media_url(Some("")), None);
        assert_eq!(
            media_url(Some("organizers/jane.png")),
            Some("/media/organizers/jane.png".to_string())
        );
        assert_eq!(
            media_url(Some("https://cdn.example.com/a.png")),
            Some("https://cdn.example.com/a.png".to_string())
        );
    }
}
