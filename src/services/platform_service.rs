use sqlx::SqlitePool;

use crate::database::social_platform_repo;
use crate::models::SocialMediaPlatform;
use crate::services::media_url;

#[derive(Debug, Clone)]
pub struct SocialPlatformView {
    pub name_ko: String,
    pub name_en: String,
    pub url: String,
    pub icon_url: Option<String>,
    pub icon_class: String,
}

impl From<SocialMediaPlatform> for SocialPlatformView {
    fn from(p: SocialMediaPlatform) -> Self {
        SocialPlatformView {
            icon_url: media_url(p.icon.as_deref()),
            name_ko: p.name_ko,
            name_en: p.name_en,
            url: p.url,
            icon_class: p.icon_class,
        }
    }
}

/// Active platforms in display order.
pub async fn list_social_platforms(pool: &SqlitePool) -> sqlx::Result<Vec<SocialPlatformView>> {
    let rows = social_platform_repo::list_active(pool).await?;
    Ok(rows.into_iter().map(SocialPlatformView::from).collect())
}

/// First active platform whose English name mentions Discord.
pub async fn discord_url(pool: &SqlitePool) -> sqlx::Result<Option<String>> {
    social_platform_repo::find_active_url_by_name(pool, "discord").await
}
