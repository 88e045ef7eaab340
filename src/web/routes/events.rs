use askama::Template;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
};
use sqlx::SqlitePool;
use tracing::warn;

use crate::config::CommunityInfo;
use crate::error::AppError;
use crate::services::events_service::{
    self, ActivityCardView, EventDetailPageData, EventsPageData, PublicationView,
};
use crate::services::platform_service::SocialPlatformView;

#[derive(Template)]
#[template(path = "events_list.html")]
pub struct EventsTemplate {
    pub community_info: &'static CommunityInfo,
    pub discord_url: Option<String>,
    pub events: Vec<ActivityCardView>,
}

impl From<EventsPageData> for EventsTemplate {
    fn from(data: EventsPageData) -> Self {
        EventsTemplate {
            community_info: data.community_info,
            discord_url: data.discord_url,
            events: data.events,
        }
    }
}

pub async fn events_handler(State(pool): State<SqlitePool>) -> Result<Html<String>, AppError> {
    let data = events_service::build_events_page(&pool).await.map_err(|e| {
        warn!("Events page load failed: {}", e);
        e
    })?;
    Ok(Html(EventsTemplate::from(data).render()?))
}

#[derive(Template)]
#[template(path = "event_detail.html")]
pub struct EventDetailTemplate {
    pub community_info: &'static CommunityInfo,
    pub social_platforms: Vec<SocialPlatformView>,
    pub discord_url: Option<String>,
    pub event: ActivityCardView,
    pub related_events: Vec<ActivityCardView>,
    pub publications: Vec<PublicationView>,
}

impl From<EventDetailPageData> for EventDetailTemplate {
    fn from(data: EventDetailPageData) -> Self {
        EventDetailTemplate {
            community_info: data.community_info,
            social_platforms: data.social_platforms,
            discord_url: data.discord_url,
            event: data.event,
            related_events: data.related_events,
            publications: data.publications,
        }
    }
}

/// Only plain digit strings name an activity; anything else is a 404.
fn parse_event_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<i64>().ok()
}

pub async fn event_detail_handler(
    Path(event_id): Path<String>,
    State(pool): State<SqlitePool>,
) -> Result<Html<String>, AppError> {
    let id = parse_event_id(&event_id).ok_or(AppError::NotFound)?;

    let data = events_service::build_event_detail_page(&pool, id)
        .await
        .map_err(|e| {
            warn!("Event detail load failed for {}: {}", id, e);
            e
        })?
        .ok_or(AppError::NotFound)?;

    Ok(Html(EventDetailTemplate::from(data).render()?))
}

pub async fn event_detail_redirect(Path(event_id): Path<String>) -> Result<Redirect, AppError> {
    let id = parse_event_id(&event_id).ok_or(AppError::NotFound)?;
    Ok(Redirect::permanent(&format!("/events/{}/", id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_ids_must_be_integers() {
        assert_eq!(parse_event_id("42"), Some(42));
        assert_eq!(parse_event_id("abc"), None);
        assert_eq!(parse_event_id(""), None);
    }

    #[test]
    fn event_ids_reject_signs_and_spaces() {
        assert_eq!(parse_event_id("+1"), None);
        assert_eq!(parse_event_id("-1"), None);
        assert_eq!(parse_event_id(" 1"), None);
        assert_eq!(parse_event_id("007"), Some(7));
    }
}
