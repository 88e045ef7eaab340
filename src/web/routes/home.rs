use askama::Template;
use axum::{extract::State, response::Html};
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::warn;

use crate::config::CommunityInfo;
use crate::error::AppError;
use crate::services::events_service::ActivityCardView;
use crate::services::home_service::{self, HomePageData, OrganizerView};
use crate::services::platform_service::SocialPlatformView;

#[derive(Template)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub community_info: &'static CommunityInfo,
    pub social_platforms: Vec<SocialPlatformView>,
    pub discord_url: Option<String>,
    pub upcoming_events: Vec<ActivityCardView>,
    pub past_events: Vec<ActivityCardView>,
    pub organizers: Vec<OrganizerView>,
}

impl From<HomePageData> for HomeTemplate {
    fn from(data: HomePageData) -> Self {
        HomeTemplate {
            community_info: data.community_info,
            social_platforms: data.social_platforms,
            discord_url: data.discord_url,
            upcoming_events: data.upcoming_events,
            past_events: data.past_events,
            organizers: data.organizers,
        }
    }
}

pub async fn home_handler(State(pool): State<SqlitePool>) -> Result<Html<String>, AppError> {
    let data = home_service::build_home_page(&pool, Utc::now())
        .await
        .map_err(|e| {
            warn!("Home page load failed: {}", e);
            e
        })?;
    Ok(Html(HomeTemplate::from(data).render()?))
}
