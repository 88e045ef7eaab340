use askama::Template;
use axum::{extract::State, response::Html};
use sqlx::SqlitePool;
use tracing::warn;

use crate::config::CommunityInfo;
use crate::error::AppError;
use crate::services::faq_service::{self, FaqPageData, FaqView};
use crate::services::platform_service::SocialPlatformView;

#[derive(Template)]
#[template(path = "faq.html")]
pub struct FaqTemplate {
    pub community_info: &'static CommunityInfo,
    pub social_platforms: Vec<SocialPlatformView>,
    pub discord_url: Option<String>,
    pub faqs: Vec<FaqView>,
}

impl From<FaqPageData> for FaqTemplate {
    fn from(data: FaqPageData) -> Self {
        FaqTemplate {
            community_info: data.community_info,
            social_platforms: data.social_platforms,
            discord_url: data.discord_url,
            faqs: data.faqs,
        }
    }
}

pub async fn faq_handler(State(pool): State<SqlitePool>) -> Result<Html<String>, AppError> {
    let data = faq_service::build_faq_page(&pool).await.map_err(|e| {
        warn!("FAQ page load failed: {}", e);
        e
    })?;
    Ok(Html(FaqTemplate::from(data).render()?))
}
