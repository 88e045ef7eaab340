use askama::Template;
use axum::{extract::State, response::Html};
use sqlx::SqlitePool;
use tracing::warn;

use crate::config::CommunityInfo;
use crate::error::AppError;
use crate::services::contribute_service::{self, ContributePageData, OpportunityView};
use crate::services::platform_service::SocialPlatformView;

#[derive(Template)]
#[template(path = "contribute.html")]
pub struct ContributeTemplate {
    pub community_info: &'static CommunityInfo,
    pub social_platforms: Vec<SocialPlatformView>,
    pub discord_url: Option<String>,
    pub opportunities: Vec<OpportunityView>,
}

impl From<ContributePageData> for ContributeTemplate {
    fn from(data: ContributePageData) -> Self {
        ContributeTemplate {
            community_info: data.community_info,
            social_platforms: data.social_platforms,
            discord_url: data.discord_url,
            opportunities: data.opportunities,
        }
    }
}

pub async fn contribute_handler(State(pool): State<SqlitePool>) -> Result<Html<String>, AppError> {
    let data = contribute_service::build_contribute_page(&pool)
        .await
        .map_err(|e| {
            warn!("Contribute page load failed: {}", e);
            e
        })?;
    Ok(Html(ContributeTemplate::from(data).render()?))
}
