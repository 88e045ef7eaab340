use askama::Template;
use axum::{extract::State, response::Html};
use sqlx::SqlitePool;
use tracing::warn;

use crate::config::CommunityInfo;
use crate::error::AppError;
use crate::services::coc_service::{self, CocPageData, RenderedCodeOfConduct};

#[derive(Template)]
#[template(path = "coc.html")]
pub struct CocTemplate {
    pub coc_info: RenderedCodeOfConduct,
    pub community_info: &'static CommunityInfo,
    pub discord_url: Option<String>,
}

impl From<CocPageData> for CocTemplate {
    fn from(data: CocPageData) -> Self {
        CocTemplate {
            coc_info: data.coc_info,
            community_info: data.community_info,
            discord_url: data.discord_url,
        }
    }
}

pub async fn coc_handler(State(pool): State<SqlitePool>) -> Result<Html<String>, AppError> {
    let data = coc_service::build_coc_page(&pool).await.map_err(|e| {
        warn!("Code of conduct page load failed: {}", e);
        e
    })?;
    Ok(Html(CocTemplate::from(data).render()?))
}
