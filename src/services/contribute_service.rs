use sqlx::SqlitePool;

use crate::config::{CommunityInfo, COMMUNITY_INFO};
use crate::database::contribution_repo;
use crate::models::{ContributionOpportunity, OpportunityType};
use crate::services::platform_service::{self, SocialPlatformView};

pub struct OpportunityView {
    pub opportunity_type: OpportunityType,
    pub type_label_ko: &'static str,
    pub type_label_en: &'static str,
    pub title_ko: String,
    pub title_en: String,
    pub description_ko: String,
    pub description_en: String,
    pub requirements_ko: String,
    pub requirements_en: String,
    pub contact_method_ko: String,
    pub contact_method_en: String,
    pub is_open: bool,
}

impl From<ContributionOpportunity> for OpportunityView {
    fn from(o: ContributionOpportunity) -> Self {
        OpportunityView {
            opportunity_type: o.opportunity_type,
            type_label_ko: o.opportunity_type.label_ko(),
            type_label_en: o.opportunity_type.label_en(),
            title_ko: o.title_ko,
            title_en: o.title_en,
            description_ko: o.description_ko,
            description_en: o.description_en,
            requirements_ko: o.requirements_ko,
            requirements_en: o.requirements_en,
            contact_method_ko: o.contact_method_ko,
            contact_method_en: o.contact_method_en,
            is_open: o.is_open,
        }
    }
}

pub struct ContributePageData {
    pub community_info: &'static CommunityInfo,
    pub social_platforms: Vec<SocialPlatformView>,
    pub discord_url: Option<String>,
    pub opportunities: Vec<OpportunityView>,
}

pub async fn build_contribute_page(pool: &SqlitePool) -> sqlx::Result<ContributePageData> {
    let opportunities = contribution_repo::list_public(pool).await?;
    Ok(ContributePageData {
        community_info: &COMMUNITY_INFO,
        social_platforms: platform_service::list_social_platforms(pool).await?,
        discord_url: platform_service::discord_url(pool).await?,
        opportunities: opportunities.into_iter().map(OpportunityView::from).collect(),
    })
}
