use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::config::{CommunityInfo, COMMUNITY_INFO};
use crate::database::{activity_repo, organizer_repo};
use crate::models::{Activity, Organizer};
use crate::services::events_service::{self, ActivityCardView};
use crate::services::media_url;
use crate::services::platform_service::{self, SocialPlatformView};

pub const HOME_EVENTS_LIMIT: i64 = 6;
pub const HOME_ORGANIZERS_LIMIT: i64 = 6;

pub struct OrganizerView {
    pub name_ko: String,
    pub name_en: String,
    pub role_ko: String,
    pub role_en: String,
    pub bio_ko: String,
    pub bio_en: String,
    pub photo_url: Option<String>,
    pub email: String,
    pub github: String,
    pub linkedin: String,
}

impl From<Organizer> for OrganizerView {
    fn from(o: Organizer) -> Self {
        OrganizerView {
            photo_url: media_url(o.photo.as_deref()),
            name_ko: o.name_ko,
            name_en: o.name_en,
            role_ko: o.role_ko,
            role_en: o.role_en,
            bio_ko: o.bio_ko,
            bio_en: o.bio_en,
            email: o.email,
            github: o.github,
            linkedin: o.linkedin,
        }
    }
}

pub struct HomePageData {
    pub community_info: &'static CommunityInfo,
    pub social_platforms: Vec<SocialPlatformView>,
    pub discord_url: Option<String>,
    pub upcoming_events: Vec<ActivityCardView>,
    pub past_events: Vec<ActivityCardView>,
    pub organizers: Vec<OrganizerView>,
}

/// Upcoming means starting at or after `now`; everything earlier is past.
pub async fn build_home_page(pool: &SqlitePool, now: DateTime<Utc>) -> sqlx::Result<HomePageData> {
    let upcoming = activity_repo::list_upcoming_public(pool, now, HOME_EVENTS_LIMIT).await?;
    let past = activity_repo::list_past_public(pool, now, HOME_EVENTS_LIMIT).await?;
    let organizers = organizer_repo::list_public(pool, HOME_ORGANIZERS_LIMIT).await?;

    Ok(HomePageData {
        community_info: &COMMUNITY_INFO,
        social_platforms: platform_service::list_social_platforms(pool).await?,
        discord_url: platform_service::discord_url(pool).await?,
        upcoming_events: upcoming
            .into_iter()
            .map(|row| events_service::card_view(&Activity::from(row)))
            .collect(),
        past_events: past
            .into_iter()
            .map(|row| events_service::card_view(&Activity::from(row)))
            .collect(),
        organizers: organizers.into_iter().map(OrganizerView::from).collect(),
    })
}
