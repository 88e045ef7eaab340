use chrono::{DateTime, Utc};
use chrono_tz::Asia::Seoul;
use sqlx::SqlitePool;

use crate::config::{CommunityInfo, COMMUNITY_INFO};
use crate::database::{activity_publication_repo, activity_repo};
use crate::models::{Activity, ActivityKind, ActivityType, PublicationListingRow};
use crate::services::media_url;
use crate::services::platform_service::{self, SocialPlatformView};

pub const RELATED_EVENTS_LIMIT: i64 = 3;

pub struct ActivityCardView {
    pub id: i64,
    pub activity_type: ActivityType,
    pub type_label_ko: &'static str,
    pub type_label_en: &'static str,
    pub title_ko: String,
    pub title_en: String,
    pub description_ko: String,
    pub description_en: String,
    pub is_event: bool,
    pub is_study_group: bool,
    pub is_featured: bool,
    pub starts_at: Option<DateTime<Utc>>,
    pub date_label: Option<String>,
    pub time_label: Option<String>,
    pub end_label: Option<String>,
    pub location_name_ko: String,
    pub location_name_en: String,
    pub location_address: String,
    pub location_url: String,
    pub meeting_schedule_ko: Option<String>,
    pub meeting_schedule_en: Option<String>,
    pub is_recruiting: bool,
    pub image_url: Option<String>,
    pub detail_url: String,
}

pub struct PublicationView {
    pub platform_name_ko: String,
    pub platform_name_en: String,
    pub platform_icon_class: String,
    pub publication_url: String,
    pub published_label: Option<String>,
}

pub struct EventsPageData {
    pub community_info: &'static CommunityInfo,
    pub discord_url: Option<String>,
    pub events: Vec<ActivityCardView>,
}

pub struct EventDetailPageData {
    pub community_info: &'static CommunityInfo,
    pub social_platforms: Vec<SocialPlatformView>,
    pub discord_url: Option<String>,
    pub event: ActivityCardView,
    pub related_events: Vec<ActivityCardView>,
    pub publications: Vec<PublicationView>,
}

pub async fn build_events_page(pool: &SqlitePool) -> sqlx::Result<EventsPageData> {
    let events = activity_repo::list_public(pool).await?;
    Ok(EventsPageData {
        community_info: &COMMUNITY_INFO,
        discord_url: platform_service::discord_url(pool).await?,
        events: events
            .into_iter()
            .map(|row| card_view(&Activity::from(row)))
            .collect(),
    })
}

/// `None` when the activity does not exist or is not public.
pub async fn build_event_detail_page(
    pool: &SqlitePool,
    id: i64,
) -> sqlx::Result<Option<EventDetailPageData>> {
    let Some(row) = activity_repo::load_public_by_id(pool, id).await? else {
        return Ok(None);
    };
    let activity = Activity::from(row);

    let related = activity_repo::list_related_public(
        pool,
        activity.activity_type(),
        activity.id,
        RELATED_EVENTS_LIMIT,
    )
    .await?;
    let publications = activity_publication_repo::list_for_activity(pool, activity.id).await?;

    Ok(Some(EventDetailPageData {
        community_info: &COMMUNITY_INFO,
        social_platforms: platform_service::list_social_platforms(pool).await?,
        discord_url: platform_service::discord_url(pool).await?,
        event: card_view(&activity),
        related_events: related
            .into_iter()
            .map(|row| card_view(&Activity::from(row)))
            .collect(),
        publications: publications.into_iter().map(publication_view).collect(),
    }))
}

pub fn card_view(activity: &Activity) -> ActivityCardView {
    let activity_type = activity.activity_type();
    let mut view = ActivityCardView {
        id: activity.id,
        activity_type,
        type_label_ko: activity_type.label_ko(),
        type_label_en: activity_type.label_en(),
        title_ko: activity.title_ko.clone(),
        title_en: activity.title_en.clone(),
        description_ko: activity.description_ko.clone(),
        description_en: activity.description_en.clone(),
        is_event: activity.is_event(),
        is_study_group: activity.is_study_group(),
        is_featured: activity.is_featured,
        starts_at: activity.date(),
        date_label: None,
        time_label: None,
        end_label: None,
        location_name_ko: String::new(),
        location_name_en: String::new(),
        location_address: String::new(),
        location_url: String::new(),
        meeting_schedule_ko: None,
        meeting_schedule_en: None,
        is_recruiting: false,
        image_url: media_url(activity.image.as_deref()),
        detail_url: format!("/events/{}/", activity.id),
    };

    match &activity.kind {
        ActivityKind::Event(event) => {
            if let Some(start) = event.starts_at {
                view.date_label = Some(format_date_label(start));
                view.time_label = Some(format_time_label(start));
                view.end_label = event.ends_at.map(|end| format_end_label(start, end));
            }
            view.location_name_ko = event.location.name_ko.clone();
            view.location_name_en = event.location.name_en.clone();
            view.location_address = event.location.address.clone();
            view.location_url = event.location.url.clone();
        }
        ActivityKind::StudyGroup(group) => {
            view.meeting_schedule_ko = group.meeting_schedule_ko.clone();
            view.meeting_schedule_en = group.meeting_schedule_en.clone();
            view.is_recruiting = group.is_recruiting;
        }
    }

    view
}

fn publication_view(row: PublicationListingRow) -> PublicationView {
    PublicationView {
        platform_name_ko: row.platform_name_ko,
        platform_name_en: row.platform_name_en,
        platform_icon_class: row.platform_icon_class,
        publication_url: row.publication_url,
        published_label: row.published_at.map(format_date_label),
    }
}

// Dates are shown in Seoul time regardless of server timezone.
fn format_date_label(at: DateTime<Utc>) -> String {
    at.with_timezone(&Seoul).format("%Y-%m-%d").to_string()
}

fn format_time_label(at: DateTime<Utc>) -> String {
    at.with_timezone(&Seoul).format("%H:%M").to_string()
}

fn format_end_label(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    let start = start.with_timezone(&Seoul);
    let end = end.with_timezone(&Seoul);
    if start.date_naive() == end.date_naive() {
        end.format("%H:%M").to_string()
    } else {
        end.format("%Y-%m-%d %H:%M").to_string()
    }
}
