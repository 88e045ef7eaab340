//! Write side of the content store, as used by the administrative surface.
//!
//! Every save is validated first; problems come back as field-level
//! `ValidationErrors` so a form can show them next to the inputs.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::info;

use crate::database::activity_repo::{self, ActivityListFilter};
use crate::database::contribution_repo::{self, OpportunityListFilter};
use crate::database::faq_repo::{self, FaqListFilter};
use crate::database::organizer_repo::{self, OrganizerListFilter};
use crate::database::social_platform_repo::{self, PlatformListFilter};
use crate::database::activity_publication_repo;
use crate::error::{AppError, ValidationErrors};
use crate::models::{
    Activity, ActivityInput, ActivityKind, ActivityPublicationInput, ContributionOpportunity,
    ContributionOpportunityInput, Faq, FaqInput, LinkType, Organizer, OrganizerInput,
    SocialMediaPlatform, SocialMediaPlatformInput,
};
use crate::services::validation::Checker;

const TITLE_MAX: usize = 200;
const NAME_MAX: usize = 100;
const LOCATION_NAME_MAX: usize = 200;
const ADDRESS_MAX: usize = 300;
const SCHEDULE_MAX: usize = 200;
const ICON_CLASS_MAX: usize = 50;

fn ensure_found(rows_affected: u64) -> Result<(), AppError> {
    if rows_affected == 0 {
        Err(AppError::NotFound)
    } else {
        Ok(())
    }
}

// ---- activities ----

pub fn validate_activity(input: &ActivityInput) -> Result<(), ValidationErrors> {
    let mut c = Checker::new();
    c.required("title_ko", &input.title_ko, TITLE_MAX)
        .required("title_en", &input.title_en, TITLE_MAX)
        .required("description_ko", &input.description_ko, usize::MAX)
        .required("description_en", &input.description_en, usize::MAX);

    match &input.kind {
        ActivityKind::Event(event) => {
            c.max_len("location_name_ko", &event.location.name_ko, LOCATION_NAME_MAX)
                .max_len("location_name_en", &event.location.name_en, LOCATION_NAME_MAX)
                .max_len("location_address", &event.location.address, ADDRESS_MAX)
                .optional_url("location_url", &event.location.url);
            if let (Some(start), Some(end)) = (event.starts_at, event.ends_at) {
                c.check(
                    "end_datetime",
                    end >= start,
                    "The end time cannot be before the start time.",
                );
            }
            c.check(
                "start_datetime",
                event.starts_at.is_some() || event.ends_at.is_none(),
                "An end time needs a start time.",
            );
        }
        ActivityKind::StudyGroup(group) => {
            c.max_len(
                "meeting_schedule_ko",
                group.meeting_schedule_ko.as_deref().unwrap_or(""),
                SCHEDULE_MAX,
            )
            .max_len(
                "meeting_schedule_en",
                group.meeting_schedule_en.as_deref().unwrap_or(""),
                SCHEDULE_MAX,
            );
        }
    }
    c.finish()
}

pub async fn create_activity(
    pool: &SqlitePool,
    input: &ActivityInput,
    now: DateTime<Utc>,
) -> Result<i64, AppError> {
    validate_activity(input)?;
    let id = activity_repo::insert_activity(pool, input, now).await?;
    info!(
        "Created activity {} ({})",
        id,
        input.kind.activity_type().as_str()
    );
    Ok(id)
}

pub async fn update_activity(
    pool: &SqlitePool,
    id: i64,
    input: &ActivityInput,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    validate_activity(input)?;
    ensure_found(activity_repo::update_activity(pool, id, input, now).await?)
}

/// Soft hide (`false`) or re-show (`true`) an activity.
pub async fn set_activity_public(
    pool: &SqlitePool,
    id: i64,
    is_public: bool,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    ensure_found(activity_repo::set_public(pool, id, is_public, now).await?)
}

pub async fn get_activity(pool: &SqlitePool, id: i64) -> Result<Activity, AppError> {
    activity_repo::load_by_id(pool, id)
        .await?
        .map(Activity::from)
        .ok_or(AppError::NotFound)
}

pub async fn list_activities(
    pool: &SqlitePool,
    filter: &ActivityListFilter,
) -> Result<Vec<Activity>, AppError> {
    let rows = activity_repo::list_filtered(pool, filter).await?;
    Ok(rows.into_iter().map(Activity::from).collect())
}

// ---- organizers ----

pub fn validate_organizer(input: &OrganizerInput) -> Result<(), ValidationErrors> {
    let mut c = Checker::new();
    c.required("name_ko", &input.name_ko, NAME_MAX)
        .required("name_en", &input.name_en, NAME_MAX)
        .required("role_ko", &input.role_ko, NAME_MAX)
        .required("role_en", &input.role_en, NAME_MAX)
        .optional_email("email", &input.email)
        .optional_url("github", &input.github)
        .optional_url("linkedin", &input.linkedin);
    c.finish()
}

pub async fn create_organizer(
    pool: &SqlitePool,
    input: &OrganizerInput,
    now: DateTime<Utc>,
) -> Result<i64, AppError> {
    validate_organizer(input)?;
    Ok(organizer_repo::insert_organizer(pool, input, now).await?)
}

pub async fn update_organizer(
    pool: &SqlitePool,
    id: i64,
    input: &OrganizerInput,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    validate_organizer(input)?;
    ensure_found(organizer_repo::update_organizer(pool, id, input, now).await?)
}

pub async fn set_organizer_public(
    pool: &SqlitePool,
    id: i64,
    is_public: bool,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    ensure_found(organizer_repo::set_public(pool, id, is_public, now).await?)
}

pub async fn get_organizer(pool: &SqlitePool, id: i64) -> Result<Organizer, AppError> {
    organizer_repo::load_by_id(pool, id)
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn list_organizers(
    pool: &SqlitePool,
    filter: &OrganizerListFilter,
) -> Result<Vec<Organizer>, AppError> {
    Ok(organizer_repo::list_filtered(pool, filter).await?)
}

// ---- FAQs ----

pub fn validate_faq(input: &FaqInput) -> Result<(), ValidationErrors> {
    let mut c = Checker::new();
    c.required("question_ko", &input.question_ko, TITLE_MAX)
        .required("question_en", &input.question_en, TITLE_MAX)
        .required("answer_ko", &input.answer_ko, usize::MAX)
        .required("answer_en", &input.answer_en, usize::MAX);
    c.finish()
}

pub async fn create_faq(
    pool: &SqlitePool,
    input: &FaqInput,
    now: DateTime<Utc>,
) -> Result<i64, AppError> {
    validate_faq(input)?;
    Ok(faq_repo::insert_faq(pool, input, now).await?)
}

pub async fn update_faq(
    pool: &SqlitePool,
    id: i64,
    input: &FaqInput,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    validate_faq(input)?;
    ensure_found(faq_repo::update_faq(pool, id, input, now).await?)
}

pub async fn set_faq_public(
    pool: &SqlitePool,
    id: i64,
    is_public: bool,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    ensure_found(faq_repo::set_public(pool, id, is_public, now).await?)
}

pub async fn get_faq(pool: &SqlitePool, id: i64) -> Result<Faq, AppError> {
    faq_repo::load_by_id(pool, id)
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn list_faqs(pool: &SqlitePool, filter: &FaqListFilter) -> Result<Vec<Faq>, AppError> {
    Ok(faq_repo::list_filtered(pool, filter).await?)
}

// ---- social media platforms ----

pub fn validate_platform(input: &SocialMediaPlatformInput) -> Result<(), ValidationErrors> {
    let mut c = Checker::new();
    c.required("name_ko", &input.name_ko, NAME_MAX)
        .required("name_en", &input.name_en, NAME_MAX)
        .url("url", &input.url)
        .max_len("icon_class", &input.icon_class, ICON_CLASS_MAX);
    c.finish()
}

pub async fn create_platform(
    pool: &SqlitePool,
    input: &SocialMediaPlatformInput,
    now: DateTime<Utc>,
) -> Result<i64, AppError> {
    validate_platform(input)?;
    Ok(social_platform_repo::insert_platform(pool, input, now).await?)
}

/// A platform that already carries publications must stay a publication
/// platform.
pub async fn update_platform(
    pool: &SqlitePool,
    id: i64,
    input: &SocialMediaPlatformInput,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    validate_platform(input)?;
    if input.link_type != LinkType::PublicationPlatform
        && activity_publication_repo::count_for_platform(pool, id).await? > 0
    {
        return Err(ValidationErrors::single(
            "link_type",
            "This platform has activity publications and must remain a publication platform.",
        )
        .into());
    }
    ensure_found(social_platform_repo::update_platform(pool, id, input, now).await?)
}

pub async fn set_platform_active(
    pool: &SqlitePool,
    id: i64,
    is_active: bool,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    ensure_found(social_platform_repo::set_active(pool, id, is_active, now).await?)
}

pub async fn get_platform(pool: &SqlitePool, id: i64) -> Result<SocialMediaPlatform, AppError> {
    social_platform_repo::load_by_id(pool, id)
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn list_platforms(
    pool: &SqlitePool,
    filter: &PlatformListFilter,
) -> Result<Vec<SocialMediaPlatform>, AppError> {
    Ok(social_platform_repo::list_filtered(pool, filter).await?)
}

// ---- activity publications ----

pub async fn publish_activity(
    pool: &SqlitePool,
    input: &ActivityPublicationInput,
    now: DateTime<Utc>,
) -> Result<i64, AppError> {
    let mut c = Checker::new();
    c.url("publication_url", &input.publication_url);

    if activity_repo::load_by_id(pool, input.activity_id).await?.is_none() {
        c.check("activity", false, "Select a valid activity.");
    }
    match social_platform_repo::load_by_id(pool, input.platform_id).await? {
        None => {
            c.check("platform", false, "Select a valid platform.");
        }
        Some(platform) => {
            c.check(
                "platform",
                platform.link_type == LinkType::PublicationPlatform,
                "Only publication platforms can carry activity publications.",
            );
        }
    }
    if activity_publication_repo::load_by_pair(pool, input.activity_id, input.platform_id)
        .await?
        .is_some()
    {
        c.check(
            "platform",
            false,
            "This activity is already published on this platform.",
        );
    }
    c.finish()?;

    let id = activity_publication_repo::insert_publication(pool, input, now).await?;
    info!(
        "Recorded publication of activity {} on platform {}",
        input.activity_id, input.platform_id
    );
    Ok(id)
}

pub async fn remove_publication(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    ensure_found(activity_publication_repo::delete_publication(pool, id).await?)
}

// ---- contribution opportunities ----

pub fn validate_opportunity(input: &ContributionOpportunityInput) -> Result<(), ValidationErrors> {
    let mut c = Checker::new();
    c.required("title_ko", &input.title_ko, TITLE_MAX)
        .required("title_en", &input.title_en, TITLE_MAX)
        .required("description_ko", &input.description_ko, usize::MAX)
        .required("description_en", &input.description_en, usize::MAX)
        .required("contact_method_ko", &input.contact_method_ko, usize::MAX)
        .required("contact_method_en", &input.contact_method_en, usize::MAX);
    c.finish()
}

pub async fn create_opportunity(
    pool: &SqlitePool,
    input: &ContributionOpportunityInput,
    now: DateTime<Utc>,
) -> Result<i64, AppError> {
    validate_opportunity(input)?;
    Ok(contribution_repo::insert_opportunity(pool, input, now).await?)
}

pub async fn update_opportunity(
    pool: &SqlitePool,
    id: i64,
    input: &ContributionOpportunityInput,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    validate_opportunity(input)?;
    ensure_found(contribution_repo::update_opportunity(pool, id, input, now).await?)
}

pub async fn set_opportunity_public(
    pool: &SqlitePool,
    id: i64,
    is_public: bool,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    ensure_found(contribution_repo::set_public(pool, id, is_public, now).await?)
}

pub async fn get_opportunity(
    pool: &SqlitePool,
    id: i64,
) -> Result<ContributionOpportunity, AppError> {
    contribution_repo::load_by_id(pool, id)
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn list_opportunities(
    pool: &SqlitePool,
    filter: &OpportunityListFilter,
) -> Result<Vec<ContributionOpportunity>, AppError> {
    Ok(contribution_repo::list_filtered(pool, filter).await?)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::database::connect_in_memory;
    use crate::models::{EventDetails, EventFormat, EventLocation, StudyGroupDetails};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 1, 0, 0).unwrap()
    }

    fn seminar() -> ActivityInput {
        ActivityInput {
            title_ko: "파이썬 세미나".to_string(),
            title_en: "Python seminar".to_string(),
            description_ko: "설명".to_string(),
            description_en: "Description".to_string(),
            kind: ActivityKind::Event(EventDetails {
                format: EventFormat::Seminar,
                starts_at: Some(now() + Duration::days(7)),
                ends_at: Some(now() + Duration::days(7) + Duration::hours(2)),
                location: EventLocation {
                    name_ko: "강남".to_string(),
                    name_en: "Gangnam".to_string(),
                    address: String::new(),
                    url: "https://maps.example.com/gangnam".to_string(),
                },
            }),
            image: None,
            is_public: true,
            is_featured: false,
        }
    }

    fn platform(name: &str, link_type: LinkType) -> SocialMediaPlatformInput {
        SocialMediaPlatformInput {
            name_ko: name.to_string(),
            name_en: name.to_string(),
            url: format!("https://{}.example.com", name.to_lowercase()),
            link_type,
            icon: None,
            icon_class: String::new(),
            sort_order: 0,
            is_active: true,
        }
    }

    fn publication(activity_id: i64, platform_id: i64) -> ActivityPublicationInput {
        ActivityPublicationInput {
            activity_id,
            platform_id,
            publication_url: "https://festa.example.com/events/1".to_string(),
            published_at: Some(now()),
        }
    }

    fn validation_of(result: Result<impl std::fmt::Debug, AppError>) -> ValidationErrors {
        match result {
            Err(AppError::Validation(errors)) => errors,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn event_end_before_start_is_rejected() {
        let mut input = seminar();
        if let ActivityKind::Event(event) = &mut input.kind {
            event.ends_at = Some(now());
        }
        let errors = validate_activity(&input).unwrap_err();
        assert!(errors.for_field("end_datetime").is_some());
    }

    #[test]
    fn missing_titles_and_long_schedules_are_reported_per_field() {
        let input = ActivityInput {
            title_ko: "  ".to_string(),
            kind: ActivityKind::StudyGroup(StudyGroupDetails {
                meeting_schedule_ko: Some("가".repeat(201)),
                meeting_schedule_en: None,
                is_recruiting: true,
            }),
            ..seminar()
        };
        let errors = validate_activity(&input).unwrap_err();
        assert!(errors.for_field("title_ko").is_some());
        assert!(errors.for_field("meeting_schedule_ko").is_some());
        assert!(errors.for_field("title_en").is_none());
    }

    #[test]
    fn organizer_contact_fields_are_checked() {
        let input = OrganizerInput {
            name_ko: "김파이".to_string(),
            name_en: "Pi Kim".to_string(),
            role_ko: "운영진".to_string(),
            role_en: "Organizer".to_string(),
            email: "not-an-email".to_string(),
            github: "github.com/pikim".to_string(),
            ..OrganizerInput::default()
        };
        let errors = validate_organizer(&input).unwrap_err();
        assert!(errors.for_field("email").is_some());
        assert!(errors.for_field("github").is_some());
        assert!(errors.for_field("linkedin").is_none());
    }

    #[tokio::test]
    async fn activity_round_trips_through_store() {
        let pool = connect_in_memory().await.unwrap();
        let id = create_activity(&pool, &seminar(), now()).await.unwrap();

        let stored = get_activity(&pool, id).await.unwrap();
        assert_eq!(stored.kind, seminar().kind);
        assert_eq!(stored.location_en(), "Gangnam");

        set_activity_public(&pool, id, false, now()).await.unwrap();
        assert!(!get_activity(&pool, id).await.unwrap().is_public);

        let hidden = list_activities(
            &pool,
            &ActivityListFilter {
                is_public: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(hidden.len(), 1);
    }

    #[tokio::test]
    async fn updating_missing_rows_is_not_found() {
        let pool = connect_in_memory().await.unwrap();
        assert!(matches!(
            update_activity(&pool, 404, &seminar(), now()).await,
            Err(AppError::NotFound)
        ));
        assert!(matches!(
            set_faq_public(&pool, 404, false, now()).await,
            Err(AppError::NotFound)
        ));
        assert!(matches!(
            remove_publication(&pool, 404).await,
            Err(AppError::NotFound)
        ));
    }

    #[tokio::test]
    async fn publications_require_publication_platform() {
        let pool = connect_in_memory().await.unwrap();
        let activity = create_activity(&pool, &seminar(), now()).await.unwrap();
        let discord = create_platform(&pool, &platform("Discord", LinkType::MainChannel), now())
            .await
            .unwrap();

        let errors = validation_of(publish_activity(&pool, &publication(activity, discord), now()).await);
        assert!(errors.for_field("platform").is_some());

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM activity_publications")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn schema_rejects_publication_on_main_channel() {
        let pool = connect_in_memory().await.unwrap();
        let activity = create_activity(&pool, &seminar(), now()).await.unwrap();
        let slack = create_platform(&pool, &platform("Slack", LinkType::MainChannel), now())
            .await
            .unwrap();

        let result =
            activity_publication_repo::insert_publication(&pool, &publication(activity, slack), now())
                .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn duplicate_publication_is_rejected() {
        let pool = connect_in_memory().await.unwrap();
        let activity = create_activity(&pool, &seminar(), now()).await.unwrap();
        let festa = create_platform(
            &pool,
            &platform("Festa", LinkType::PublicationPlatform),
            now(),
        )
        .await
        .unwrap();

        publish_activity(&pool, &publication(activity, festa), now())
            .await
            .unwrap();
        let errors = validation_of(publish_activity(&pool, &publication(activity, festa), now()).await);
        assert_eq!(
            errors.for_field("platform").map(|e| e.message.as_str()),
            Some("This activity is already published on this platform.")
        );
    }

    #[tokio::test]
    async fn platform_with_publications_keeps_its_type() {
        let pool = connect_in_memory().await.unwrap();
        let activity = create_activity(&pool, &seminar(), now()).await.unwrap();
        let festa_input = platform("Festa", LinkType::PublicationPlatform);
        let festa = create_platform(&pool, &festa_input, now()).await.unwrap();
        publish_activity(&pool, &publication(activity, festa), now())
            .await
            .unwrap();

        let demoted = SocialMediaPlatformInput {
            link_type: LinkType::MainChannel,
            ..festa_input.clone()
        };
        let errors = validation_of(update_platform(&pool, festa, &demoted, now()).await);
        assert!(errors.for_field("link_type").is_some());

        let renamed = SocialMediaPlatformInput {
            name_en: "Festa!".to_string(),
            ..festa_input
        };
        update_platform(&pool, festa, &renamed, now()).await.unwrap();
        assert_eq!(get_platform(&pool, festa).await.unwrap().name_en, "Festa!");
    }
}
