#![allow(dead_code)]

use axum::body::Body;
use axum::Router;
use chrono::{DateTime, Duration, TimeZone, Utc};
use http::{Request, Response, StatusCode};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use pyladies_seoul::config::Config;
use pyladies_seoul::database;
use pyladies_seoul::models::{
    ActivityInput, ActivityKind, ContributionOpportunityInput, EventDetails,
    EventFormat, EventLocation, FaqCategory, FaqInput, LinkType, OpportunityType,
    OrganizerInput, SocialMediaPlatformInput, StudyGroupDetails,
};
use pyladies_seoul::services::admin_service;
use pyladies_seoul::web;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 3, 0, 0).unwrap()
}

pub async fn pool() -> SqlitePool {
    database::connect_in_memory().await.unwrap()
}

pub fn app(pool: &SqlitePool) -> Router {
    let config = Config::from_lookup(|_| None).unwrap();
    web::app(pool.clone(), &config)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response: Response<Body> = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub fn event_input(title: &str, format: EventFormat, starts_at: Option<DateTime<Utc>>) -> ActivityInput {
    ActivityInput {
        title_ko: format!("{} (ko)", title),
        title_en: title.to_string(),
        description_ko: "설명".to_string(),
        description_en: "Description".to_string(),
        kind: ActivityKind::Event(EventDetails {
            format,
            starts_at,
            ends_at: starts_at.map(|s| s + Duration::hours(2)),
            location: EventLocation {
                name_ko: "서울".to_string(),
                name_en: "Seoul".to_string(),
                ..EventLocation::default()
            },
        }),
        image: None,
        is_public: true,
        is_featured: false,
    }
}

pub fn study_group_input(title: &str) -> ActivityInput {
    ActivityInput {
        title_ko: format!("{} (ko)", title),
        title_en: title.to_string(),
        description_ko: "스터디".to_string(),
        description_en: "Study".to_string(),
        kind: ActivityKind::StudyGroup(StudyGroupDetails {
            meeting_schedule_ko: Some("매주 수요일".to_string()),
            meeting_schedule_en: Some("Every Wednesday".to_string()),
            is_recruiting: true,
        }),
        image: None,
        is_public: true,
        is_featured: false,
    }
}

pub async fn add_activity(pool: &SqlitePool, input: ActivityInput) -> i64 {
    admin_service::create_activity(pool, &input, fixed_now())
        .await
        .unwrap()
}

pub async fn add_event(
    pool: &SqlitePool,
    title: &str,
    format: EventFormat,
    starts_at: DateTime<Utc>,
) -> i64 {
    add_activity(pool, event_input(title, format, Some(starts_at))).await
}

pub async fn add_private_event(pool: &SqlitePool, title: &str, starts_at: DateTime<Utc>) -> i64 {
    let input = ActivityInput {
        is_public: false,
        ..event_input(title, EventFormat::Seminar, Some(starts_at))
    };
    add_activity(pool, input).await
}

pub async fn add_platform(
    pool: &SqlitePool,
    name_en: &str,
    url: &str,
    link_type: LinkType,
    sort_order: i64,
) -> i64 {
    admin_service::create_platform(
        pool,
        &SocialMediaPlatformInput {
            name_ko: name_en.to_string(),
            name_en: name_en.to_string(),
            url: url.to_string(),
            link_type,
            icon: None,
            icon_class: String::new(),
            sort_order,
            is_active: true,
        },
        fixed_now(),
    )
    .await
    .unwrap()
}

pub fn faq_input(category: FaqCategory, question_en: &str, sort_order: i64) -> FaqInput {
    FaqInput {
        category,
        question_ko: format!("{} (ko)", question_en),
        question_en: question_en.to_string(),
        answer_ko: "답변".to_string(),
        answer_en: "Answer".to_string(),
        sort_order,
        is_public: true,
    }
}

pub async fn add_faq(pool: &SqlitePool, category: FaqCategory, question_en: &str, is_public: bool) -> i64 {
    let input = FaqInput {
        is_public,
        ..faq_input(category, question_en, 0)
    };
    admin_service::create_faq(pool, &input, fixed_now()).await.unwrap()
}

pub fn opportunity_input(
    opportunity_type: OpportunityType,
    title_ko: &str,
    title_en: &str,
    sort_order: i64,
) -> ContributionOpportunityInput {
    ContributionOpportunityInput {
        opportunity_type,
        title_ko: title_ko.to_string(),
        title_en: title_en.to_string(),
        description_ko: "설명".to_string(),
        description_en: "Description".to_string(),
        requirements_ko: String::new(),
        requirements_en: String::new(),
        contact_method_ko: "메일".to_string(),
        contact_method_en: "Email us".to_string(),
        sort_order,
        is_open: true,
        is_public: true,
    }
}

pub async fn add_opportunity(pool: &SqlitePool, title_en: &str, is_public: bool) -> i64 {
    let input = ContributionOpportunityInput {
        is_public,
        ..opportunity_input(OpportunityType::Volunteer, &format!("{} (ko)", title_en), title_en, 0)
    };
    admin_service::create_opportunity(pool, &input, fixed_now())
        .await
        .unwrap()
}

pub async fn add_organizer(pool: &SqlitePool, name: &str, sort_order: i64, is_public: bool) -> i64 {
    admin_service::create_organizer(
        pool,
        &OrganizerInput {
            name_ko: name.to_string(),
            name_en: name.to_string(),
            role_ko: "운영진".to_string(),
            role_en: "Organizer".to_string(),
            sort_order,
            is_public,
            ..OrganizerInput::default()
        },
        fixed_now(),
    )
    .await
    .unwrap()
}
