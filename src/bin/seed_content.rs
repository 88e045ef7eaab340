//! Loads a small demo content set through the administrative write API.
//!
//! Run against an empty database: `cargo run --bin seed_content`.

use anyhow::Context;
use chrono::{DateTime, Duration, Utc};
use dotenvy::dotenv;
use sqlx::SqlitePool;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pyladies_seoul::config::Config;
use pyladies_seoul::database;
use pyladies_seoul::models::{
    ActivityInput, ActivityKind, ActivityPublicationInput, ContributionOpportunityInput,
    EventDetails, EventFormat, EventLocation, FaqCategory, FaqInput, LinkType, OpportunityType,
    OrganizerInput, SocialMediaPlatformInput, StudyGroupDetails,
};
use pyladies_seoul::services::admin_service;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("reading configuration")?;
    let pool = database::connect(&config.database_url)
        .await
        .with_context(|| format!("opening database {}", config.database_url))?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM activities")
        .fetch_one(&pool)
        .await?;
    if existing > 0 {
        info!("Database already has {} activities; nothing to seed", existing);
        return Ok(());
    }

    let now = Utc::now();
    seed(&pool, now).await?;
    info!("Seeded demo content into {}", config.database_url);
    Ok(())
}

async fn seed(pool: &SqlitePool, now: DateTime<Utc>) -> anyhow::Result<()> {
    for (order, (name_ko, name_en, url, link_type, icon_class)) in [
        ("디스코드 서버", "Discord Server", "https://discord.gg/pyladies-seoul", LinkType::MainChannel, "fab fa-discord"),
        ("깃허브", "GitHub", "https://github.com/pyladies-seoul", LinkType::MainChannel, "fab fa-github"),
        ("인스타그램", "Instagram", "https://www.instagram.com/pyladies.seoul", LinkType::MainChannel, "fab fa-instagram"),
        ("페스타", "Festa", "https://festa.io", LinkType::PublicationPlatform, "fas fa-ticket"),
        ("밋업", "Meetup", "https://www.meetup.com", LinkType::PublicationPlatform, "fab fa-meetup"),
    ]
    .into_iter()
    .enumerate()
    {
        admin_service::create_platform(
            pool,
            &SocialMediaPlatformInput {
                name_ko: name_ko.to_string(),
                name_en: name_en.to_string(),
                url: url.to_string(),
                link_type,
                icon: None,
                icon_class: icon_class.to_string(),
                sort_order: order as i64,
                is_active: true,
            },
            now,
        )
        .await?;
    }

    admin_service::create_organizer(
        pool,
        &OrganizerInput {
            name_ko: "김파이".to_string(),
            name_en: "Pi Kim".to_string(),
            role_ko: "오거나이저".to_string(),
            role_en: "Organizer".to_string(),
            bio_ko: "파이썬과 커뮤니티를 좋아합니다.".to_string(),
            bio_en: "Loves Python and community.".to_string(),
            email: "seoul@pyladies.com".to_string(),
            github: "https://github.com/pyladies-seoul".to_string(),
            ..OrganizerInput::default()
        },
        now,
    )
    .await?;

    let upcoming_start = now + Duration::days(14);
    let seminar = admin_service::create_activity(
        pool,
        &ActivityInput {
            title_ko: "파이썬으로 시작하는 데이터 분석".to_string(),
            title_en: "Getting started with data analysis in Python".to_string(),
            description_ko: "pandas 기초부터 시각화까지 함께 알아봅니다.".to_string(),
            description_en: "From pandas basics to visualisation.".to_string(),
            kind: ActivityKind::Event(EventDetails {
                format: EventFormat::Seminar,
                starts_at: Some(upcoming_start),
                ends_at: Some(upcoming_start + Duration::hours(2)),
                location: EventLocation {
                    name_ko: "강남 스타트업 허브".to_string(),
                    name_en: "Gangnam Startup Hub".to_string(),
                    address: "서울특별시 강남구".to_string(),
                    url: String::new(),
                },
            }),
            image: None,
            is_public: true,
            is_featured: true,
        },
        now,
    )
    .await?;

    let past_start = now - Duration::days(30);
    admin_service::create_activity(
        pool,
        &ActivityInput {
            title_ko: "첫 번째 네트워킹 모임".to_string(),
            title_en: "First networking night".to_string(),
            description_ko: "파이레이디스 서울의 첫 모임이었습니다.".to_string(),
            description_en: "The first PyLadies Seoul get-together.".to_string(),
            kind: ActivityKind::Event(EventDetails {
                format: EventFormat::Networking,
                starts_at: Some(past_start),
                ends_at: Some(past_start + Duration::hours(3)),
                location: EventLocation {
                    name_ko: "성수".to_string(),
                    name_en: "Seongsu".to_string(),
                    ..EventLocation::default()
                },
            }),
            image: None,
            is_public: true,
            is_featured: false,
        },
        now,
    )
    .await?;

    admin_service::create_activity(
        pool,
        &ActivityInput {
            title_ko: "Django 스터디".to_string(),
            title_en: "Django study group".to_string(),
            description_ko: "Django 공식 튜토리얼을 함께 완주합니다.".to_string(),
            description_en: "Working through the official Django tutorial together.".to_string(),
            kind: ActivityKind::StudyGroup(StudyGroupDetails {
                meeting_schedule_ko: Some("매주 화요일 저녁 8시 (온라인)".to_string()),
                meeting_schedule_en: Some("Tuesdays at 8pm (online)".to_string()),
                is_recruiting: true,
            }),
            image: None,
            is_public: true,
            is_featured: false,
        },
        now,
    )
    .await?;

    let festa = admin_service::list_platforms(
        pool,
        &database::social_platform_repo::PlatformListFilter {
            link_type: Some(LinkType::PublicationPlatform),
            q: Some("festa".to_string()),
            ..Default::default()
        },
    )
    .await?
    .into_iter()
    .next()
    .context("seeded Festa platform is missing")?;

    admin_service::publish_activity(
        pool,
        &ActivityPublicationInput {
            activity_id: seminar,
            platform_id: festa.id,
            publication_url: "https://festa.io/events/pyladies-seoul-data".to_string(),
            published_at: Some(now),
        },
        now,
    )
    .await?;

    for (order, (category, question_ko, question_en, answer_ko, answer_en)) in [
        (
            FaqCategory::General,
            "파이레이디스 서울은 어떤 곳인가요?",
            "What is PyLadies Seoul?",
            "파이썬을 사용하는 여성 개발자 커뮤니티입니다.",
            "A community for women who use Python.",
        ),
        (
            FaqCategory::Joining,
            "어떻게 참여하나요?",
            "How do I join?",
            "디스코드 서버에 들어와 인사해 주세요.",
            "Join the Discord server and say hello.",
        ),
    ]
    .into_iter()
    .enumerate()
    {
        admin_service::create_faq(
            pool,
            &FaqInput {
                category,
                question_ko: question_ko.to_string(),
                question_en: question_en.to_string(),
                answer_ko: answer_ko.to_string(),
                answer_en: answer_en.to_string(),
                sort_order: order as i64,
                is_public: true,
            },
            now,
        )
        .await?;
    }

    admin_service::create_opportunity(
        pool,
        &ContributionOpportunityInput {
            opportunity_type: OpportunityType::Speaker,
            title_ko: "발표자 모집".to_string(),
            title_en: "Call for speakers".to_string(),
            description_ko: "세미나에서 경험을 나눠 주세요.".to_string(),
            description_en: "Share your experience at a seminar.".to_string(),
            requirements_ko: String::new(),
            requirements_en: String::new(),
            contact_method_ko: "seoul@pyladies.com 으로 메일을 보내 주세요.".to_string(),
            contact_method_en: "Email seoul@pyladies.com.".to_string(),
            sort_order: 0,
            is_open: true,
            is_public: true,
        },
        now,
    )
    .await?;

    Ok(())
}
