mod common;

use common::*;
use pyladies_seoul::database::activity_repo::ActivityListFilter;
use pyladies_seoul::database::contribution_repo::OpportunityListFilter;
use pyladies_seoul::database::faq_repo::FaqListFilter;
use pyladies_seoul::database::organizer_repo::OrganizerListFilter;
use pyladies_seoul::database::social_platform_repo::PlatformListFilter;
use pyladies_seoul::models::{
    ContributionOpportunityInput, EventFormat, FaqCategory, FaqInput, LinkType, OpportunityType,
};
use pyladies_seoul::services::admin_service;

fn search(q: &str) -> Option<String> {
    Some(q.to_string())
}

#[tokio::test]
async fn activity_search_treats_wildcards_literally() {
    let pool = pool().await;
    let now = fixed_now();
    add_event(&pool, "Python seminar", EventFormat::Seminar, now).await;
    add_event(&pool, "Django 100% day", EventFormat::Seminar, now).await;

    let titles = |rows: Vec<pyladies_seoul::models::Activity>| -> Vec<String> {
        rows.into_iter().map(|a| a.title_en).collect()
    };

    let underscore = admin_service::list_activities(
        &pool,
        &ActivityListFilter { q: search("_"), ..Default::default() },
    )
    .await
    .unwrap();
    assert!(underscore.is_empty());

    let percent = admin_service::list_activities(
        &pool,
        &ActivityListFilter { q: search("100%"), ..Default::default() },
    )
    .await
    .unwrap();
    assert_eq!(titles(percent), vec!["Django 100% day"]);

    let bare_percent = admin_service::list_activities(
        &pool,
        &ActivityListFilter { q: search("%"), ..Default::default() },
    )
    .await
    .unwrap();
    assert_eq!(titles(bare_percent), vec!["Django 100% day"]);

    let mixed_case = admin_service::list_activities(
        &pool,
        &ActivityListFilter { q: search("PYTHON"), ..Default::default() },
    )
    .await
    .unwrap();
    assert_eq!(titles(mixed_case), vec!["Python seminar"]);
}

#[tokio::test]
async fn activity_filter_by_type_and_recruiting() {
    let pool = pool().await;
    add_event(&pool, "Workshop", EventFormat::Workshop, fixed_now()).await;
    add_activity(&pool, study_group_input("Recruiting study")).await;

    let groups = admin_service::list_activities(
        &pool,
        &ActivityListFilter {
            is_recruiting: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].title_en, "Recruiting study");

    let workshops = admin_service::list_activities(
        &pool,
        &ActivityListFilter {
            activity_type: Some(pyladies_seoul::models::ActivityType::Workshop),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(workshops.len(), 1);
    assert_eq!(workshops[0].title_en, "Workshop");
}

#[tokio::test]
async fn organizer_filter_by_visibility_and_search() {
    let pool = pool().await;
    add_organizer(&pool, "Visible Kim", 0, true).await;
    add_organizer(&pool, "Hidden Lee", 1, false).await;
    add_organizer(&pool, "Visible Park", 2, true).await;

    let hidden = admin_service::list_organizers(
        &pool,
        &OrganizerListFilter { is_public: Some(false), q: None },
    )
    .await
    .unwrap();
    let names: Vec<&str> = hidden.iter().map(|o| o.name_en.as_str()).collect();
    assert_eq!(names, vec!["Hidden Lee"]);

    let found = admin_service::list_organizers(
        &pool,
        &OrganizerListFilter { is_public: None, q: search("park") },
    )
    .await
    .unwrap();
    let names: Vec<&str> = found.iter().map(|o| o.name_en.as_str()).collect();
    assert_eq!(names, vec!["Visible Park"]);

    let all = admin_service::list_organizers(&pool, &OrganizerListFilter::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn faq_filter_by_category_visibility_and_search() {
    let pool = pool().await;
    let now = fixed_now();
    admin_service::create_faq(&pool, &faq_input(FaqCategory::Technical, "Which Python version?", 0), now)
        .await
        .unwrap();
    admin_service::create_faq(&pool, &faq_input(FaqCategory::Contact, "How to reach you?", 0), now)
        .await
        .unwrap();
    admin_service::create_faq(
        &pool,
        &FaqInput {
            is_public: false,
            ..faq_input(FaqCategory::Technical, "Draft technical question", 1)
        },
        now,
    )
    .await
    .unwrap();

    let technical = admin_service::list_faqs(
        &pool,
        &FaqListFilter {
            category: Some(FaqCategory::Technical),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let questions: Vec<&str> = technical.iter().map(|f| f.question_en.as_str()).collect();
    assert_eq!(questions, vec!["Which Python version?", "Draft technical question"]);

    let public_technical = admin_service::list_faqs(
        &pool,
        &FaqListFilter {
            category: Some(FaqCategory::Technical),
            is_public: Some(true),
            q: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(public_technical.len(), 1);

    let searched = admin_service::list_faqs(
        &pool,
        &FaqListFilter { q: search("reach"), ..Default::default() },
    )
    .await
    .unwrap();
    assert_eq!(searched.len(), 1);
    assert_eq!(searched[0].category, FaqCategory::Contact);
}

#[tokio::test]
async fn platform_filter_by_type_activity_and_search() {
    let pool = pool().await;
    let now = fixed_now();
    add_platform(&pool, "Discord Server", "https://discord.gg/x", LinkType::MainChannel, 0).await;
    let festa = add_platform(&pool, "Festa", "https://festa.io", LinkType::PublicationPlatform, 1).await;
    add_platform(&pool, "Meetup", "https://meetup.com", LinkType::PublicationPlatform, 2).await;
    admin_service::set_platform_active(&pool, festa, false, now)
        .await
        .unwrap();

    let publication = admin_service::list_platforms(
        &pool,
        &PlatformListFilter {
            link_type: Some(LinkType::PublicationPlatform),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let names: Vec<&str> = publication.iter().map(|p| p.name_en.as_str()).collect();
    assert_eq!(names, vec!["Festa", "Meetup"]);

    let active_publication = admin_service::list_platforms(
        &pool,
        &PlatformListFilter {
            is_active: Some(true),
            link_type: Some(LinkType::PublicationPlatform),
            q: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(active_publication.len(), 1);
    assert_eq!(active_publication[0].name_en, "Meetup");

    let searched = admin_service::list_platforms(
        &pool,
        &PlatformListFilter { q: search("discord"), ..Default::default() },
    )
    .await
    .unwrap();
    assert_eq!(searched.len(), 1);
    assert_eq!(searched[0].link_type, LinkType::MainChannel);
}

#[tokio::test]
async fn opportunity_filter_by_type_open_and_visibility() {
    let pool = pool().await;
    let now = fixed_now();
    for input in [
        opportunity_input(OpportunityType::Sponsor, "후원", "Sponsor us", 0),
        ContributionOpportunityInput {
            is_open: false,
            ..opportunity_input(OpportunityType::Speaker, "발표", "Closed call for speakers", 0)
        },
        ContributionOpportunityInput {
            is_public: false,
            ..opportunity_input(OpportunityType::Speaker, "초안", "Draft speaker call", 1)
        },
    ] {
        admin_service::create_opportunity(&pool, &input, now).await.unwrap();
    }

    let speakers = admin_service::list_opportunities(
        &pool,
        &OpportunityListFilter {
            opportunity_type: Some(OpportunityType::Speaker),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(speakers.len(), 2);

    let closed = admin_service::list_opportunities(
        &pool,
        &OpportunityListFilter { is_open: Some(false), ..Default::default() },
    )
    .await
    .unwrap();
    assert_eq!(closed.len(), 1);
    assert_eq!(closed[0].title_en, "Closed call for speakers");

    let hidden = admin_service::list_opportunities(
        &pool,
        &OpportunityListFilter { is_public: Some(false), ..Default::default() },
    )
    .await
    .unwrap();
    assert_eq!(hidden.len(), 1);
    assert_eq!(hidden[0].title_en, "Draft speaker call");

    let searched = admin_service::list_opportunities(
        &pool,
        &OpportunityListFilter { q: search("sponsor"), ..Default::default() },
    )
    .await
    .unwrap();
    assert_eq!(searched.len(), 1);
}
