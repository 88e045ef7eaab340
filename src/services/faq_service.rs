use sqlx::SqlitePool;

use crate::config::{CommunityInfo, COMMUNITY_INFO};
use crate::database::faq_repo;
use crate::models::{Faq, FaqCategory};
use crate::services::platform_service::{self, SocialPlatformView};

pub struct FaqView {
    pub category: FaqCategory,
    pub category_label_ko: &'static str,
    pub category_label_en: &'static str,
    /// First entry of its category in listing order; the template opens a
    /// new section here.
    pub starts_category: bool,
    pub question_ko: String,
    pub question_en: String,
    pub answer_ko: String,
    pub answer_en: String,
}

pub struct FaqPageData {
    pub community_info: &'static CommunityInfo,
    pub social_platforms: Vec<SocialPlatformView>,
    pub discord_url: Option<String>,
    pub faqs: Vec<FaqView>,
}

pub async fn build_faq_page(pool: &SqlitePool) -> sqlx::Result<FaqPageData> {
    let faqs = faq_repo::list_public(pool).await?;
    Ok(FaqPageData {
        community_info: &COMMUNITY_INFO,
        social_platforms: platform_service::list_social_platforms(pool).await?,
        discord_url: platform_service::discord_url(pool).await?,
        faqs: faq_views(faqs),
    })
}

fn faq_views(faqs: Vec<Faq>) -> Vec<FaqView> {
    let mut previous: Option<FaqCategory> = None;
    faqs.into_iter()
        .map(|f| {
            let starts_category = previous != Some(f.category);
            previous = Some(f.category);
            FaqView {
                category: f.category,
                category_label_ko: f.category.label_ko(),
                category_label_en: f.category.label_en(),
                starts_category,
                question_ko: f.question_ko,
                question_en: f.question_en,
                answer_ko: f.answer_ko,
                answer_en: f.answer_en,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn faq(category: FaqCategory, order: i64) -> Faq {
        let now = Utc::now();
        Faq {
            id: order,
            category,
            question_ko: format!("질문 {}", order),
            question_en: format!("Question {}", order),
            answer_ko: String::new(),
            answer_en: String::new(),
            sort_order: order,
            is_public: true,
            created: now,
            modified: now,
        }
    }

    #[test]
    fn marks_first_entry_of_each_category() {
        let views = faq_views(vec![
            faq(FaqCategory::Contact, 1),
            faq(FaqCategory::General, 1),
            faq(FaqCategory::General, 2),
            faq(FaqCategory::Joining, 1),
        ]);
        let marks: Vec<bool> = views.iter().map(|v| v.starts_category).collect();
        assert_eq!(marks, vec![true, true, false, true]);
        assert_eq!(views[1].category_label_en, "General");
    }
}
