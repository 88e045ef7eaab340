use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Stored as text; listings sort on the stored value, so categories appear
// alphabetically (contact, general, joining, participation, technical).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FaqCategory {
    General,
    Joining,
    Participation,
    Technical,
    Contact,
}

impl FaqCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            FaqCategory::General => "general",
            FaqCategory::Joining => "joining",
            FaqCategory::Participation => "participation",
            FaqCategory::Technical => "technical",
            FaqCategory::Contact => "contact",
        }
    }

    pub fn label_ko(self) -> &'static str {
        match self {
            FaqCategory::General => "일반",
            FaqCategory::Joining => "참여",
            FaqCategory::Participation => "활동",
            FaqCategory::Technical => "기술",
            FaqCategory::Contact => "연락처",
        }
    }

    pub fn label_en(self) -> &'static str {
        match self {
            FaqCategory::General => "General",
            FaqCategory::Joining => "Joining",
            FaqCategory::Participation => "Participation",
            FaqCategory::Technical => "Technical",
            FaqCategory::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Faq {
    pub id: i64,
    pub category: FaqCategory,
    pub question_ko: String,
    pub question_en: String,
    pub answer_ko: String,
    pub answer_en: String,
    pub sort_order: i64,
    pub is_public: bool,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct FaqInput {
    pub category: FaqCategory,
    pub question_ko: String,
    pub question_en: String,
    pub answer_ko: String,
    pub answer_en: String,
    pub sort_order: i64,
    pub is_public: bool,
}
