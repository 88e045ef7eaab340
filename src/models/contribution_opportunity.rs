use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OpportunityType {
    Maker,
    Speaker,
    StudyLeader,
    Sponsor,
    Volunteer,
    Donor,
    Other,
}

impl OpportunityType {
    pub fn as_str(self) -> &'static str {
        match self {
            OpportunityType::Maker => "maker",
            OpportunityType::Speaker => "speaker",
            OpportunityType::StudyLeader => "study_leader",
            OpportunityType::Sponsor => "sponsor",
            OpportunityType::Volunteer => "volunteer",
            OpportunityType::Donor => "donor",
            OpportunityType::Other => "other",
        }
    }

    pub fn label_ko(self) -> &'static str {
        match self {
            OpportunityType::Maker => "메이커",
            OpportunityType::Speaker => "스피커",
            OpportunityType::StudyLeader => "스터디 리더",
            OpportunityType::Sponsor => "스폰서",
            OpportunityType::Volunteer => "봉사자",
            OpportunityType::Donor => "기부",
            OpportunityType::Other => "기타",
        }
    }

    pub fn label_en(self) -> &'static str {
        match self {
            OpportunityType::Maker => "Maker",
            OpportunityType::Speaker => "Speaker",
            OpportunityType::StudyLeader => "Study leader",
            OpportunityType::Sponsor => "Sponsor",
            OpportunityType::Volunteer => "Volunteer",
            OpportunityType::Donor => "Donor",
            OpportunityType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ContributionOpportunity {
    pub id: i64,
    pub opportunity_type: OpportunityType,
    pub title_ko: String,
    pub title_en: String,
    pub description_ko: String,
    pub description_en: String,
    pub requirements_ko: String,
    pub requirements_en: String,
    pub contact_method_ko: String,
    pub contact_method_en: String,
    pub sort_order: i64,
    pub is_open: bool,
    pub is_public: bool,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ContributionOpportunityInput {
    pub opportunity_type: OpportunityType,
    pub title_ko: String,
    pub title_en: String,
    pub description_ko: String,
    pub description_en: String,
    pub requirements_ko: String,
    pub requirements_en: String,
    pub contact_method_ko: String,
    pub contact_method_en: String,
    pub sort_order: i64,
    pub is_open: bool,
    pub is_public: bool,
}
