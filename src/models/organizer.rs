use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Organizer {
    pub id: i64,
    pub name_ko: String,
    pub name_en: String,
    pub role_ko: String,
    pub role_en: String,
    pub bio_ko: String,
    pub bio_en: String,
    pub photo: Option<String>,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub sort_order: i64,
    pub is_public: bool,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct OrganizerInput {
    pub name_ko: String,
    pub name_en: String,
    pub role_ko: String,
    pub role_en: String,
    pub bio_ko: String,
    pub bio_en: String,
    pub photo: Option<String>,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub sort_order: i64,
    pub is_public: bool,
}
