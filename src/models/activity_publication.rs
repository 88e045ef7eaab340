use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ActivityPublication {
    pub id: i64,
    pub activity_id: i64,
    pub platform_id: i64,
    pub publication_url: String,
    pub published_at: Option<DateTime<Utc>>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

// Publication joined with the platform it went out on.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PublicationListingRow {
    pub id: i64,
    pub activity_id: i64,
    pub publication_url: String,
    pub published_at: Option<DateTime<Utc>>,
    pub platform_id: i64,
    pub platform_name_ko: String,
    pub platform_name_en: String,
    pub platform_icon_class: String,
    pub platform_sort_order: i64,
}

#[derive(Debug, Clone)]
pub struct ActivityPublicationInput {
    pub activity_id: i64,
    pub platform_id: i64,
    pub publication_url: String,
    pub published_at: Option<DateTime<Utc>>,
}
