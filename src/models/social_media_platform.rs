use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum LinkType {
    /// Shown in the site header/footer as a community channel.
    MainChannel,
    /// Only used as a target for activity announcements.
    PublicationPlatform,
}

impl LinkType {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkType::MainChannel => "main_channel",
            LinkType::PublicationPlatform => "publication_platform",
        }
    }
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct SocialMediaPlatform {
    pub id: i64,
    pub name_ko: String,
    pub name_en: String,
    pub url: String,
    pub link_type: LinkType,
    pub icon: Option<String>,
    pub icon_class: String,
    pub sort_order: i64,
    pub is_active: bool,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct SocialMediaPlatformInput {
    pub name_ko: String,
    pub name_en: String,
    pub url: String,
    pub link_type: LinkType,
    pub icon: Option<String>,
    pub icon_class: String,
    pub sort_order: i64,
    pub is_active: bool,
}
