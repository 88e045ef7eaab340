use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Seminar,
    Workshop,
    Meetup,
    Networking,
    StudyGroup,
}

impl ActivityType {
    pub const ALL: [ActivityType; 5] = [
        ActivityType::Seminar,
        ActivityType::Workshop,
        ActivityType::Meetup,
        ActivityType::Networking,
        ActivityType::StudyGroup,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityType::Seminar => "seminar",
            ActivityType::Workshop => "workshop",
            ActivityType::Meetup => "meetup",
            ActivityType::Networking => "networking",
            ActivityType::StudyGroup => "study_group",
        }
    }

    pub fn label_ko(self) -> &'static str {
        match self {
            ActivityType::Seminar => "세미나",
            ActivityType::Workshop => "워크숍",
            ActivityType::Meetup => "밋업",
            ActivityType::Networking => "네트워킹",
            ActivityType::StudyGroup => "스터디그룹",
        }
    }

    pub fn label_en(self) -> &'static str {
        match self {
            ActivityType::Seminar => "Seminar",
            ActivityType::Workshop => "Workshop",
            ActivityType::Meetup => "Meetup",
            ActivityType::Networking => "Networking",
            ActivityType::StudyGroup => "Study group",
        }
    }

    /// One-time activity with a date and a venue.
    pub fn is_event(self) -> bool {
        EventFormat::from_activity_type(self).is_some()
    }

    /// Recurring activity with a meeting schedule.
    pub fn is_study_group(self) -> bool {
        self == ActivityType::StudyGroup
    }
}

/// The activity types that describe a one-time event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFormat {
    Seminar,
    Workshop,
    Meetup,
    Networking,
}

impl EventFormat {
    pub fn from_activity_type(activity_type: ActivityType) -> Option<Self> {
        match activity_type {
            ActivityType::Seminar => Some(EventFormat::Seminar),
            ActivityType::Workshop => Some(EventFormat::Workshop),
            ActivityType::Meetup => Some(EventFormat::Meetup),
            ActivityType::Networking => Some(EventFormat::Networking),
            ActivityType::StudyGroup => None,
        }
    }
}

impl From<EventFormat> for ActivityType {
    fn from(format: EventFormat) -> Self {
        match format {
            EventFormat::Seminar => ActivityType::Seminar,
            EventFormat::Workshop => ActivityType::Workshop,
            EventFormat::Meetup => ActivityType::Meetup,
            EventFormat::Networking => ActivityType::Networking,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLocation {
    pub name_ko: String,
    pub name_en: String,
    pub address: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventDetails {
    pub format: EventFormat,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub location: EventLocation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudyGroupDetails {
    pub meeting_schedule_ko: Option<String>,
    pub meeting_schedule_en: Option<String>,
    pub is_recruiting: bool,
}

/// Variant payload of an activity. Exactly one field set exists per activity;
/// the schema CHECK on `activities` rejects rows that populate both.
#[derive(Debug, Clone, PartialEq)]
pub enum ActivityKind {
    Event(EventDetails),
    StudyGroup(StudyGroupDetails),
}

impl ActivityKind {
    pub fn activity_type(&self) -> ActivityType {
        match self {
            ActivityKind::Event(event) => event.format.into(),
            ActivityKind::StudyGroup(_) => ActivityType::StudyGroup,
        }
    }

    pub fn starts_at(&self) -> Option<DateTime<Utc>> {
        match self {
            ActivityKind::Event(event) => event.starts_at,
            ActivityKind::StudyGroup(_) => None,
        }
    }
}

// Flat row as stored in `activities`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivityRow {
    pub id: i64,
    pub title_ko: String,
    pub title_en: String,
    pub description_ko: String,
    pub description_en: String,
    pub activity_type: ActivityType,
    pub start_datetime: Option<DateTime<Utc>>,
    pub end_datetime: Option<DateTime<Utc>>,
    pub location_name_ko: String,
    pub location_name_en: String,
    pub location_address: String,
    pub location_url: String,
    pub meeting_schedule_ko: Option<String>,
    pub meeting_schedule_en: Option<String>,
    pub is_recruiting: bool,
    pub image: Option<String>,
    pub is_public: bool,
    pub is_featured: bool,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: i64,
    pub title_ko: String,
    pub title_en: String,
    pub description_ko: String,
    pub description_en: String,
    pub kind: ActivityKind,
    pub image: Option<String>,
    pub is_public: bool,
    pub is_featured: bool,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Activity {
    pub fn activity_type(&self) -> ActivityType {
        self.kind.activity_type()
    }

    pub fn is_event(&self) -> bool {
        matches!(self.kind, ActivityKind::Event(_))
    }

    pub fn is_study_group(&self) -> bool {
        matches!(self.kind, ActivityKind::StudyGroup(_))
    }

    /// Start time; same as `start_datetime` on the row. Study groups have none.
    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.kind.starts_at()
    }

    pub fn location_ko(&self) -> &str {
        match &self.kind {
            ActivityKind::Event(event) => &event.location.name_ko,
            ActivityKind::StudyGroup(_) => "",
        }
    }

    pub fn location_en(&self) -> &str {
        match &self.kind {
            ActivityKind::Event(event) => &event.location.name_en,
            ActivityKind::StudyGroup(_) => "",
        }
    }
}

impl From<ActivityRow> for Activity {
    fn from(row: ActivityRow) -> Self {
        let kind = match EventFormat::from_activity_type(row.activity_type) {
            Some(format) => ActivityKind::Event(EventDetails {
                format,
                starts_at: row.start_datetime,
                ends_at: row.end_datetime,
                location: EventLocation {
                    name_ko: row.location_name_ko,
                    name_en: row.location_name_en,
                    address: row.location_address,
                    url: row.location_url,
                },
            }),
            None => ActivityKind::StudyGroup(StudyGroupDetails {
                meeting_schedule_ko: row.meeting_schedule_ko,
                meeting_schedule_en: row.meeting_schedule_en,
                is_recruiting: row.is_recruiting,
            }),
        };

        Activity {
            id: row.id,
            title_ko: row.title_ko,
            title_en: row.title_en,
            description_ko: row.description_ko,
            description_en: row.description_en,
            kind,
            image: row.image,
            is_public: row.is_public,
            is_featured: row.is_featured,
            created: row.created,
            modified: row.modified,
        }
    }
}

/// Create/update payload for an activity.
#[derive(Debug, Clone)]
pub struct ActivityInput {
    pub title_ko: String,
    pub title_en: String,
    pub description_ko: String,
    pub description_en: String,
    pub kind: ActivityKind,
    pub image: Option<String>,
    pub is_public: bool,
    pub is_featured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_and_study_group_partition_every_type() {
        for t in ActivityType::ALL {
            assert_ne!(t.is_event(), t.is_study_group(), "{:?}", t);
        }
        assert_eq!(
            ActivityType::ALL.iter().filter(|t| t.is_study_group()).count(),
            1
        );
    }

    #[test]
    fn kind_reports_matching_type() {
        let event = ActivityKind::Event(EventDetails {
            format: EventFormat::Workshop,
            starts_at: None,
            ends_at: None,
            location: EventLocation::default(),
        });
        assert_eq!(event.activity_type(), ActivityType::Workshop);

        let group = ActivityKind::StudyGroup(StudyGroupDetails::default());
        assert_eq!(group.activity_type(), ActivityType::StudyGroup);
        assert!(group.activity_type().is_study_group());
    }

    #[test]
    fn row_for_study_group_ignores_event_columns() {
        let now = Utc::now();
        let row = ActivityRow {
            id: 1,
            title_ko: "스터디".to_string(),
            title_en: "Study".to_string(),
            description_ko: String::new(),
            description_en: String::new(),
            activity_type: ActivityType::StudyGroup,
            start_datetime: None,
            end_datetime: None,
            location_name_ko: String::new(),
            location_name_en: String::new(),
            location_address: String::new(),
            location_url: String::new(),
            meeting_schedule_ko: Some("매주 화요일".to_string()),
            meeting_schedule_en: Some("Every Tuesday".to_string()),
            is_recruiting: true,
            image: None,
            is_public: true,
            is_featured: false,
            created: now,
            modified: now,
        };

        let activity = Activity::from(row);
        assert!(activity.is_study_group());
        assert!(!activity.is_event());
        assert_eq!(activity.date(), None);
        assert_eq!(activity.location_ko(), "");
        match activity.kind {
            ActivityKind::StudyGroup(group) => {
                assert!(group.is_recruiting);
                assert_eq!(group.meeting_schedule_en.as_deref(), Some("Every Tuesday"));
            }
            other => panic!("unexpected kind {:?}", other),
        }
    }
}
