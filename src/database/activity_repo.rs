use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::database::search_pattern;
use crate::models::{ActivityInput, ActivityKind, ActivityRow, ActivityType};

macro_rules! select_activities {
    ($tail:literal) => {
        concat!(
            r#"
SELECT
  id,
  title_ko,
  title_en,
  description_ko,
  description_en,
  activity_type,
  start_datetime,
  end_datetime,
  location_name_ko,
  location_name_en,
  location_address,
  location_url,
  meeting_schedule_ko,
  meeting_schedule_en,
  is_recruiting,
  image,
  is_public,
  is_featured,
  created,
  modified
FROM activities
"#,
            $tail
        )
    };
}

const SQL_LIST_UPCOMING_PUBLIC: &str = select_activities!(
    r#"WHERE is_public = 1
  AND start_datetime IS NOT NULL
  AND start_datetime >= ?
ORDER BY start_datetime ASC, created DESC
LIMIT ?
"#
);

pub async fn list_upcoming_public(
    pool: &SqlitePool,
    now: DateTime<Utc>,
    limit: i64,
) -> sqlx::Result<Vec<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_LIST_UPCOMING_PUBLIC)
        .bind(now)
        .bind(limit)
        .fetch_all(pool)
        .await
}

const SQL_LIST_PAST_PUBLIC: &str = select_activities!(
    r#"WHERE is_public = 1
  AND start_datetime IS NOT NULL
  AND start_datetime < ?
ORDER BY start_datetime DESC, created DESC
LIMIT ?
"#
);

pub async fn list_past_public(
    pool: &SqlitePool,
    now: DateTime<Utc>,
    limit: i64,
) -> sqlx::Result<Vec<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_LIST_PAST_PUBLIC)
        .bind(now)
        .bind(limit)
        .fetch_all(pool)
        .await
}

// Activities without a start time (study groups) sort last.
const SQL_LIST_PUBLIC: &str = select_activities!(
    r#"WHERE is_public = 1
ORDER BY start_datetime DESC, created DESC
"#
);

pub async fn list_public(pool: &SqlitePool) -> sqlx::Result<Vec<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_LIST_PUBLIC)
        .fetch_all(pool)
        .await
}

const SQL_LOAD_PUBLIC_BY_ID: &str = select_activities!(
    r#"WHERE id = ?
  AND is_public = 1
LIMIT 1
"#
);

pub async fn load_public_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_LOAD_PUBLIC_BY_ID)
        .bind(id)
        .fetch_optional(pool)
        .await
}

const SQL_LOAD_BY_ID: &str = select_activities!(
    r#"WHERE id = ?
LIMIT 1
"#
);

pub async fn load_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_LOAD_BY_ID)
        .bind(id)
        .fetch_optional(pool)
        .await
}

const SQL_LIST_RELATED_PUBLIC: &str = select_activities!(
    r#"WHERE activity_type = ?
  AND is_public = 1
  AND id != ?
ORDER BY start_datetime DESC, created DESC
LIMIT ?
"#
);

pub async fn list_related_public(
    pool: &SqlitePool,
    activity_type: ActivityType,
    exclude_id: i64,
    limit: i64,
) -> sqlx::Result<Vec<ActivityRow>> {
    sqlx::query_as::<_, ActivityRow>(SQL_LIST_RELATED_PUBLIC)
        .bind(activity_type)
        .bind(exclude_id)
        .bind(limit)
        .fetch_all(pool)
        .await
}

/// Column values for the variant payload; the inactive field set is always
/// written empty.
struct KindColumns<'a> {
    start_datetime: Option<DateTime<Utc>>,
    end_datetime: Option<DateTime<Utc>>,
    location_name_ko: &'a str,
    location_name_en: &'a str,
    location_address: &'a str,
    location_url: &'a str,
    meeting_schedule_ko: Option<&'a str>,
    meeting_schedule_en: Option<&'a str>,
    is_recruiting: bool,
}

impl<'a> From<&'a ActivityKind> for KindColumns<'a> {
    fn from(kind: &'a ActivityKind) -> Self {
        match kind {
            ActivityKind::Event(event) => KindColumns {
                start_datetime: event.starts_at,
                end_datetime: event.ends_at,
                location_name_ko: &event.location.name_ko,
                location_name_en: &event.location.name_en,
                location_address: &event.location.address,
                location_url: &event.location.url,
                meeting_schedule_ko: None,
                meeting_schedule_en: None,
                is_recruiting: false,
            },
            ActivityKind::StudyGroup(group) => KindColumns {
                start_datetime: None,
                end_datetime: None,
                location_name_ko: "",
                location_name_en: "",
                location_address: "",
                location_url: "",
                meeting_schedule_ko: group.meeting_schedule_ko.as_deref(),
                meeting_schedule_en: group.meeting_schedule_en.as_deref(),
                is_recruiting: group.is_recruiting,
            },
        }
    }
}

const SQL_INSERT_ACTIVITY: &str = r#"
INSERT INTO activities (
  title_ko,
  title_en,
  description_ko,
  description_en,
  activity_type,
  start_datetime,
  end_datetime,
  location_name_ko,
  location_name_en,
  location_address,
  location_url,
  meeting_schedule_ko,
  meeting_schedule_en,
  is_recruiting,
  image,
  is_public,
  is_featured,
  created,
  modified
) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

pub async fn insert_activity(
    pool: &SqlitePool,
    input: &ActivityInput,
    now: DateTime<Utc>,
) -> sqlx::Result<i64> {
    let cols = KindColumns::from(&input.kind);
    let res = sqlx::query(SQL_INSERT_ACTIVITY)
        .bind(input.title_ko.as_str())
        .bind(input.title_en.as_str())
        .bind(input.description_ko.as_str())
        .bind(input.description_en.as_str())
        .bind(input.kind.activity_type())
        .bind(cols.start_datetime)
        .bind(cols.end_datetime)
        .bind(cols.location_name_ko)
        .bind(cols.location_name_en)
        .bind(cols.location_address)
        .bind(cols.location_url)
        .bind(cols.meeting_schedule_ko)
        .bind(cols.meeting_schedule_en)
        .bind(cols.is_recruiting)
        .bind(input.image.as_deref())
        .bind(input.is_public)
        .bind(input.is_featured)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
    Ok(res.last_insert_rowid())
}

const SQL_UPDATE_ACTIVITY: &str = r#"
UPDATE activities
SET
  title_ko = ?,
  title_en = ?,
  description_ko = ?,
  description_en = ?,
  activity_type = ?,
  start_datetime = ?,
  end_datetime = ?,
  location_name_ko = ?,
  location_name_en = ?,
  location_address = ?,
  location_url = ?,
  meeting_schedule_ko = ?,
  meeting_schedule_en = ?,
  is_recruiting = ?,
  image = ?,
  is_public = ?,
  is_featured = ?,
  modified = ?
WHERE id = ?
"#;

pub async fn update_activity(
    pool: &SqlitePool,
    id: i64,
    input: &ActivityInput,
    now: DateTime<Utc>,
) -> sqlx::Result<u64> {
    let cols = KindColumns::from(&input.kind);
    let res = sqlx::query(SQL_UPDATE_ACTIVITY)
        .bind(input.title_ko.as_str())
        .bind(input.title_en.as_str())
        .bind(input.description_ko.as_str())
        .bind(input.description_en.as_str())
        .bind(input.kind.activity_type())
        .bind(cols.start_datetime)
        .bind(cols.end_datetime)
        .bind(cols.location_name_ko)
        .bind(cols.location_name_en)
        .bind(cols.location_address)
        .bind(cols.location_url)
        .bind(cols.meeting_schedule_ko)
        .bind(cols.meeting_schedule_en)
        .bind(cols.is_recruiting)
        .bind(input.image.as_deref())
        .bind(input.is_public)
        .bind(input.is_featured)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

const SQL_SET_PUBLIC: &str = r#"
UPDATE activities
SET is_public = ?, modified = ?
WHERE id = ?
"#;

pub async fn set_public(
    pool: &SqlitePool,
    id: i64,
    is_public: bool,
    now: DateTime<Utc>,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_SET_PUBLIC)
        .bind(is_public)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityListFilter {
    pub activity_type: Option<ActivityType>,
    pub is_public: Option<bool>,
    pub is_featured: Option<bool>,
    pub is_recruiting: Option<bool>,
    pub q: Option<String>,
}

pub async fn list_filtered(
    pool: &SqlitePool,
    filter: &ActivityListFilter,
) -> sqlx::Result<Vec<ActivityRow>> {
    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(select_activities!("WHERE 1 = 1"));

    if let Some(activity_type) = filter.activity_type {
        qb.push(" AND activity_type = ").push_bind(activity_type);
    }
    if let Some(is_public) = filter.is_public {
        qb.push(" AND is_public = ").push_bind(is_public);
    }
    if let Some(is_featured) = filter.is_featured {
        qb.push(" AND is_featured = ").push_bind(is_featured);
    }
    if let Some(is_recruiting) = filter.is_recruiting {
        qb.push(" AND is_recruiting = ").push_bind(is_recruiting);
    }
    if let Some(like) = search_pattern(filter.q.as_deref()) {
        qb.push(" AND (");
        let mut sep = qb.separated(" OR ");
        for column in [
            "title_ko",
            "title_en",
            "description_ko",
            "description_en",
            "location_name_ko",
            "location_name_en",
        ] {
            sep.push(format!("lower({}) LIKE ", column))
                .push_bind_unseparated(like.clone())
                .push_unseparated(r" ESCAPE '\'");
        }
        qb.push(")");
    }
    qb.push(" ORDER BY start_datetime DESC, created DESC");

    qb.build_query_as::<ActivityRow>().fetch_all(pool).await
}
