use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::models::{ActivityPublication, ActivityPublicationInput, PublicationListingRow};

const SQL_LIST_FOR_ACTIVITY: &str = r#"
SELECT
  ap.id,
  ap.activity_id,
  ap.publication_url,
  ap.published_at,
  p.id AS platform_id,
  p.name_ko AS platform_name_ko,
  p.name_en AS platform_name_en,
  p.icon_class AS platform_icon_class,
  p.sort_order AS platform_sort_order
FROM activity_publications ap
JOIN social_media_platforms p
  ON p.id = ap.platform_id
WHERE ap.activity_id = ?
ORDER BY ap.published_at DESC, p.sort_order ASC
"#;

pub async fn list_for_activity(
    pool: &SqlitePool,
    activity_id: i64,
) -> sqlx::Result<Vec<PublicationListingRow>> {
    sqlx::query_as::<_, PublicationListingRow>(SQL_LIST_FOR_ACTIVITY)
        .bind(activity_id)
        .fetch_all(pool)
        .await
}

const SQL_LOAD_BY_PAIR: &str = r#"
SELECT
  id,
  activity_id,
  platform_id,
  publication_url,
  published_at,
  created,
  modified
FROM activity_publications
WHERE activity_id = ?
  AND platform_id = ?
LIMIT 1
"#;

pub async fn load_by_pair(
    pool: &SqlitePool,
    activity_id: i64,
    platform_id: i64,
) -> sqlx::Result<Option<ActivityPublication>> {
    sqlx::query_as::<_, ActivityPublication>(SQL_LOAD_BY_PAIR)
        .bind(activity_id)
        .bind(platform_id)
        .fetch_optional(pool)
        .await
}

const SQL_COUNT_FOR_PLATFORM: &str = r#"
SELECT COUNT(*)
FROM activity_publications
WHERE platform_id = ?
"#;

pub async fn count_for_platform(pool: &SqlitePool, platform_id: i64) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>(SQL_COUNT_FOR_PLATFORM)
        .bind(platform_id)
        .fetch_one(pool)
        .await
}

const SQL_INSERT_PUBLICATION: &str = r#"
INSERT INTO activity_publications (
  activity_id,
  platform_id,
  publication_url,
  published_at,
  created,
  modified
) VALUES (?, ?, ?, ?, ?, ?)
"#;

pub async fn insert_publication(
    pool: &SqlitePool,
    input: &ActivityPublicationInput,
    now: DateTime<Utc>,
) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_PUBLICATION)
        .bind(input.activity_id)
        .bind(input.platform_id)
        .bind(input.publication_url.as_str())
        .bind(input.published_at)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
    Ok(res.last_insert_rowid())
}

const SQL_DELETE_PUBLICATION: &str = r#"
DELETE FROM activity_publications
WHERE id = ?
"#;

pub async fn delete_publication(pool: &SqlitePool, id: i64) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_PUBLICATION)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}
