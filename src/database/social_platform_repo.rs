use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::database::search_pattern;
use crate::models::{LinkType, SocialMediaPlatform, SocialMediaPlatformInput};

const SQL_SELECT_PLATFORMS: &str = r#"
SELECT
  id,
  name_ko,
  name_en,
  url,
  link_type,
  icon,
  icon_class,
  sort_order,
  is_active,
  created,
  modified
FROM social_media_platforms
"#;

const SQL_LIST_ACTIVE: &str = r#"
SELECT
  id,
  name_ko,
  name_en,
  url,
  link_type,
  icon,
  icon_class,
  sort_order,
  is_active,
  created,
  modified
FROM social_media_platforms
WHERE is_active = 1
ORDER BY sort_order ASC, name_ko ASC
"#;

pub async fn list_active(pool: &SqlitePool) -> sqlx::Result<Vec<SocialMediaPlatform>> {
    sqlx::query_as::<_, SocialMediaPlatform>(SQL_LIST_ACTIVE)
        .fetch_all(pool)
        .await
}

// LIKE is case-insensitive for ASCII, which covers "discord".
const SQL_FIND_ACTIVE_URL_BY_NAME: &str = r#"
SELECT url
FROM social_media_platforms
WHERE is_active = 1
  AND name_en LIKE ?
ORDER BY sort_order ASC, name_ko ASC
LIMIT 1
"#;

/// URL of the first active platform (by display order) whose English name
/// contains `needle`, ignoring case.
pub async fn find_active_url_by_name(
    pool: &SqlitePool,
    needle: &str,
) -> sqlx::Result<Option<String>> {
    let pattern = format!("%{}%", needle.to_lowercase());
    sqlx::query_scalar::<_, String>(SQL_FIND_ACTIVE_URL_BY_NAME)
        .bind(pattern)
        .fetch_optional(pool)
        .await
}

pub async fn load_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<SocialMediaPlatform>> {
    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(SQL_SELECT_PLATFORMS);
    qb.push("WHERE id = ").push_bind(id);
    qb.build_query_as::<SocialMediaPlatform>()
        .fetch_optional(pool)
        .await
}

const SQL_INSERT_PLATFORM: &str = r#"
INSERT INTO social_media_platforms (
  name_ko,
  name_en,
  url,
  link_type,
  icon,
  icon_class,
  sort_order,
  is_active,
  created,
  modified
) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

pub async fn insert_platform(
    pool: &SqlitePool,
    input: &SocialMediaPlatformInput,
    now: DateTime<Utc>,
) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_PLATFORM)
        .bind(input.name_ko.as_str())
        .bind(input.name_en.as_str())
        .bind(input.url.as_str())
        .bind(input.link_type)
        .bind(input.icon.as_deref())
        .bind(input.icon_class.as_str())
        .bind(input.sort_order)
        .bind(input.is_active)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
    Ok(res.last_insert_rowid())
}

const SQL_UPDATE_PLATFORM: &str = r#"
UPDATE social_media_platforms
SET
  name_ko = ?,
  name_en = ?,
  url = ?,
  link_type = ?,
  icon = ?,
  icon_class = ?,
  sort_order = ?,
  is_active = ?,
  modified = ?
WHERE id = ?
"#;

pub async fn update_platform(
    pool: &SqlitePool,
    id: i64,
    input: &SocialMediaPlatformInput,
    now: DateTime<Utc>,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_UPDATE_PLATFORM)
        .bind(input.name_ko.as_str())
        .bind(input.name_en.as_str())
        .bind(input.url.as_str())
        .bind(input.link_type)
        .bind(input.icon.as_deref())
        .bind(input.icon_class.as_str())
        .bind(input.sort_order)
        .bind(input.is_active)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

const SQL_SET_ACTIVE: &str = r#"
UPDATE social_media_platforms
SET is_active = ?, modified = ?
WHERE id = ?
"#;

pub async fn set_active(
    pool: &SqlitePool,
    id: i64,
    is_active: bool,
    now: DateTime<Utc>,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_SET_ACTIVE)
        .bind(is_active)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlatformListFilter {
    pub is_active: Option<bool>,
    pub link_type: Option<LinkType>,
    pub q: Option<String>,
}

pub async fn list_filtered(
    pool: &SqlitePool,
    filter: &PlatformListFilter,
) -> sqlx::Result<Vec<SocialMediaPlatform>> {
    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(SQL_SELECT_PLATFORMS);
    qb.push("WHERE 1 = 1");

    if let Some(is_active) = filter.is_active {
        qb.push(" AND is_active = ").push_bind(is_active);
    }
    if let Some(link_type) = filter.link_type {
        qb.push(" AND link_type = ").push_bind(link_type);
    }
    if let Some(like) = search_pattern(filter.q.as_deref()) {
        qb.push(" AND (lower(name_ko) LIKE ")
            .push_bind(like.clone())
            .push(r" ESCAPE '\' OR lower(name_en) LIKE ")
            .push_bind(like)
            .push(r" ESCAPE '\')");
    }
    qb.push(" ORDER BY sort_order ASC, name_ko ASC");

    qb.build_query_as::<SocialMediaPlatform>()
        .fetch_all(pool)
        .await
}
