use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::database::search_pattern;
use crate::models::{Organizer, OrganizerInput};

const SQL_SELECT_ORGANIZERS: &str = r#"
SELECT
  id,
  name_ko,
  name_en,
  role_ko,
  role_en,
  bio_ko,
  bio_en,
  photo,
  email,
  github,
  linkedin,
  sort_order,
  is_public,
  created,
  modified
FROM organizers
"#;

const SQL_LIST_PUBLIC: &str = r#"
SELECT
  id,
  name_ko,
  name_en,
  role_ko,
  role_en,
  bio_ko,
  bio_en,
  photo,
  email,
  github,
  linkedin,
  sort_order,
  is_public,
  created,
  modified
FROM organizers
WHERE is_public = 1
ORDER BY sort_order ASC, name_ko ASC
LIMIT ?
"#;

pub async fn list_public(pool: &SqlitePool, limit: i64) -> sqlx::Result<Vec<Organizer>> {
    sqlx::query_as::<_, Organizer>(SQL_LIST_PUBLIC)
        .bind(limit)
        .fetch_all(pool)
        .await
}

pub async fn load_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Organizer>> {
    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(SQL_SELECT_ORGANIZERS);
    qb.push("WHERE id = ").push_bind(id);
    qb.build_query_as::<Organizer>().fetch_optional(pool).await
}

const SQL_INSERT_ORGANIZER: &str = r#"
INSERT INTO organizers (
  name_ko,
  name_en,
  role_ko,
  role_en,
  bio_ko,
  bio_en,
  photo,
  email,
  github,
  linkedin,
  sort_order,
  is_public,
  created,
  modified
) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

pub async fn insert_organizer(
    pool: &SqlitePool,
    input: &OrganizerInput,
    now: DateTime<Utc>,
) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_ORGANIZER)
        .bind(input.name_ko.as_str())
        .bind(input.name_en.as_str())
        .bind(input.role_ko.as_str())
        .bind(input.role_en.as_str())
        .bind(input.bio_ko.as_str())
        .bind(input.bio_en.as_str())
        .bind(input.photo.as_deref())
        .bind(input.email.as_str())
        .bind(input.github.as_str())
        .bind(input.linkedin.as_str())
        .bind(input.sort_order)
        .bind(input.is_public)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
    Ok(res.last_insert_rowid())
}

const SQL_UPDATE_ORGANIZER: &str = r#"
UPDATE organizers
SET
  name_ko = ?,
  name_en = ?,
  role_ko = ?,
  role_en = ?,
  bio_ko = ?,
  bio_en = ?,
  photo = ?,
  email = ?,
  github = ?,
  linkedin = ?,
  sort_order = ?,
  is_public = ?,
  modified = ?
WHERE id = ?
"#;

pub async fn update_organizer(
    pool: &SqlitePool,
    id: i64,
    input: &OrganizerInput,
    now: DateTime<Utc>,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_UPDATE_ORGANIZER)
        .bind(input.name_ko.as_str())
        .bind(input.name_en.as_str())
        .bind(input.role_ko.as_str())
        .bind(input.role_en.as_str())
        .bind(input.bio_ko.as_str())
        .bind(input.bio_en.as_str())
        .bind(input.photo.as_deref())
        .bind(input.email.as_str())
        .bind(input.github.as_str())
        .bind(input.linkedin.as_str())
        .bind(input.sort_order)
        .bind(input.is_public)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

const SQL_SET_PUBLIC: &str = r#"
UPDATE organizers
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
pub struct OrganizerListFilter {
    pub is_public: Option<bool>,
    pub q: Option<String>,
}

pub async fn list_filtered(
    pool: &SqlitePool,
    filter: &OrganizerListFilter,
) -> sqlx::Result<Vec<Organizer>> {
    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(SQL_SELECT_ORGANIZERS);
    qb.push("WHERE 1 = 1");

    if let Some(is_public) = filter.is_public {
        qb.push(" AND is_public = ").push_bind(is_public);
    }
    if let Some(like) = search_pattern(filter.q.as_deref()) {
        qb.push(" AND (");
        let mut sep = qb.separated(" OR ");
        for column in ["name_ko", "name_en", "role_ko", "role_en"] {
            sep.push(format!("lower({}) LIKE ", column))
                .push_bind_unseparated(like.clone())
                .push_unseparated(r" ESCAPE '\'");
        }
        qb.push(")");
    }
    qb.push(" ORDER BY sort_order ASC, name_ko ASC");

    qb.build_query_as::<Organizer>().fetch_all(pool).await
}
