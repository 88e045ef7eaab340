use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::database::search_pattern;
use crate::models::{Faq, FaqCategory, FaqInput};

const SQL_SELECT_FAQS: &str = r#"
SELECT
  id,
  category,
  question_ko,
  question_en,
  answer_ko,
  answer_en,
  sort_order,
  is_public,
  created,
  modified
FROM faqs
"#;

const SQL_LIST_PUBLIC: &str = r#"
SELECT
  id,
  category,
  question_ko,
  question_en,
  answer_ko,
  answer_en,
  sort_order,
  is_public,
  created,
  modified
FROM faqs
WHERE is_public = 1
ORDER BY category ASC, sort_order ASC
"#;

pub async fn list_public(pool: &SqlitePool) -> sqlx::Result<Vec<Faq>> {
    sqlx::query_as::<_, Faq>(SQL_LIST_PUBLIC)
        .fetch_all(pool)
        .await
}

pub async fn load_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Faq>> {
    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(SQL_SELECT_FAQS);
    qb.push("WHERE id = ").push_bind(id);
    qb.build_query_as::<Faq>().fetch_optional(pool).await
}

const SQL_INSERT_FAQ: &str = r#"
INSERT INTO faqs (
  category,
  question_ko,
  question_en,
  answer_ko,
  answer_en,
  sort_order,
  is_public,
  created,
  modified
) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

pub async fn insert_faq(
    pool: &SqlitePool,
    input: &FaqInput,
    now: DateTime<Utc>,
) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_FAQ)
        .bind(input.category)
        .bind(input.question_ko.as_str())
        .bind(input.question_en.as_str())
        .bind(input.answer_ko.as_str())
        .bind(input.answer_en.as_str())
        .bind(input.sort_order)
        .bind(input.is_public)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
    Ok(res.last_insert_rowid())
}

const SQL_UPDATE_FAQ: &str = r#"
UPDATE faqs
SET
  category = ?,
  question_ko = ?,
  question_en = ?,
  answer_ko = ?,
  answer_en = ?,
  sort_order = ?,
  is_public = ?,
  modified = ?
WHERE id = ?
"#;

pub async fn update_faq(
    pool: &SqlitePool,
    id: i64,
    input: &FaqInput,
    now: DateTime<Utc>,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_UPDATE_FAQ)
        .bind(input.category)
        .bind(input.question_ko.as_str())
        .bind(input.question_en.as_str())
        .bind(input.answer_ko.as_str())
        .bind(input.answer_en.as_str())
        .bind(input.sort_order)
        .bind(input.is_public)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

const SQL_SET_PUBLIC: &str = r#"
UPDATE faqs
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
pub struct FaqListFilter {
    pub category: Option<FaqCategory>,
    pub is_public: Option<bool>,
    pub q: Option<String>,
}

pub async fn list_filtered(pool: &SqlitePool, filter: &FaqListFilter) -> sqlx::Result<Vec<Faq>> {
    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(SQL_SELECT_FAQS);
    qb.push("WHERE 1 = 1");

    if let Some(category) = filter.category {
        qb.push(" AND category = ").push_bind(category);
    }
    if let Some(is_public) = filter.is_public {
        qb.push(" AND is_public = ").push_bind(is_public);
    }
    if let Some(like) = search_pattern(filter.q.as_deref()) {
        qb.push(" AND (");
        let mut sep = qb.separated(" OR ");
        for column in ["question_ko", "question_en", "answer_ko", "answer_en"] {
            sep.push(format!("lower({}) LIKE ", column))
                .push_bind_unseparated(like.clone())
                .push_unseparated(r" ESCAPE '\'");
        }
        qb.push(")");
    }
    qb.push(" ORDER BY category ASC, sort_order ASC");

    qb.build_query_as::<Faq>().fetch_all(pool).await
}
