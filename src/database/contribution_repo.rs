use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::database::search_pattern;
use crate::models::{ContributionOpportunity, ContributionOpportunityInput, OpportunityType};

const SQL_SELECT_OPPORTUNITIES: &str = r#"
SELECT
  id,
  opportunity_type,
  title_ko,
  title_en,
  description_ko,
  description_en,
  requirements_ko,
  requirements_en,
  contact_method_ko,
  contact_method_en,
  sort_order,
  is_open,
  is_public,
  created,
  modified
FROM contribution_opportunities
"#;

const SQL_LIST_PUBLIC: &str = r#"
SELECT
  id,
  opportunity_type,
  title_ko,
  title_en,
  description_ko,
  description_en,
  requirements_ko,
  requirements_en,
  contact_method_ko,
  contact_method_en,
  sort_order,
  is_open,
  is_public,
  created,
  modified
FROM contribution_opportunities
WHERE is_public = 1
ORDER BY sort_order ASC, opportunity_type ASC, title_ko ASC
"#;

pub async fn list_public(pool: &SqlitePool) -> sqlx::Result<Vec<ContributionOpportunity>> {
    sqlx::query_as::<_, ContributionOpportunity>(SQL_LIST_PUBLIC)
        .fetch_all(pool)
        .await
}

pub async fn load_by_id(
    pool: &SqlitePool,
    id: i64,
) -> sqlx::Result<Option<ContributionOpportunity>> {
    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(SQL_SELECT_OPPORTUNITIES);
    qb.push("WHERE id = ").push_bind(id);
    qb.build_query_as::<ContributionOpportunity>()
        .fetch_optional(pool)
        .await
}

const SQL_INSERT_OPPORTUNITY: &str = r#"
INSERT INTO contribution_opportunities (
  opportunity_type,
  title_ko,
  title_en,
  description_ko,
  description_en,
  requirements_ko,
  requirements_en,
  contact_method_ko,
  contact_method_en,
  sort_order,
  is_open,
  is_public,
  created,
  modified
) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

pub async fn insert_opportunity(
    pool: &SqlitePool,
    input: &ContributionOpportunityInput,
    now: DateTime<Utc>,
) -> sqlx::Result<i64> {
    let res = sqlx::query(SQL_INSERT_OPPORTUNITY)
        .bind(input.opportunity_type)
        .bind(input.title_ko.as_str())
        .bind(input.title_en.as_str())
        .bind(input.description_ko.as_str())
        .bind(input.description_en.as_str())
        .bind(input.requirements_ko.as_str())
        .bind(input.requirements_en.as_str())
        .bind(input.contact_method_ko.as_str())
        .bind(input.contact_method_en.as_str())
        .bind(input.sort_order)
        .bind(input.is_open)
        .bind(input.is_public)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;
    Ok(res.last_insert_rowid())
}

const SQL_UPDATE_OPPORTUNITY: &str = r#"
UPDATE contribution_opportunities
SET
  opportunity_type = ?,
  title_ko = ?,
  title_en = ?,
  description_ko = ?,
  description_en = ?,
  requirements_ko = ?,
  requirements_en = ?,
  contact_method_ko = ?,
  contact_method_en = ?,
  sort_order = ?,
  is_open = ?,
  is_public = ?,
  modified = ?
WHERE id = ?
"#;

pub async fn update_opportunity(
    pool: &SqlitePool,
    id: i64,
    input: &ContributionOpportunityInput,
    now: DateTime<Utc>,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_UPDATE_OPPORTUNITY)
        .bind(input.opportunity_type)
        .bind(input.title_ko.as_str())
        .bind(input.title_en.as_str())
        .bind(input.description_ko.as_str())
        .bind(input.description_en.as_str())
        .bind(input.requirements_ko.as_str())
        .bind(input.requirements_en.as_str())
        .bind(input.contact_method_ko.as_str())
        .bind(input.contact_method_en.as_str())
        .bind(input.sort_order)
        .bind(input.is_open)
        .bind(input.is_public)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

const SQL_SET_PUBLIC: &str = r#"
UPDATE contribution_opportunities
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
pub struct OpportunityListFilter {
    pub opportunity_type: Option<OpportunityType>,
    pub is_open: Option<bool>,
    pub is_public: Option<bool>,
    pub q: Option<String>,
}

pub async fn list_filtered(
    pool: &SqlitePool,
    filter: &OpportunityListFilter,
) -> sqlx::Result<Vec<ContributionOpportunity>> {
    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(SQL_SELECT_OPPORTUNITIES);
    qb.push("WHERE 1 = 1");

    if let Some(opportunity_type) = filter.opportunity_type {
        qb.push(" AND opportunity_type = ")
            .push_bind(opportunity_type);
    }
    if let Some(is_open) = filter.is_open {
        qb.push(" AND is_open = ").push_bind(is_open);
    }
    if let Some(is_public) = filter.is_public {
        qb.push(" AND is_public = ").push_bind(is_public);
    }
    if let Some(like) = search_pattern(filter.q.as_deref()) {
        qb.push(" AND (");
        let mut sep = qb.separated(" OR ");
        for column in ["title_ko", "title_en", "description_ko", "description_en"] {
            sep.push(format!("lower({}) LIKE ", column))
                .push_bind_unseparated(like.clone())
                .push_unseparated(r" ESCAPE '\'");
        }
        qb.push(")");
    }
    qb.push(" ORDER BY sort_order ASC, opportunity_type ASC, title_ko ASC");

    qb.build_query_as::<ContributionOpportunity>()
        .fetch_all(pool)
        .await
}
