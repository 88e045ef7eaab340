use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::config::{CommunityInfo, COMMUNITY_INFO};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Field-level problems found while saving content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize)]
#[error("invalid input: {}", summarize(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {
    community_info: &'static CommunityInfo,
    discord_url: Option<String>,
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    community_info: &'static CommunityInfo,
    discord_url: Option<String>,
    message: String,
}

pub fn not_found_page() -> Response {
    let template = NotFoundTemplate {
        community_info: &COMMUNITY_INFO,
        discord_url: None,
    };
    match template.render() {
        Ok(body) => (StatusCode::NOT_FOUND, Html(body)).into_response(),
        Err(e) => {
            error!("Not-found page render failed: {}", e);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

fn error_page(status: StatusCode, message: &str) -> Response {
    let template = ErrorTemplate {
        community_info: &COMMUNITY_INFO,
        discord_url: None,
        message: message.to_string(),
    };
    match template.render() {
        Ok(body) => (status, Html(body)).into_response(),
        Err(e) => {
            error!("Error page render failed: {}", e);
            status.into_response()
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => not_found_page(),
            AppError::Validation(errors) => {
                warn!("Rejected content update: {}", errors);
                error_page(StatusCode::UNPROCESSABLE_ENTITY, &errors.to_string())
            }
            AppError::Database(e) => {
                error!("Database error while serving page: {}", e);
                error_page(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong.")
            }
            AppError::Template(e) => {
                error!("Template error while serving page: {}", e);
                error_page(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong.")
            }
        }
    }
}
