use axum::{
    response::{IntoResponse, Redirect},
    routing::{get, get_service},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use sqlx::SqlitePool;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::not_found_page;

pub mod routes;

use routes::{coc, contribute, events, faq, health, home};

/// Builds the full site router. The pool is the only shared state.
pub fn app(pool: SqlitePool, config: &Config) -> Router {
    let pages = Router::new()
        .route("/", get(home::home_handler))
        .route("/events/", get(events::events_handler))
        .route("/events/:event_id/", get(events::event_detail_handler))
        .route("/contribute/", get(contribute::contribute_handler))
        .route("/faq/", get(faq::faq_handler))
        .route("/coc/", get(coc::coc_handler))
        .route("/health/", get(health::health_handler))
        // Slash-less forms redirect to the canonical paths.
        .route("/events", get(|| async { Redirect::permanent("/events/") }))
        .route("/events/:event_id", get(events::event_detail_redirect))
        .route("/contribute", get(|| async { Redirect::permanent("/contribute/") }))
        .route("/faq", get(|| async { Redirect::permanent("/faq/") }))
        .route("/coc", get(|| async { Redirect::permanent("/coc/") }))
        .route("/health", get(|| async { Redirect::permanent("/health/") }));

    Router::new()
        .merge(pages)
        .nest_service(
            "/static",
            get_service(ServeDir::new(&config.static_dir)),
        )
        .nest_service("/media", get_service(ServeDir::new(&config.media_dir)))
        .fallback(|| async { not_found_page().into_response() })
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}
