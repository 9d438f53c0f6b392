//! HTTP front end.
//!
//! - `GET /` liveness check
//! - `GET /search?keyword=...` aggregated search, keyed by source id

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::{Search, SearchError, SearchQuery};

const KEYWORD_REQUIRED: &str = "Keyword is required";
const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<Search>,
}

/// Creates the router with all routes.
pub fn router(search: Arc<Search>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/search", get(search_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState { search })
}

/// Serves the API on `addr` until the process is stopped.
pub async fn serve(search: Arc<Search>, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Starting server at http://{}", listener.local_addr()?);
    axum::serve(listener, router(search)).await?;
    Ok(())
}

async fn home() -> &'static str {
    "Hello World!"
}

async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let keyword = match first_keyword(params) {
        Some(keyword) if !keyword.trim().is_empty() => keyword,
        _ => return error_response(StatusCode::BAD_REQUEST, KEYWORD_REQUIRED),
    };

    match state.search.aggregate_search(SearchQuery::new(keyword)).await {
        Ok(response) => json_response(StatusCode::OK, &response),
        Err(SearchError::InvalidQuery(_)) => {
            error_response(StatusCode::BAD_REQUEST, KEYWORD_REQUIRED)
        }
        Err(e) => {
            warn!("Search failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

/// Repeated `keyword` parameters resolve to the first occurrence.
fn first_keyword(params: Vec<(String, String)>) -> Option<String> {
    params
        .into_iter()
        .find_map(|(name, value)| (name == "keyword").then_some(value))
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))],
        Json(body),
    )
        .into_response()
}

fn error_response(status: StatusCode, message: &str) -> Response {
    json_response(status, &json!({ "error": message }))
}
