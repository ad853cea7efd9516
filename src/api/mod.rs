//! Read-only HTTP API over the stored news collection.
//!
//! Two operations: the full collection and a point lookup by the
//! feed-assigned identifier. Reads go straight to the store and may observe
//! a partially-synced state mid-cycle; sync failures are never surfaced
//! here.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::storage::NewsStore;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct ApiState {
    store: Arc<dyn NewsStore>,
}

/// Build the read API router over the given store.
pub fn router(store: Arc<dyn NewsStore>) -> Router {
    Router::new()
        .route("/all-news", get(all_news))
        .route("/news", get(news_by_id))
        .with_state(ApiState { store })
}

async fn all_news(State(state): State<ApiState>) -> Response {
    match state.store.find_all().await {
        Ok(items) => Json(items).into_response(),
        Err(e) => {
            log::error!("failed to load news collection: {e}");
            store_failure()
        }
    }
}

#[derive(Debug, Deserialize)]
struct NewsQuery {
    id: i32,
}

async fn news_by_id(
    State(state): State<ApiState>,
    query: Result<Query<NewsQuery>, QueryRejection>,
) -> Response {
    let Ok(Query(NewsQuery { id })) = query else {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "missing or invalid id" })),
        )
            .into_response();
    };

    match state.store.find_by_id(id).await {
        Ok(Some(item)) => Json(item).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "news item not found" })),
        )
            .into_response(),
        Err(e) => {
            log::error!("failed to load news item {id}: {e}");
            store_failure()
        }
    }
}

fn store_failure() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": "store unavailable" })),
    )
        .into_response()
}
