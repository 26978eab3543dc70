use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::AppState;

pub const NEWS_ERROR: &str = "Failed to fetch news";

pub async fn get_news(State(state): State<Arc<AppState>>) -> Response {
    match state.aggregator.get_news().await {
        Ok(news) => Json(news).into_response(),
        Err(e) => {
            tracing::error!("Error fetching news: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": NEWS_ERROR }))).into_response()
        }
    }
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
