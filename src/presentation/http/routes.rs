// src/presentation/http/routes.rs
use crate::presentation::http::controllers::pages;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, Router, routing::get};
use serde_json::json;
use std::path::Path;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

pub fn build_router(state: HttpState, static_dir: &Path, media_dir: &Path) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/posts/{slug}/", get(pages::post_detail))
        .route("/tags/{title}/", get(pages::tag_filter))
        .route("/contacts/", get(pages::contacts))
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new(static_dir))
        .nest_service("/media", ServeDir::new(media_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(Extension(state))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
