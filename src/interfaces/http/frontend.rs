//! Single-page app hosting
//!
//! When the configured build directory holds an `index.html`, unmatched
//! non-API paths are served from it, and anything that is not a file falls
//! back to `index.html` so client-side routes (`/tenants`, `/settings`, ...)
//! survive a reload. Unmatched `/api/...` paths always get a JSON 404.

use std::path::Path;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};

use crate::interfaces::http::common::ApiError;

pub type SpaService = ServeDir<ServeFile>;

/// Build the static file service, or `None` if there is no usable build.
pub fn spa_service(dist_dir: &Path) -> Option<SpaService> {
    let index = dist_dir.join("index.html");
    if !index.is_file() {
        tracing::info!(dir = %dist_dir.display(), "No front-end build found; serving API only");
        return None;
    }
    tracing::info!(dir = %dist_dir.display(), "Serving front-end");
    Some(ServeDir::new(dist_dir).fallback(ServeFile::new(index)))
}

pub async fn fallback(spa: Option<SpaService>, request: Request<Body>) -> Response {
    let path = request.uri().path();
    let is_api = path == "/api" || path.starts_with("/api/");

    match spa {
        Some(spa) if !is_api => match spa.oneshot(request).await {
            Ok(response) => response.into_response(),
            Err(never) => match never {},
        },
        _ => ApiError::new(StatusCode::NOT_FOUND, "not_found", "Route not found").into_response(),
    }
}
