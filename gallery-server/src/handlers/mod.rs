//! Request handlers

mod pages;
mod stream;
mod works;

pub use pages::*;
pub use stream::*;
pub use works::*;

use axum::http::StatusCode;
use axum::Json;
use gallery_core::GalleryError;
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Status for errors that reach a handler
fn error_status(error: &GalleryError) -> StatusCode {
    match error {
        GalleryError::MissingSlug | GalleryError::InvalidSlug(_) => StatusCode::BAD_REQUEST,
        GalleryError::Source(_) | GalleryError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
