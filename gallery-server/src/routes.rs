//! Routes

use crate::handlers;
use crate::state::AppState;
use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    // Configure CORS based on environment
    // GALLERY_CORS_ORIGINS can be comma-separated list of origins, or "*" for any
    let cors = match std::env::var("GALLERY_CORS_ORIGINS").ok() {
        Some(origins) if origins == "*" => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        Some(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed))
                .allow_methods(Any)
                .allow_headers(Any)
        }
        None => {
            // Default: allow localhost origins for development
            CorsLayer::new()
                .allow_origin(AllowOrigin::list([
                    HeaderValue::from_static("http://localhost:3000"),
                    HeaderValue::from_static("http://127.0.0.1:3000"),
                ]))
                .allow_methods(Any)
                .allow_headers(Any)
        }
    };

    let api_routes = Router::new()
        .route("/works", get(handlers::list_works))
        .route("/works/:slug", get(handlers::get_work))
        .route("/works/:slug/pages/stream", get(handlers::stream_pages))
        .route("/works/:slug/download", get(handlers::download_work));

    let mut router = Router::new()
        .route("/", get(handlers::index_page))
        .route("/reader", get(handlers::reader_page))
        .nest("/api/v1", api_routes)
        .route("/health", get(handlers::health_check));

    // A local gallery is also served as static files
    if let Some(dir) = state.works_dir() {
        router = router.nest_service(&state.works_route(), ServeDir::new(dir));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
