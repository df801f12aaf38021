//! API Routes
//!
//! Configures the Axum router with all browser endpoints.

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    categories_handler, clear_cache_handler, get_page_size_handler, health_handler,
    invalidate_handler, listing_handler, search_handler, set_page_size_handler, stats_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /categories` - Category cards
/// - `GET /categories/:category/items` - Priced listing of one category
/// - `GET /search` - Search across all categories
/// - `GET|PUT /settings/page-size` - Records requested per category
/// - `DELETE /cache/:category`, `DELETE /cache` - Cache invalidation
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/categories", get(categories_handler))
        .route("/categories/:category/items", get(listing_handler))
        .route("/search", get(search_handler))
        .route(
            "/settings/page-size",
            get(get_page_size_handler).put(set_page_size_handler),
        )
        .route("/cache", delete(clear_cache_handler))
        .route("/cache/:category", delete(invalidate_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
