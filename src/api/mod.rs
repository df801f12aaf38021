//! API Module
//!
//! HTTP handlers and routing for the browser REST API.
//!
//! # Endpoints
//! - `GET /categories` - List the four category cards
//! - `GET /categories/:category/items` - Fresh priced listing, filterable and paginated
//! - `GET /search?q=` - Cached search across every category
//! - `GET /settings/page-size` - Current records per page
//! - `PUT /settings/page-size` - Validate and store records per page
//! - `DELETE /cache/:category` - Invalidate one cached category
//! - `DELETE /cache` - Clear the category cache
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
