//! API Handlers
//!
//! HTTP request handlers for each browser endpoint.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::error;

use crate::catalog::{filter_category_items, parse_page_size, Category, Page, ITEMS_PER_SCREEN};
use crate::client::Browser;
use crate::error::{BrowseError, Result};
use crate::models::{
    CategoriesResponse, HealthResponse, InvalidateResponse, ListingQuery, ListingResponse,
    PageSizeRequest, PageSizeResponse, SearchQuery, SearchResponse, StatsResponse,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Browser with its shared cache and page-size setting
    pub browser: Browser,
}

impl AppState {
    pub fn new(browser: Browser) -> Self {
        Self { browser }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(Browser::from_config(config))
    }
}

/// Handler for GET /categories
pub async fn categories_handler() -> Json<CategoriesResponse> {
    Json(CategoriesResponse::all())
}

/// Handler for GET /categories/:category/items
///
/// Fetches a fresh priced listing, narrows it by `q` and returns one display page.
pub async fn listing_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<ListingResponse>> {
    let category: Category = category.parse()?;
    let items = state.browser.fetch_category_items(category.key()).await?;

    let items = match query.q.as_deref() {
        Some(q) => filter_category_items(category, items, q),
        None => items,
    };
    let page = Page::of(items, query.page.unwrap_or(1), ITEMS_PER_SCREEN);

    Ok(Json(ListingResponse::new(category, page)))
}

/// Handler for GET /search
///
/// Runs the aggregate search. Failures are logged before being returned.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>> {
    if let Some(error_msg) = query.validate() {
        return Err(BrowseError::InvalidRequest(error_msg));
    }

    let results = state
        .browser
        .fetch_all_categories(&query.q)
        .await
        .inspect_err(|err| error!(query = %query.q, "error fetching data: {}", err))?;

    let page = Page::of(results, query.page.unwrap_or(1), ITEMS_PER_SCREEN);
    Ok(Json(SearchResponse::new(query.q, page)))
}

/// Handler for GET /settings/page-size
pub async fn get_page_size_handler(State(state): State<AppState>) -> Json<PageSizeResponse> {
    Json(PageSizeResponse::current(state.browser.records_per_page()))
}

/// Handler for PUT /settings/page-size
///
/// Validates the submitted text before it reaches the setting.
pub async fn set_page_size_handler(
    State(state): State<AppState>,
    Json(req): Json<PageSizeRequest>,
) -> Result<Json<PageSizeResponse>> {
    let size = parse_page_size(&req.as_text())?;
    let effective = state.browser.set_records_per_page(i64::from(size));

    Ok(Json(PageSizeResponse::updated(effective)))
}

/// Handler for DELETE /cache/:category
pub async fn invalidate_handler(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<InvalidateResponse>> {
    let category: Category = category.parse()?;
    let removed = state.browser.invalidate(category).await;

    Ok(Json(InvalidateResponse::category(category, removed)))
}

/// Handler for DELETE /cache
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<InvalidateResponse> {
    let removed = state.browser.clear_cache().await;
    Json(InvalidateResponse::all(removed))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.browser.cache_stats().await;
    Json(StatsResponse::new(&stats, state.browser.records_per_page()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
