//! Response DTOs for the browser API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::catalog::{CacheStats, Category, Page, PricedRecord, Record};

/// One selectable category card (GET /categories)
#[derive(Debug, Clone, Serialize)]
pub struct CategoryCard {
    /// Key used in URLs and by the remote API
    pub value: Category,
    pub title: String,
}

impl CategoryCard {
    pub fn new(category: Category) -> Self {
        Self {
            value: category,
            title: category.title().to_string(),
        }
    }
}

/// Response body for GET /categories
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryCard>,
}

impl CategoriesResponse {
    /// All categories in card order.
    pub fn all() -> Self {
        Self {
            categories: Category::CARD_ORDER.into_iter().map(CategoryCard::new).collect(),
        }
    }
}

/// Response body for GET /categories/:category/items
#[derive(Debug, Clone, Serialize)]
pub struct ListingResponse {
    pub category: Category,
    pub title: String,
    #[serde(flatten)]
    pub page: Page<PricedRecord>,
}

impl ListingResponse {
    pub fn new(category: Category, page: Page<PricedRecord>) -> Self {
        Self {
            category,
            title: format!("Items in {}", category.title()),
            page,
        }
    }
}

/// Response body for GET /search
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub query: String,
    #[serde(flatten)]
    pub page: Page<Record>,
}

impl SearchResponse {
    pub fn new(query: impl Into<String>, page: Page<Record>) -> Self {
        Self {
            query: query.into(),
            page,
        }
    }
}

/// Response body for the page-size endpoints (GET/PUT /settings/page-size)
#[derive(Debug, Clone, Serialize)]
pub struct PageSizeResponse {
    pub records_per_page: u32,
    pub message: String,
}

impl PageSizeResponse {
    pub fn current(records_per_page: u32) -> Self {
        Self {
            records_per_page,
            message: format!("Records per page is {}", records_per_page),
        }
    }

    pub fn updated(records_per_page: u32) -> Self {
        Self {
            records_per_page,
            message: format!("Records per page set to {}", records_per_page),
        }
    }
}

/// Response body for the cache invalidation endpoints
#[derive(Debug, Clone, Serialize)]
pub struct InvalidateResponse {
    pub message: String,
    /// Number of cached categories dropped
    pub removed: usize,
}

impl InvalidateResponse {
    pub fn category(category: Category, removed: bool) -> Self {
        let message = if removed {
            format!("Cache for '{}' invalidated", category)
        } else {
            format!("Cache for '{}' was empty", category)
        };
        Self {
            message,
            removed: usize::from(removed),
        }
    }

    pub fn all(removed: usize) -> Self {
        Self {
            message: format!("Cleared {} cached categories", removed),
            removed,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub invalidations: u64,
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    pub records_per_page: u32,
}

impl StatsResponse {
    pub fn new(stats: &CacheStats, records_per_page: u32) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            invalidations: stats.invalidations,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            records_per_page,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_in_card_order() {
        let resp = CategoriesResponse::all();
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["categories"][0]["value"], "addresses");
        assert_eq!(json["categories"][0]["title"], "Houses");
        assert_eq!(json["categories"][3]["value"], "users");
        assert_eq!(json["categories"][3]["title"], "People");
    }

    #[test]
    fn test_listing_response_flattens_page() {
        let page = Page::of(Vec::<PricedRecord>::new(), 1, 10);
        let resp = ListingResponse::new(Category::Beers, page);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["category"], "beers");
        assert_eq!(json["title"], "Items in Beverages");
        assert_eq!(json["total_items"], 0);
        assert!(json["items"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_page_size_response_message() {
        let resp = PageSizeResponse::updated(25);
        assert_eq!(resp.message, "Records per page set to 25");
    }

    #[test]
    fn test_invalidate_response() {
        let resp = InvalidateResponse::category(Category::Beers, true);
        assert_eq!(resp.removed, 1);
        assert!(resp.message.contains("beers"));

        let resp = InvalidateResponse::category(Category::Beers, false);
        assert_eq!(resp.removed, 0);
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_miss();
        let resp = StatsResponse::new(&stats, 10);
        assert!((resp.hit_rate - 0.5).abs() < 0.001);
        assert_eq!(resp.records_per_page, 10);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("Something went wrong"));
    }
}
