//! Request and Response models for the browser API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{ListingQuery, PageSizeRequest, SearchQuery};
pub use responses::{
    CategoriesResponse, CategoryCard, ErrorResponse, HealthResponse, InvalidateResponse,
    ListingResponse, PageSizeResponse, SearchResponse, StatsResponse,
};
