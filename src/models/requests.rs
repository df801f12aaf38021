//! Request DTOs for the browser API
//!
//! Defines query strings and bodies accepted by the HTTP endpoints.

use serde::Deserialize;
use serde_json::Value;

/// Query string for GET /categories/:category/items
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingQuery {
    /// Optional filter over the category's own fields
    #[serde(default)]
    pub q: Option<String>,
    /// 1-based display page
    #[serde(default)]
    pub page: Option<usize>,
}

/// Query string for GET /search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub page: Option<usize>,
}

impl SearchQuery {
    /// Returns an error message if the query is blank.
    pub fn validate(&self) -> Option<String> {
        if self.q.trim().is_empty() {
            return Some("Search query cannot be blank".to_string());
        }
        None
    }
}

/// Request body for PUT /settings/page-size
///
/// `value` is accepted as a JSON string or number, as typed by the user.
#[derive(Debug, Clone, Deserialize)]
pub struct PageSizeRequest {
    pub value: Value,
}

impl PageSizeRequest {
    /// Text form of the submitted value, for validation.
    pub fn as_text(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}
