//! Category Module
//!
//! The four record kinds served by the random-data API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BrowseError;

// == Category ==
/// One of the fixed record kinds served by the remote data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Users,
    Appliances,
    Beers,
    Addresses,
}

impl Category {
    /// Fetch order used by the aggregate search.
    pub const ALL: [Category; 4] = [
        Category::Users,
        Category::Appliances,
        Category::Beers,
        Category::Addresses,
    ];

    /// Order in which categories are presented as cards.
    pub const CARD_ORDER: [Category; 4] = [
        Category::Addresses,
        Category::Beers,
        Category::Appliances,
        Category::Users,
    ];

    /// Path segment used by the remote API.
    pub fn key(self) -> &'static str {
        match self {
            Category::Users => "users",
            Category::Appliances => "appliances",
            Category::Beers => "beers",
            Category::Addresses => "addresses",
        }
    }

    /// Human-facing title.
    pub fn title(self) -> &'static str {
        match self {
            Category::Users => "People",
            Category::Appliances => "Appliances",
            Category::Beers => "Beverages",
            Category::Addresses => "Houses",
        }
    }

    /// Fields a listing of this category is filtered on.
    pub fn search_fields(self) -> &'static [&'static str] {
        match self {
            Category::Users => &["first_name", "last_name", "email"],
            Category::Appliances => &["equipment", "brand"],
            Category::Beers => &["name", "style"],
            Category::Addresses => &["street_address", "city", "state"],
        }
    }

    /// Inclusive bounds of the synthetic price.
    pub fn price_range(self) -> (f64, f64) {
        match self {
            Category::Addresses => (100_000.0, 9_000_000.0),
            _ => (50.0, 500.0),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = BrowseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| BrowseError::UnknownCategory(s.to_string()))
    }
}
