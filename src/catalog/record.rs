//! Record Module
//!
//! Loosely typed records as returned by the remote API, plus the priced
//! variant produced by category listings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::Category;

/// One item of a category's dataset. Shape depends on the category.
pub type Record = Map<String, Value>;

/// Every field the aggregate search looks at, across all categories.
pub const SEARCH_FIELDS: [&str; 10] = [
    "first_name",
    "last_name",
    "email",
    "equipment",
    "brand",
    "name",
    "style",
    "street_address",
    "city",
    "state",
];

// == Priced Record ==
/// A record with a synthetic `price` attached at fetch time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedRecord {
    #[serde(flatten)]
    pub record: Record,
    /// Decimal string with two fraction digits
    pub price: String,
}

impl PricedRecord {
    pub fn new(record: Record, price: String) -> Self {
        Self { record, price }
    }

    /// Numeric value of the price.
    pub fn price_value(&self) -> Option<f64> {
        self.price.parse().ok()
    }
}

// == Matching ==
/// Returns true if any of `fields` present on the record as a string contains
/// `needle`. `needle` must already be lowercased.
fn any_field_contains(record: &Record, fields: &[&str], needle: &str) -> bool {
    fields.iter().any(|field| {
        record
            .get(*field)
            .and_then(Value::as_str)
            .is_some_and(|value| value.to_lowercase().contains(needle))
    })
}

/// Case-insensitive substring match over every search field.
pub fn matches_query(record: &Record, query: &str) -> bool {
    any_field_contains(record, &SEARCH_FIELDS, &query.to_lowercase())
}

/// Narrows a category listing by that category's own fields.
///
/// A blank query keeps every item.
pub fn filter_category_items(
    category: Category,
    items: Vec<PricedRecord>,
    query: &str,
) -> Vec<PricedRecord> {
    if query.trim().is_empty() {
        return items;
    }

    let needle = query.to_lowercase();
    items
        .into_iter()
        .filter(|item| any_field_contains(&item.record, category.search_fields(), &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_matches_case_insensitive() {
        let jane = record(json!({"first_name": "Jane", "last_name": "Doe", "email": "jd@x.io"}));
        assert!(matches_query(&jane, "jane"));
        assert!(matches_query(&jane, "JANE"));
        assert!(matches_query(&jane, "x.io"));
        assert!(!matches_query(&jane, "john"));
    }

    #[test]
    fn test_empty_query_matches_any_searchable_record() {
        let beer = record(json!({"name": "Pliny", "style": "IPA"}));
        assert!(matches_query(&beer, ""));
    }

    #[test]
    fn test_non_string_fields_never_match() {
        let odd = record(json!({"name": 42, "city": null, "id": 7}));
        assert!(!matches_query(&odd, "42"));
        assert!(!matches_query(&odd, ""));
    }

    #[test]
    fn test_nested_fields_are_ignored() {
        let user = record(json!({"first_name": "Al", "address": {"city": "Springfield"}}));
        assert!(!matches_query(&user, "springfield"));
    }

    #[test]
    fn test_priced_record_flattens() {
        let priced = PricedRecord::new(record(json!({"brand": "Bosch"})), "99.50".to_string());
        let value = serde_json::to_value(&priced).unwrap();
        assert_eq!(value, json!({"brand": "Bosch", "price": "99.50"}));
        assert_eq!(priced.price_value(), Some(99.5));
    }

    #[test]
    fn test_filter_category_items_uses_category_fields() {
        let items = vec![
            PricedRecord::new(record(json!({"name": "Hazy", "style": "Stout", "hop": "Citra"})), "60.00".into()),
            PricedRecord::new(record(json!({"name": "Crisp", "style": "Lager", "hop": "Saaz"})), "70.00".into()),
        ];

        let hits = filter_category_items(Category::Beers, items.clone(), "stout");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].record["name"], "Hazy");

        // "hop" is not a beer search field
        assert!(filter_category_items(Category::Beers, items.clone(), "citra").is_empty());

        assert_eq!(filter_category_items(Category::Beers, items, "   ").len(), 2);
    }
}
