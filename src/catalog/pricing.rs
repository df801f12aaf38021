//! Pricing Module
//!
//! Attaches a synthetic, non-reproducible price to listed records.

use rand::Rng;

use crate::catalog::{Category, PricedRecord, Record};

/// Draws a uniformly random price for the category, formatted with two
/// fraction digits.
pub fn random_price<R: Rng + ?Sized>(category: Category, rng: &mut R) -> String {
    let (min, max) = category.price_range();
    let value: f64 = rng.gen_range(min..max);
    format!("{:.2}", value)
}

/// Prices every record of a listing.
pub fn price_records(category: Category, records: Vec<Record>) -> Vec<PricedRecord> {
    let mut rng = rand::thread_rng();
    records
        .into_iter()
        .map(|record| PricedRecord::new(record, random_price(category, &mut rng)))
        .collect()
}
