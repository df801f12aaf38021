//! Page-Size Setting Module
//!
//! The shared number of records requested per category per fetch.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::error::{BrowseError, Result};

// == Public Constants ==
/// Page size used until a valid value is assigned
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page size the remote API is asked for
pub const MAX_PAGE_SIZE: u32 = 100;

/// Returns true for values in `(1, MAX_PAGE_SIZE]`.
pub fn is_valid_page_size(value: i64) -> bool {
    value > 1 && value <= i64::from(MAX_PAGE_SIZE)
}

// == Page Size Setting ==
/// Records-per-page setting shared by every fetch.
///
/// Cloning shares the underlying value.
#[derive(Debug, Clone)]
pub struct PageSizeSetting {
    value: Arc<AtomicU32>,
}

impl PageSizeSetting {
    pub fn new() -> Self {
        Self {
            value: Arc::new(AtomicU32::new(DEFAULT_PAGE_SIZE)),
        }
    }

    // == Set ==
    /// Assigns a new page size.
    ///
    /// Out-of-range values reset the setting to [`DEFAULT_PAGE_SIZE`] instead
    /// of being rejected. Returns the effective value.
    pub fn set(&self, value: i64) -> u32 {
        let effective = if is_valid_page_size(value) {
            value as u32
        } else {
            DEFAULT_PAGE_SIZE
        };
        self.value.store(effective, Ordering::Relaxed);
        effective
    }

    // == Get ==
    pub fn get(&self) -> u32 {
        self.value.load(Ordering::Relaxed)
    }
}

impl Default for PageSizeSetting {
    fn default() -> Self {
        Self::new()
    }
}

// == Parse ==
/// Validates user-entered page size text.
///
/// Each rejection carries the message shown to the user.
pub fn parse_page_size(input: &str) -> Result<u32> {
    let input = input.trim();
    if input.is_empty() {
        return Err(invalid("Input cannot be left blank."));
    }

    let number: f64 = input
        .parse()
        .map_err(|_| invalid("Please enter a valid positive number."))?;

    if !number.is_finite() || number <= 0.0 {
        return Err(invalid("Please enter a valid positive number."));
    }
    if number.fract() != 0.0 {
        return Err(invalid("Value must be an integer."));
    }
    if number == 1.0 {
        return Err(invalid("Value cannot be 1."));
    }
    if number > f64::from(MAX_PAGE_SIZE) {
        return Err(invalid("Value cannot exceed 100."));
    }

    Ok(number as u32)
}

fn invalid(message: &str) -> BrowseError {
    BrowseError::InvalidRequest(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(input: &str) -> String {
        match parse_page_size(input) {
            Err(BrowseError::InvalidRequest(msg)) => msg,
            other => panic!("expected rejection for {input:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_default_is_ten() {
        assert_eq!(PageSizeSetting::new().get(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_set_valid_values() {
        let setting = PageSizeSetting::new();
        assert_eq!(setting.set(2), 2);
        assert_eq!(setting.set(100), 100);
        assert_eq!(setting.get(), 100);
    }

    #[test]
    fn test_set_invalid_resets_to_default() {
        let setting = PageSizeSetting::new();
        setting.set(50);
        assert_eq!(setting.set(1), DEFAULT_PAGE_SIZE);

        setting.set(50);
        assert_eq!(setting.set(101), DEFAULT_PAGE_SIZE);

        setting.set(50);
        assert_eq!(setting.set(-3), DEFAULT_PAGE_SIZE);
        assert_eq!(setting.get(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_clones_share_value() {
        let setting = PageSizeSetting::new();
        let other = setting.clone();
        setting.set(25);
        assert_eq!(other.get(), 25);
    }

    #[test]
    fn test_parse_accepts_valid_input() {
        assert_eq!(parse_page_size("25").unwrap(), 25);
        assert_eq!(parse_page_size(" 100 ").unwrap(), 100);
        assert_eq!(parse_page_size("2").unwrap(), 2);
        assert_eq!(parse_page_size("30.0").unwrap(), 30);
    }

    #[test]
    fn test_parse_rejection_messages() {
        assert_eq!(message(""), "Input cannot be left blank.");
        assert_eq!(message("   "), "Input cannot be left blank.");
        assert_eq!(message("abc"), "Please enter a valid positive number.");
        assert_eq!(message("0"), "Please enter a valid positive number.");
        assert_eq!(message("-5"), "Please enter a valid positive number.");
        assert_eq!(message("2.5"), "Value must be an integer.");
        assert_eq!(message("1"), "Value cannot be 1.");
        assert_eq!(message("101"), "Value cannot exceed 100.");
    }

    #[test]
    fn test_parse_and_set_agree() {
        for value in -5..=110 {
            let parsed = parse_page_size(&value.to_string()).is_ok();
            assert_eq!(parsed, is_valid_page_size(value), "disagree at {value}");
        }
    }
}
