//! Indian vehicle registration number check
//!
//! Standalone utility: the shipment form has no vehicle field, so nothing on
//! the document generation path calls this.

use std::sync::LazyLock;

use regex::Regex;

/// State code, district digits, series letters, four-digit number
static VEHICLE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{2}\d{2}[A-Z]{1,2}\d{4}$").expect("vehicle number pattern is valid")
});

/// Returns true when the whole string is a registration number like `MH12AB1234`.
///
/// Matching is case-sensitive and allows no separators.
pub fn is_valid_indian_vehicle_number(number: &str) -> bool {
    VEHICLE_NUMBER.is_match(number)
}
