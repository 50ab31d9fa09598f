//! Destination address validation

use once_cell::sync::Lazy;
use regex::Regex;

/// Simple syntactic pattern, not RFC 5322
static ADDRESS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("Failed to compile address regex")
});

/// Check whether an address looks deliverable
///
/// Accepts a local part of letters, digits and `._%+-`, an `@`, a domain of
/// letters, digits, dots and hyphens, and a top-level segment of at least two
/// ASCII letters.
pub fn is_valid_address(address: &str) -> bool {
    ADDRESS_PATTERN.is_match(address)
}
