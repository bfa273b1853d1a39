//! Reusable field filters
//!
//! These filters normalise raw field values before validation

/// Filter: trim surrounding whitespace
pub fn trim(value: &str) -> String {
    value.trim().to_string()
}

/// Filter: collapse runs of inner whitespace to a single space
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
