//! Reusable field validators
//!
//! Each validator receives the field name and its value and returns the
//! message to report when the value is rejected. Numeric validators hand
//! back the value in the form it is stored in.

/// Validator: text must not be empty
pub fn required_text() -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &str| {
        if value.trim().is_empty() {
            Err(format!("'{}' is required and must not be empty", field))
        } else {
            Ok(())
        }
    }
}

/// Validator: count must be a positive integer that fits the stored width
pub fn positive_count() -> impl Fn(&str, i64) -> Result<u32, String> + Send + Sync + Clone {
    |field: &str, value: i64| {
        if value <= 0 {
            return Err(format!(
                "'{}' must be greater than zero (value: {})",
                field, value
            ));
        }
        u32::try_from(value).map_err(|_| format!("'{}' is too large (value: {})", field, value))
    }
}

/// Validator: distance must be a finite number, zero or more
///
/// `-0.0` is accepted and returned as `0.0`, so it sorts and prints like
/// any other zero distance.
pub fn non_negative_distance() -> impl Fn(&str, f64) -> Result<f64, String> + Send + Sync + Clone
{
    |field: &str, value: f64| {
        if !value.is_finite() {
            Err(format!("'{}' must be a finite number (value: {})", field, value))
        } else if value < 0.0 {
            Err(format!(
                "'{}' must not be negative (value: {})",
                field, value
            ))
        } else {
            Ok(value + 0.0)
        }
    }
}
