//! Validation and filtering system
//!
//! Candidates pass through the filters first, then every validator runs and
//! all failures are reported together. Only a [`ValidatedOrder`] can become
//! a stored [`Order`](crate::core::order::Order).

pub mod filters;
pub mod validators;

use crate::core::error::{FieldValidationError, ValidationError};
use crate::core::order::{NewOrder, fields};

/// A candidate that passed every field check
///
/// The item count has already been narrowed to its stored width and the
/// distance normalised (`-0.0` stored as `0.0`).
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedOrder {
    candidate: NewOrder,
    item_count: u32,
}

impl ValidatedOrder {
    /// Filter then validate a candidate
    pub fn validate(candidate: NewOrder) -> Result<Self, ValidationError> {
        let candidate = NewOrder {
            restaurant_name: filters::collapse_whitespace(&candidate.restaurant_name),
            dish: filters::collapse_whitespace(&candidate.dish),
            ..candidate
        };

        let required = validators::required_text();
        let positive = validators::positive_count();
        let distance = validators::non_negative_distance();

        let mut errors = Vec::new();
        let mut record = |field: &str, message: String| {
            errors.push(FieldValidationError::new(field, message));
        };

        if let Err(message) = required(fields::RESTAURANT_NAME, &candidate.restaurant_name) {
            record(fields::RESTAURANT_NAME, message);
        }
        if let Err(message) = required(fields::DISH, &candidate.dish) {
            record(fields::DISH, message);
        }
        let item_count =
            positive(fields::ITEM_COUNT, candidate.item_count).unwrap_or_else(|message| {
                record(fields::ITEM_COUNT, message);
                0
            });
        let delivery_distance = distance(fields::DELIVERY_DISTANCE, candidate.delivery_distance)
            .unwrap_or_else(|message| {
                record(fields::DELIVERY_DISTANCE, message);
                0.0
            });

        if let Some(err) = ValidationError::from_errors(errors) {
            return Err(err);
        }

        Ok(Self {
            candidate: NewOrder {
                delivery_distance,
                ..candidate
            },
            item_count,
        })
    }

    /// The filtered candidate
    pub fn candidate(&self) -> &NewOrder {
        &self.candidate
    }

    pub(crate) fn into_parts(self) -> (NewOrder, u32) {
        (self.candidate, self.item_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::order::PaymentStatus;

    #[test]
    fn test_valid_candidate_is_filtered() {
        let validated = ValidatedOrder::validate(NewOrder::new(
            "  Burger   King ",
            "Whopper Burger ",
            2,
            3.5,
            PaymentStatus::Unpaid,
        ))
        .unwrap();

        assert_eq!(validated.candidate().restaurant_name, "Burger King");
        assert_eq!(validated.candidate().dish, "Whopper Burger");
    }

    #[test]
    fn test_empty_restaurant_is_named() {
        let err = ValidatedOrder::validate(NewOrder::new("", "X", 1, 1.0, PaymentStatus::Unpaid))
            .unwrap_err();

        assert_eq!(err.fields(), vec![fields::RESTAURANT_NAME]);
    }

    #[test]
    fn test_all_failures_are_collected() {
        let err = ValidatedOrder::validate(NewOrder::new(
            " ",
            "",
            0,
            -1.0,
            PaymentStatus::Paid,
        ))
        .unwrap_err();

        assert_eq!(
            err.fields(),
            vec![
                fields::RESTAURANT_NAME,
                fields::DISH,
                fields::ITEM_COUNT,
                fields::DELIVERY_DISTANCE,
            ]
        );
    }

    #[test]
    fn test_negative_zero_distance_is_stored_as_zero() {
        let validated =
            ValidatedOrder::validate(NewOrder::new("KFC", "Wings", 1, -0.0, PaymentStatus::Unpaid))
                .unwrap();

        assert!(validated.candidate().delivery_distance.is_sign_positive());
    }

    #[test]
    fn test_zero_distance_is_accepted() {
        assert!(
            ValidatedOrder::validate(NewOrder::new("KFC", "Wings", 1, 0.0, PaymentStatus::Unpaid))
                .is_ok()
        );
    }
}
