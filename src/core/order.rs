//! Order records and the raw input they are built from

use crate::core::error::{FieldValidationError, ValidationError};
use crate::core::validation::{ValidatedOrder, filters, validators};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// View-facing field names, used in validation reports
pub mod fields {
    pub const RESTAURANT_NAME: &str = "restaurantName";
    pub const DISH: &str = "dish";
    pub const ITEM_COUNT: &str = "itemCount";
    pub const DELIVERY_DISTANCE: &str = "deliveryDistance";
    pub const IS_PAID: &str = "isPaid";
}

/// Identifier assigned by the store when an order is inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Last four digits, as printed in the order list
    pub fn short(self) -> String {
        let digits = self.0.to_string();
        digits[digits.len().saturating_sub(4)..].to_string()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payment state of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Paid online
    Paid,
    /// Cash on delivery
    #[default]
    Unpaid,
}

impl PaymentStatus {
    pub fn is_paid(self) -> bool {
        matches!(self, PaymentStatus::Paid)
    }
}

impl From<bool> for PaymentStatus {
    fn from(paid: bool) -> Self {
        if paid {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Unpaid
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "paid" | "online" => Ok(PaymentStatus::Paid),
            "false" | "unpaid" | "cod" => Ok(PaymentStatus::Unpaid),
            other => Err(ValidationError::FieldError {
                field: fields::IS_PAID.to_string(),
                message: format!("unrecognised payment status '{}'", other),
            }),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Paid => write!(f, "Paid"),
            PaymentStatus::Unpaid => write!(f, "Unpaid"),
        }
    }
}

/// A stored delivery order
///
/// Orders are only ever built by a store, after validation; every field is
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    id: OrderId,
    restaurant_name: String,
    dish: String,
    item_count: u32,
    delivery_distance: f64,
    is_paid: bool,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Build an order from an already validated candidate
    pub(crate) fn from_validated(id: OrderId, validated: ValidatedOrder) -> Self {
        let (candidate, item_count) = validated.into_parts();
        Self {
            id,
            restaurant_name: candidate.restaurant_name,
            dish: candidate.dish,
            item_count,
            delivery_distance: candidate.delivery_distance,
            is_paid: candidate.payment.is_paid(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn restaurant_name(&self) -> &str {
        &self.restaurant_name
    }

    pub fn dish(&self) -> &str {
        &self.dish
    }

    pub fn item_count(&self) -> u32 {
        self.item_count
    }

    /// Delivery distance in kilometers
    pub fn delivery_distance(&self) -> f64 {
        self.delivery_distance
    }

    pub fn is_paid(&self) -> bool {
        self.is_paid
    }

    pub fn payment_status(&self) -> PaymentStatus {
        PaymentStatus::from(self.is_paid)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// A candidate order, typed but not yet validated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub restaurant_name: String,
    pub dish: String,
    pub item_count: i64,
    pub delivery_distance: f64,
    #[serde(default)]
    pub payment: PaymentStatus,
}

impl NewOrder {
    pub fn new(
        restaurant_name: impl Into<String>,
        dish: impl Into<String>,
        item_count: i64,
        delivery_distance: f64,
        payment: PaymentStatus,
    ) -> Self {
        Self {
            restaurant_name: restaurant_name.into(),
            dish: dish.into(),
            item_count,
            delivery_distance,
            payment,
        }
    }
}

/// Raw text fields as submitted by the order form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderForm {
    pub restaurant: String,
    pub dish: String,
    pub items: String,
    pub distance: String,
    pub is_paid: String,
}

impl OrderForm {
    /// Convert the text fields into a typed candidate
    ///
    /// Blank names and unparseable fields are reported together, so a
    /// rejected form names every field to fix. Numeric range checks
    /// (positive count, non-negative distance) are left to the store.
    pub fn parse(&self) -> Result<NewOrder, ValidationError> {
        let mut errors = Vec::new();
        let required = validators::required_text();

        let restaurant_name = filters::trim(&self.restaurant);
        if let Err(message) = required(fields::RESTAURANT_NAME, &restaurant_name) {
            errors.push(FieldValidationError::new(fields::RESTAURANT_NAME, message));
        }

        let dish = filters::trim(&self.dish);
        if let Err(message) = required(fields::DISH, &dish) {
            errors.push(FieldValidationError::new(fields::DISH, message));
        }

        let item_count = match filters::trim(&self.items).as_str() {
            "" => {
                errors.push(FieldValidationError::new(fields::ITEM_COUNT, "is required"));
                0
            }
            raw => raw.parse::<i64>().unwrap_or_else(|_| {
                errors.push(FieldValidationError::new(
                    fields::ITEM_COUNT,
                    format!("'{}' is not a whole number", raw),
                ));
                0
            }),
        };

        let delivery_distance = match filters::trim(&self.distance).as_str() {
            "" => {
                errors.push(FieldValidationError::new(
                    fields::DELIVERY_DISTANCE,
                    "is required",
                ));
                0.0
            }
            raw => raw.parse::<f64>().unwrap_or_else(|_| {
                errors.push(FieldValidationError::new(
                    fields::DELIVERY_DISTANCE,
                    format!("'{}' is not a number", raw),
                ));
                0.0
            }),
        };

        // An untouched select submits its default option: unpaid.
        let payment = if self.is_paid.trim().is_empty() {
            PaymentStatus::Unpaid
        } else {
            match self.is_paid.parse::<PaymentStatus>() {
                Ok(status) => status,
                Err(err) => {
                    if let ValidationError::FieldError { field, message } = err {
                        errors.push(FieldValidationError { field, message });
                    }
                    PaymentStatus::Unpaid
                }
            }
        };

        match ValidationError::from_errors(errors) {
            Some(err) => Err(err),
            None => Ok(NewOrder {
                restaurant_name,
                dish,
                item_count,
                delivery_distance,
                payment,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(restaurant: &str, dish: &str, items: &str, distance: &str, is_paid: &str) -> OrderForm {
        OrderForm {
            restaurant: restaurant.to_string(),
            dish: dish.to_string(),
            items: items.to_string(),
            distance: distance.to_string(),
            is_paid: is_paid.to_string(),
        }
    }

    #[test]
    fn test_payment_status_parses_form_values() {
        assert_eq!("true".parse::<PaymentStatus>().unwrap(), PaymentStatus::Paid);
        assert_eq!("false".parse::<PaymentStatus>().unwrap(), PaymentStatus::Unpaid);
        assert_eq!(" Paid ".parse::<PaymentStatus>().unwrap(), PaymentStatus::Paid);
        assert_eq!("COD".parse::<PaymentStatus>().unwrap(), PaymentStatus::Unpaid);
    }

    #[test]
    fn test_payment_status_rejects_unknown_text() {
        let err = "maybe".parse::<PaymentStatus>().unwrap_err();
        assert!(err.has_field(fields::IS_PAID));
    }

    #[test]
    fn test_short_id_keeps_last_four_digits() {
        assert_eq!(OrderId::new(1_718_000_012_345).short(), "2345");
        assert_eq!(OrderId::new(101).short(), "101");
        assert_eq!(OrderId::new(100_005).short(), "0005");
    }

    #[test]
    fn test_form_parse_trims_and_converts() {
        let parsed = form("  KFC ", " Chicken Bucket", " 4 ", "2.1", "false")
            .parse()
            .unwrap();

        assert_eq!(parsed.restaurant_name, "KFC");
        assert_eq!(parsed.dish, "Chicken Bucket");
        assert_eq!(parsed.item_count, 4);
        assert_eq!(parsed.delivery_distance, 2.1);
        assert_eq!(parsed.payment, PaymentStatus::Unpaid);
    }

    #[test]
    fn test_form_parse_reports_every_bad_field() {
        let err = form("KFC", "Wings", "two", "", "perhaps").parse().unwrap_err();

        assert_eq!(
            err.fields(),
            vec![fields::ITEM_COUNT, fields::DELIVERY_DISTANCE, fields::IS_PAID]
        );
    }

    #[test]
    fn test_form_parse_names_blank_text_alongside_bad_numbers() {
        let err = form("", " ", "", "", "false").parse().unwrap_err();

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
    fn test_form_parse_defaults_blank_payment_to_unpaid() {
        let parsed = form("KFC", "Wings", "1", "1", "").parse().unwrap();
        assert_eq!(parsed.payment, PaymentStatus::Unpaid);
    }

    #[test]
    fn test_order_serializes_with_camel_case_keys() {
        let validated = ValidatedOrder::validate(NewOrder::new(
            "Dominos",
            "Farmhouse Pizza",
            1,
            8.0,
            PaymentStatus::Paid,
        ))
        .unwrap();
        let order = Order::from_validated(OrderId::new(7), validated);

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["restaurantName"], "Dominos");
        assert_eq!(json["deliveryDistance"], 8.0);
        assert_eq!(json["isPaid"], true);
    }
}
