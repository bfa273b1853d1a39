//! Tests for the typed error handling system
//!
//! These tests verify that:
//! - Errors carry the right codes
//! - Error responses are properly formatted for the view layer
//! - Error conversions work correctly

use dispatch::prelude::*;

// =============================================================================
// Error Code Tests
// =============================================================================

mod error_code_tests {
    use super::*;

    #[test]
    fn test_validation_error_code() {
        let err = DispatchError::from(ValidationError::FieldError {
            field: fields::DISH.to_string(),
            message: "must not be empty".to_string(),
        });
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_config_error_code() {
        let err = DispatchError::from(ConfigError::FileNotFound {
            path: "board.yaml".to_string(),
        });
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }
}

// =============================================================================
// Response Tests
// =============================================================================

mod response_tests {
    use super::*;

    #[test]
    fn test_rejected_insert_response_lists_fields() {
        let mut store = InMemoryOrderStore::new();
        let err = store
            .insert(NewOrder::new("", "", 1, 1.0, PaymentStatus::Unpaid))
            .unwrap_err();

        let response = DispatchError::from(err).to_response();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["details"]["fields"][0]["field"], "restaurantName");
        assert_eq!(json["details"]["fields"][1]["field"], "dish");
    }

    #[test]
    fn test_response_without_details_omits_key() {
        let err = DispatchError::from(ConfigError::IoError {
            message: "permission denied".to_string(),
        });

        let json = serde_json::to_value(err.to_response()).unwrap();

        assert_eq!(json["message"], "IO error: permission denied");
        assert!(json.get("details").is_none());
    }
}

// =============================================================================
// Conversion Tests
// =============================================================================

mod conversion_tests {
    use super::*;

    fn submit(board: &mut DispatchBoard, form: &OrderForm) -> Result<Order, DispatchError> {
        Ok(board.submit(form)?)
    }

    #[test]
    fn test_question_mark_converts_validation_error() {
        let mut board = DispatchBoard::new(BoardConfig::default()).unwrap();

        let err = submit(&mut board, &OrderForm::default()).unwrap_err();

        assert!(matches!(err, DispatchError::Validation(_)));
    }

    #[test]
    fn test_no_eligible_order_is_not_an_error() {
        let mut board = DispatchBoard::new(BoardConfig::default()).unwrap();

        let outcome = board.assign();

        assert!(matches!(outcome, Assignment::NoEligibleOrder { .. }));
    }
}
