//! Typed error handling for the dispatch board
//!
//! Every failure the board can report is a value, never a panic. The view
//! layer matches on these types to decide what to show the user.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: an order candidate (or a criteria value) was rejected
//! - [`ConfigError`]: board configuration could not be loaded or is inconsistent
//!
//! Finding no eligible order is *not* an error: it is the
//! [`Assignment::NoEligibleOrder`](crate::dispatch::Assignment) outcome.
//!
//! # Example
//!
//! ```rust,ignore
//! use dispatch::prelude::*;
//!
//! match board.submit(form) {
//!     Ok(order) => println!("Added #{}", order.id().short()),
//!     Err(err) => {
//!         for field in err.fields() {
//!             eprintln!("fix field: {}", field);
//!         }
//!     }
//! }
//! ```

use serde::Serialize;
use thiserror::Error;

/// The main error type for the dispatch board
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Error payload handed to the view layer
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl DispatchError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            DispatchError::Validation(_) => "VALIDATION_ERROR",
            DispatchError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            DispatchError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            DispatchError::Validation(ValidationError::FieldError { field, message }) => {
                Some(serde_json::json!({
                    "fields": [{ "field": field, "message": message }]
                }))
            }
            DispatchError::Config(ConfigError::ParseError {
                file: Some(file), ..
            }) => Some(serde_json::json!({ "file": file })),
            _ => None,
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Single field validation error
    #[error("Validation error for field '{field}': {message}")]
    FieldError { field: String, message: String },

    /// Multiple field validation errors
    #[error("Validation errors: {}", join_field_errors(.0))]
    FieldErrors(Vec<FieldValidationError>),
}

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl ValidationError {
    /// Names of every field that failed validation, in report order
    pub fn fields(&self) -> Vec<&str> {
        match self {
            ValidationError::FieldError { field, .. } => vec![field.as_str()],
            ValidationError::FieldErrors(errors) => {
                errors.iter().map(|e| e.field.as_str()).collect()
            }
        }
    }

    /// Whether `field` is among the rejected fields
    pub fn has_field(&self, field: &str) -> bool {
        self.fields().contains(&field)
    }

    /// Collapse a list of field errors; a single entry becomes a `FieldError`
    pub(crate) fn from_errors(mut errors: Vec<FieldValidationError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => {
                let FieldValidationError { field, message } = errors.remove(0);
                Some(ValidationError::FieldError { field, message })
            }
            _ => Some(ValidationError::FieldErrors(errors)),
        }
    }
}

fn join_field_errors(errors: &[FieldValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file
    #[error("{}", describe_parse_error(.file, .message))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// IO error while reading configuration
    #[error("IO error: {message}")]
    IoError { message: String },
}

fn describe_parse_error(file: &Option<String>, message: &str) -> String {
    match file {
        Some(file) => format!("Failed to parse config file '{}': {}", file, message),
        None => format!("Failed to parse config: {}", message),
    }
}
