//! Core module containing the order types, errors, validation and query traits

pub mod error;
pub mod order;
pub mod query;
pub mod store;
pub mod validation;

pub use error::{ConfigError, DispatchError, ErrorResponse, FieldValidationError, ValidationError};
pub use order::{NewOrder, Order, OrderForm, OrderId, PaymentStatus};
pub use query::{EmptyReason, OrderPredicate, VisibilityFilter, VisibleOrders};
pub use store::OrderStore;
pub use validation::ValidatedOrder;
