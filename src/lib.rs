//! # Dispatch Board
//!
//! The logic behind a small food-delivery order board: a validated in-memory
//! order store, a display-only paid/unpaid filter, and the policy that picks
//! the nearest unpaid order to dispatch next.
//!
//! ## Features
//!
//! - **Validated Inserts**: Orders are checked field by field before they are stored
//! - **Typed Form Boundary**: Raw form text (including payment status) is parsed once, at the edge
//! - **Insertion-Ordered Store**: Monotonic ids, copies out, no update or delete
//! - **Visibility Filter**: Paid/unpaid toggles that never affect assignment
//! - **Nearest Eligible Order**: Threshold filter plus stable distance sort
//! - **Configuration-Based**: Seed orders and initial criteria from YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dispatch::prelude::*;
//!
//! let mut board = DispatchBoard::new(BoardConfig::default_config())?;
//!
//! board.submit(&OrderForm {
//!     restaurant: "Subway".to_string(),
//!     dish: "Veggie Delite".to_string(),
//!     items: "1".to_string(),
//!     distance: "1.2".to_string(),
//!     is_paid: "false".to_string(),
//! })?;
//!
//! board.set_show_paid(false);
//! for order in board.visible_orders().orders {
//!     println!("#{} {}", order.id().short(), order.restaurant_name());
//! }
//!
//! println!("{}", board.assign());
//! ```

pub mod board;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        error::{ConfigError, DispatchError, ErrorResponse, FieldValidationError, ValidationError},
        order::{NewOrder, Order, OrderForm, OrderId, PaymentStatus, fields},
        query::{EmptyReason, OrderPredicate, VisibilityFilter, VisibleOrders},
        store::OrderStore,
        validation::ValidatedOrder,
    };

    // === Storage ===
    pub use crate::storage::InMemoryOrderStore;

    // === Assignment ===
    pub use crate::dispatch::{Assignment, AssignmentSelector, is_eligible};

    // === Config ===
    pub use crate::config::{BoardConfig, BoardConfigLayer, DistanceRange, VisibilityLayer};

    // === Session ===
    pub use crate::board::{Criteria, DispatchBoard};
}
