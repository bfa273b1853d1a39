//! View-facing session over one order store
//!
//! [`DispatchBoard`] is the single owner of the store and of the transient
//! criteria (list filter and assignment threshold). The surrounding view
//! calls into it on each user event and renders what it returns; nothing
//! else mutates the orders.
//!
//! # Example
//!
//! ```rust,ignore
//! use dispatch::prelude::*;
//!
//! let mut board = DispatchBoard::new(BoardConfig::default_config())?;
//! board.set_max_distance(10.0);
//!
//! let outcome = board.assign();
//! println!("{}", outcome); // Assigned to Order #103 (KFC) - 2.1km away!
//! ```

use crate::config::{BoardConfig, DistanceRange};
use crate::core::error::{ConfigError, ValidationError};
use crate::core::order::{NewOrder, Order, OrderForm};
use crate::core::query::{VisibilityFilter, VisibleOrders};
use crate::core::store::OrderStore;
use crate::dispatch::{Assignment, AssignmentSelector};
use crate::storage::InMemoryOrderStore;
use serde::Serialize;

/// Transient session parameters; never stored with the orders
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Criteria {
    pub visibility: VisibilityFilter,
    pub max_distance: f64,
}

/// A dispatch board session
#[derive(Debug, Clone)]
pub struct DispatchBoard {
    store: InMemoryOrderStore,
    selector: AssignmentSelector,
    criteria: Criteria,
    distance_range: DistanceRange,
    last_assignment: Option<Assignment>,
}

impl DispatchBoard {
    /// Start a session from configuration, inserting its seed orders
    ///
    /// A seed order that fails validation aborts startup with the offending
    /// seed's position.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut store = InMemoryOrderStore::starting_at(config.first_order_id);
        for (index, seed) in config.seed_orders.into_iter().enumerate() {
            store
                .insert(seed)
                .map_err(|err| ConfigError::InvalidValue {
                    field: format!("seedOrders[{}]", index),
                    value: err.fields().join(","),
                    message: err.to_string(),
                })?;
        }

        tracing::info!(
            seeded = store.len(),
            max_distance_km = config.max_distance,
            "Dispatch board ready"
        );

        Ok(Self {
            store,
            selector: AssignmentSelector::new(),
            criteria: Criteria {
                visibility: config.visibility,
                max_distance: config.max_distance,
            },
            distance_range: config.distance_range,
            last_assignment: None,
        })
    }

    /// Load a YAML config file and start a session from it
    pub fn from_config_file(path: &str) -> Result<Self, ConfigError> {
        Self::new(BoardConfig::from_yaml_file(path)?)
    }

    /// Submit the order form
    pub fn submit(&mut self, form: &OrderForm) -> Result<Order, ValidationError> {
        self.store.insert_form(form)
    }

    /// Add an already typed candidate
    pub fn add(&mut self, candidate: NewOrder) -> Result<Order, ValidationError> {
        self.store.insert(candidate)
    }

    /// Orders the list should currently show
    pub fn visible_orders(&self) -> VisibleOrders {
        VisibleOrders::new(
            self.store.query_filtered(&self.criteria.visibility),
            self.store.len(),
        )
    }

    /// Every stored order, regardless of the list filter
    pub fn orders(&self) -> &[Order] {
        self.store.as_slice()
    }

    pub fn set_show_paid(&mut self, show: bool) {
        self.criteria.visibility.show_paid = show;
    }

    pub fn set_show_unpaid(&mut self, show: bool) {
        self.criteria.visibility.show_unpaid = show;
    }

    /// Set the assignment threshold, clamped to the configured range
    ///
    /// Returns the value actually applied.
    pub fn set_max_distance(&mut self, max_distance: f64) -> f64 {
        let applied = self.distance_range.clamp(max_distance);
        if applied != max_distance {
            tracing::debug!(
                requested = max_distance,
                applied,
                "Max distance clamped to range"
            );
        }
        self.criteria.max_distance = applied;
        applied
    }

    pub fn criteria(&self) -> Criteria {
        self.criteria
    }

    pub fn distance_range(&self) -> DistanceRange {
        self.distance_range
    }

    /// Pick the nearest eligible order over the whole store
    ///
    /// The list filter plays no part here. The outcome is remembered for
    /// [`last_assignment`](Self::last_assignment); the orders are not touched.
    pub fn assign(&mut self) -> &Assignment {
        let outcome = self
            .selector
            .select_from(&self.store, self.criteria.max_distance);
        self.last_assignment.insert(outcome)
    }

    /// Outcome of the most recent [`assign`](Self::assign), if any
    pub fn last_assignment(&self) -> Option<&Assignment> {
        self.last_assignment.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::order::PaymentStatus;

    #[test]
    fn test_new_board_seeds_orders() {
        let board = DispatchBoard::new(BoardConfig::default_config()).unwrap();

        assert_eq!(board.orders().len(), 3);
        assert_eq!(board.criteria().max_distance, 5.0);
        assert!(board.last_assignment().is_none());
    }

    #[test]
    fn test_invalid_seed_aborts_startup() {
        let config = BoardConfig {
            seed_orders: vec![
                NewOrder::new("KFC", "Wings", 1, 1.0, PaymentStatus::Unpaid),
                NewOrder::new("KFC", "", 1, 1.0, PaymentStatus::Unpaid),
            ],
            ..BoardConfig::default()
        };

        let err = DispatchBoard::new(config).unwrap_err();
        assert!(err.to_string().contains("seedOrders[1]"));
    }

    #[test]
    fn test_set_max_distance_clamps() {
        let mut board = DispatchBoard::new(BoardConfig::default()).unwrap();

        assert_eq!(board.set_max_distance(0.2), 1.0);
        assert_eq!(board.set_max_distance(25.0), 20.0);
        assert_eq!(board.set_max_distance(12.5), 12.5);
        assert_eq!(board.criteria().max_distance, 12.5);
    }

    #[test]
    fn test_assign_remembers_outcome() {
        let mut board = DispatchBoard::new(BoardConfig::default_config()).unwrap();

        let first = board.assign().clone();
        assert_eq!(board.last_assignment(), Some(&first));
        assert_eq!(first.order().map(Order::dish), Some("Chicken Bucket"));
    }
}
