//! Nearest-eligible-order selection

use crate::core::order::Order;
use crate::core::store::OrderStore;
use serde::Serialize;
use std::fmt;

/// Whether an order may be dispatched under `max_distance`
///
/// Eligible means unpaid (cash on delivery) and no farther than the
/// threshold, inclusive.
pub fn is_eligible(order: &Order, max_distance: f64) -> bool {
    !order.is_paid() && order.delivery_distance() <= max_distance
}

/// Result of one selection pass
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Assignment {
    /// The nearest eligible order
    Assigned { order: Order },

    /// Nothing unpaid within range; an expected outcome, not a failure
    NoEligibleOrder { max_distance: f64 },
}

impl Assignment {
    pub fn is_success(&self) -> bool {
        matches!(self, Assignment::Assigned { .. })
    }

    /// The selected order, if any
    pub fn order(&self) -> Option<&Order> {
        match self {
            Assignment::Assigned { order } => Some(order),
            Assignment::NoEligibleOrder { .. } => None,
        }
    }

    /// Confirmation or error copy for the result box
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assignment::Assigned { order } => write!(
                f,
                "Assigned to Order #{} ({}) - {}km away!",
                order.id(),
                order.restaurant_name(),
                order.delivery_distance()
            ),
            Assignment::NoEligibleOrder { .. } => {
                write!(f, "No unpaid orders found in this range.")
            }
        }
    }
}

/// Picks the order to dispatch next
///
/// Stateless: every call recomputes from the orders it is given and nothing
/// is marked as assigned, so the same order keeps winning until the inputs
/// change.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignmentSelector;

impl AssignmentSelector {
    pub fn new() -> Self {
        Self
    }

    /// Select the nearest eligible order
    ///
    /// Eligible orders are sorted by distance with a stable sort, so equal
    /// distances keep their insertion order and the earliest one wins.
    pub fn select_best(&self, orders: &[Order], max_distance: f64) -> Assignment {
        let mut eligible: Vec<&Order> = orders
            .iter()
            .filter(|order| is_eligible(order, max_distance))
            .collect();

        if eligible.is_empty() {
            tracing::debug!(
                max_distance_km = max_distance,
                candidates = orders.len(),
                "No eligible order in range"
            );
            return Assignment::NoEligibleOrder { max_distance };
        }

        eligible.sort_by(|a, b| a.delivery_distance().total_cmp(&b.delivery_distance()));

        let best = eligible[0].clone();
        tracing::info!(
            order_id = %best.id(),
            distance_km = best.delivery_distance(),
            eligible = eligible.len(),
            "Order assigned"
        );

        Assignment::Assigned { order: best }
    }

    /// Select over everything a store holds
    pub fn select_from<S>(&self, store: &S, max_distance: f64) -> Assignment
    where
        S: OrderStore + ?Sized,
    {
        self.select_best(store.as_slice(), max_distance)
    }
}
