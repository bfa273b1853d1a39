//! Query predicates and the visible-list result

use crate::core::order::Order;
use serde::{Deserialize, Serialize};

/// A read-only test over a stored order
///
/// Implemented for every `Fn(&Order) -> bool`, so closures and
/// [`VisibilityFilter`] are interchangeable wherever a store is queried.
pub trait OrderPredicate {
    fn matches(&self, order: &Order) -> bool;
}

impl<F> OrderPredicate for F
where
    F: Fn(&Order) -> bool,
{
    fn matches(&self, order: &Order) -> bool {
        self(order)
    }
}

/// Display-only payment-status filter
///
/// It decides what the order list shows and never affects which orders are
/// eligible for assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VisibilityFilter {
    pub show_paid: bool,
    pub show_unpaid: bool,
}

impl Default for VisibilityFilter {
    fn default() -> Self {
        Self {
            show_paid: true,
            show_unpaid: true,
        }
    }
}

impl VisibilityFilter {
    pub fn new(show_paid: bool, show_unpaid: bool) -> Self {
        Self {
            show_paid,
            show_unpaid,
        }
    }

    /// Whether at least one payment status is shown
    pub fn shows_anything(&self) -> bool {
        self.show_paid || self.show_unpaid
    }
}

impl OrderPredicate for VisibilityFilter {
    fn matches(&self, order: &Order) -> bool {
        (order.is_paid() && self.show_paid) || (!order.is_paid() && self.show_unpaid)
    }
}

/// Why a visible list came back empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyReason {
    /// Nothing has been stored
    StoreEmpty,
    /// Orders exist but the filter hides all of them
    AllHidden,
}

impl EmptyReason {
    /// Copy shown in place of the list
    pub fn message(&self) -> &'static str {
        match self {
            EmptyReason::StoreEmpty => "No orders found",
            EmptyReason::AllHidden => "All orders are hidden by the current filter",
        }
    }
}

/// Orders passing the visibility filter, plus the store size they came from
#[derive(Debug, Clone, Serialize)]
pub struct VisibleOrders {
    /// Matching orders in insertion order
    pub orders: Vec<Order>,

    /// Number of orders in the store, visible or not
    pub total: usize,
}

impl VisibleOrders {
    pub fn new(orders: Vec<Order>, total: usize) -> Self {
        Self { orders, total }
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// `None` while at least one order is visible
    pub fn empty_reason(&self) -> Option<EmptyReason> {
        if !self.orders.is_empty() {
            None
        } else if self.total == 0 {
            Some(EmptyReason::StoreEmpty)
        } else {
            Some(EmptyReason::AllHidden)
        }
    }

    /// Number of orders the filter is currently hiding
    pub fn hidden(&self) -> usize {
        self.total.saturating_sub(self.orders.len())
    }
}
