//! Store trait for order collections

use crate::core::error::ValidationError;
use crate::core::order::{NewOrder, Order, OrderForm, OrderId};
use crate::core::query::OrderPredicate;

/// Owner of every stored order
///
/// Stores keep insertion order and hand out copies only. There is no update
/// or delete: once inserted, an order lives until the store is dropped.
pub trait OrderStore {
    /// Validate a candidate and append it with a fresh id
    ///
    /// On failure the store is left untouched and no id is consumed.
    fn insert(&mut self, candidate: NewOrder) -> Result<Order, ValidationError>;

    /// Get an order by id
    fn get(&self, id: OrderId) -> Option<Order>;

    /// Every order matching `predicate`, in insertion order
    fn query_filtered<P>(&self, predicate: &P) -> Vec<Order>
    where
        P: OrderPredicate + ?Sized;

    /// Read-only view over every stored order, in insertion order
    fn as_slice(&self) -> &[Order];

    /// Parse raw form fields, then insert
    fn insert_form(&mut self, form: &OrderForm) -> Result<Order, ValidationError> {
        let candidate = form.parse()?;
        self.insert(candidate)
    }

    /// Every stored order, in insertion order
    fn list(&self) -> Vec<Order> {
        self.as_slice().to_vec()
    }

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}
