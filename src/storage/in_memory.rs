//! In-memory implementation of OrderStore

use crate::core::error::ValidationError;
use crate::core::order::{NewOrder, Order, OrderId};
use crate::core::query::OrderPredicate;
use crate::core::store::OrderStore;
use crate::core::validation::ValidatedOrder;

/// Id handed to the first order when no other start is configured
pub const DEFAULT_FIRST_ID: u64 = 101;

/// In-memory order store
///
/// Orders live in a `Vec` in insertion order; ids come from a counter that
/// only moves forward, so two orders never share an id even when they are
/// created in the same instant.
#[derive(Debug, Clone)]
pub struct InMemoryOrderStore {
    orders: Vec<Order>,
    next_id: u64,
}

impl InMemoryOrderStore {
    /// Create an empty store whose first order gets [`DEFAULT_FIRST_ID`]
    pub fn new() -> Self {
        Self::starting_at(DEFAULT_FIRST_ID)
    }

    /// Create an empty store whose first order gets `first_id`
    pub fn starting_at(first_id: u64) -> Self {
        Self {
            orders: Vec::new(),
            next_id: first_id,
        }
    }

    /// Id the next successful insert will receive
    pub fn peek_next_id(&self) -> OrderId {
        OrderId::new(self.next_id)
    }

    fn allocate_id(&mut self) -> Result<OrderId, ValidationError> {
        let id = OrderId::new(self.next_id);
        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or_else(|| ValidationError::FieldError {
                field: "id".to_string(),
                message: "order id space exhausted".to_string(),
            })?;
        Ok(id)
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderStore for InMemoryOrderStore {
    fn insert(&mut self, candidate: NewOrder) -> Result<Order, ValidationError> {
        let validated = match ValidatedOrder::validate(candidate) {
            Ok(validated) => validated,
            Err(err) => {
                tracing::warn!(fields = ?err.fields(), "Rejected order: {}", err);
                return Err(err);
            }
        };

        let id = self.allocate_id()?;
        let order = Order::from_validated(id, validated);

        tracing::debug!(
            order_id = %order.id(),
            distance_km = order.delivery_distance(),
            paid = order.is_paid(),
            "Order stored"
        );

        self.orders.push(order.clone());
        Ok(order)
    }

    fn get(&self, id: OrderId) -> Option<Order> {
        self.orders.iter().find(|order| order.id() == id).cloned()
    }

    fn query_filtered<P>(&self, predicate: &P) -> Vec<Order>
    where
        P: OrderPredicate + ?Sized,
    {
        self.orders
            .iter()
            .filter(|order| predicate.matches(order))
            .cloned()
            .collect()
    }

    fn as_slice(&self) -> &[Order] {
        &self.orders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::order::{OrderForm, PaymentStatus, fields};
    use crate::core::query::VisibilityFilter;

    fn candidate(dish: &str, distance: f64, paid: bool) -> NewOrder {
        NewOrder::new("Burger King", dish, 1, distance, PaymentStatus::from(paid))
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let mut store = InMemoryOrderStore::new();

        let a = store.insert(candidate("Whopper Burger", 3.5, false)).unwrap();
        let b = store.insert(candidate("Farmhouse Pizza", 8.0, true)).unwrap();

        assert_eq!(a.id(), OrderId::new(101));
        assert_eq!(b.id(), OrderId::new(102));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_rejected_insert_does_not_consume_id() {
        let mut store = InMemoryOrderStore::starting_at(1);

        assert!(store.insert(candidate("", 1.0, false)).is_err());
        assert_eq!(store.peek_next_id(), OrderId::new(1));
        assert!(store.is_empty());

        let stored = store.insert(candidate("Fries", 1.0, false)).unwrap();
        assert_eq!(stored.id(), OrderId::new(1));
    }

    #[test]
    fn test_exhausted_id_space_is_reported() {
        let mut store = InMemoryOrderStore::starting_at(u64::MAX);

        let err = store.insert(candidate("Fries", 1.0, false)).unwrap_err();
        assert!(err.has_field("id"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_get_returns_copy() {
        let mut store = InMemoryOrderStore::new();
        let stored = store.insert(candidate("Fries", 1.0, false)).unwrap();

        assert_eq!(store.get(stored.id()), Some(stored));
        assert_eq!(store.get(OrderId::new(9_999)), None);
    }

    #[test]
    fn test_query_filtered_with_closure() {
        let mut store = InMemoryOrderStore::new();
        store.insert(candidate("Near", 1.0, false)).unwrap();
        store.insert(candidate("Far", 9.0, false)).unwrap();

        let near = store.query_filtered(&|order: &Order| order.delivery_distance() < 5.0);
        assert_eq!(near.len(), 1);
        assert_eq!(near[0].dish(), "Near");
    }

    #[test]
    fn test_query_filtered_with_visibility_filter() {
        let mut store = InMemoryOrderStore::new();
        store.insert(candidate("Paid", 1.0, true)).unwrap();
        store.insert(candidate("Unpaid", 1.0, false)).unwrap();

        let hidden = store.query_filtered(&VisibilityFilter::new(false, false));
        assert!(hidden.is_empty());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_insert_form_rejects_unparseable_fields() {
        let mut store = InMemoryOrderStore::new();
        let form = OrderForm {
            restaurant: "KFC".to_string(),
            dish: "Wings".to_string(),
            items: "lots".to_string(),
            distance: "2".to_string(),
            is_paid: "false".to_string(),
        };

        let err = store.insert_form(&form).unwrap_err();
        assert!(err.has_field(fields::ITEM_COUNT));
        assert!(store.is_empty());
    }
}
