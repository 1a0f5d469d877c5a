//! Thread-safe in-memory order storage and id allocation
//!
//! Ids are `ORD-N` with N from a shared atomic counter starting at 1, so
//! concurrent creations never collide and issuance order is strictly
//! increasing. The map is insert-only; orders are never mutated or deleted.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use super::types::Order;

pub struct OrderStore {
    orders: DashMap<String, Order>,
    order_id_gen: AtomicU64,
}

impl OrderStore {
    pub fn new() -> Self {
        Self {
            orders: DashMap::new(),
            order_id_gen: AtomicU64::new(1),
        }
    }

    /// Allocate the next order identifier.
    pub fn next_order_id(&self) -> String {
        format!("ORD-{}", self.order_id_gen.fetch_add(1, Ordering::SeqCst))
    }

    /// Persist a completed order. Ids come from `next_order_id` and are never
    /// reused, so this never overwrites.
    pub fn insert(&self, order: Order) {
        self.orders.insert(order.order_id.clone(), order);
    }

    pub fn get(&self, order_id: &str) -> Option<Order> {
        self.orders.get(order_id).map(|entry| entry.value().clone())
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn ids_start_at_one_and_increase() {
        let store = OrderStore::new();
        assert_eq!(store.next_order_id(), "ORD-1");
        assert_eq!(store.next_order_id(), "ORD-2");
        assert_eq!(store.next_order_id(), "ORD-3");
    }

    #[test]
    fn concurrent_ids_are_pairwise_distinct() {
        let store = Arc::new(OrderStore::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            handles.push(std::thread::spawn(move || {
                (0..100).map(|_| store.next_order_id()).collect::<Vec<_>>()
            }));
        }

        let mut all: Vec<String> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        let issued = all.len();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), issued, "no id may be issued twice");
    }

    #[test]
    fn get_unknown_id_is_none() {
        let store = OrderStore::new();
        assert!(store.get("ORD-1").is_none());
        assert!(store.get("nonsense").is_none());
    }
}
