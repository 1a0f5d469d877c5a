//! Order aggregator - validation, enrichment, totals, persistence
//!
//! The create pipeline is all-or-nothing: items are resolved strictly in
//! request order, and any lookup failure aborts the whole operation before
//! anything is persisted.

use std::sync::Arc;

use rust_decimal::Decimal;

use super::client::ProductLookup;
use super::error::OrderError;
use super::store::OrderStore;
use super::types::{Order, OrderItem, OrderItemRequest};
use crate::money;

pub struct OrderService {
    lookup: Arc<dyn ProductLookup>,
    store: OrderStore,
}

impl OrderService {
    pub fn new(lookup: Arc<dyn ProductLookup>) -> Self {
        Self {
            lookup,
            store: OrderStore::new(),
        }
    }

    /// Create an order from request items.
    ///
    /// Each subtotal is rounded individually, then the sum of the rounded
    /// subtotals is rounded again for the total. Intentional: summing
    /// unrounded subtotals can differ from this by a cent.
    pub async fn create_order(&self, items: &[OrderItemRequest]) -> Result<Order, OrderError> {
        if items.is_empty() {
            return Err(OrderError::InvalidRequest(
                "Order must contain at least one item".to_string(),
            ));
        }

        let mut enriched = Vec::with_capacity(items.len());
        for item in items {
            let product = self.lookup.lookup(item.product_id).await?;
            enriched.push(OrderItem::enrich(*item, &product));
        }

        let total = money::round2(enriched.iter().map(|i| i.subtotal).sum::<Decimal>());
        let order_id = self.store.next_order_id();
        let order = Order {
            order_id,
            items: enriched,
            total,
        };
        self.store.insert(order.clone());
        tracing::info!(
            order_id = %order.order_id,
            items = order.items.len(),
            total = %order.total,
            "order created"
        );
        Ok(order)
    }

    /// Pure lookup, no side effects.
    pub fn get_order(&self, order_id: &str) -> Option<Order> {
        self.store.get(order_id)
    }
}
