//! Order domain types: request items, enriched items, completed orders
//!
//! `OrderItemRequest` is what the client sends (productId + quantity).
//! `OrderItem` exists only after a successful catalog lookup and carries the
//! resolved name, unit price and rounded subtotal. `Order` is immutable once
//! created.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use super::error::OrderError;
use crate::catalog::Product;
use crate::money;
use crate::wire::{self, ObjectEncoder};

/// A single line of an incoming order request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderItemRequest {
    pub product_id: u32,
    pub quantity: u32,
}

impl OrderItemRequest {
    /// Parse one decoded wire object into a request item.
    ///
    /// Missing or non-integer fields and non-positive quantities are client
    /// faults, reported before any catalog call is made.
    pub fn from_wire(fields: &FxHashMap<String, String>) -> Result<Self, OrderError> {
        let product_id = fields
            .get("productId")
            .ok_or_else(|| OrderError::InvalidRequest("Missing productId".to_string()))?
            .parse::<u32>()
            .map_err(|_| OrderError::InvalidRequest("Invalid productId".to_string()))?;

        let quantity = fields
            .get("quantity")
            .ok_or_else(|| OrderError::InvalidRequest("Missing quantity".to_string()))?
            .parse::<u32>()
            .map_err(|_| OrderError::InvalidRequest("Invalid item quantity".to_string()))?;
        if quantity == 0 {
            return Err(OrderError::InvalidRequest(
                "Invalid item quantity".to_string(),
            ));
        }

        Ok(Self {
            product_id,
            quantity,
        })
    }
}

/// An order line after product resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub product_id: u32,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub subtotal: Decimal,
}

impl OrderItem {
    /// Enrich a request line with the resolved product.
    ///
    /// The subtotal is rounded per item; the order total re-rounds the sum of
    /// these already-rounded subtotals.
    pub fn enrich(request: OrderItemRequest, product: &Product) -> Self {
        let subtotal = money::round2(product.price * Decimal::from(request.quantity));
        Self {
            product_id: request.product_id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity: request.quantity,
            subtotal,
        }
    }

    fn to_wire(&self) -> String {
        ObjectEncoder::new()
            .uint("productId", u64::from(self.product_id))
            .string("name", &self.name)
            .amount("price", self.unit_price)
            .uint("quantity", u64::from(self.quantity))
            .amount("subtotal", self.subtotal)
            .finish()
    }
}

/// A completed order. `items` is never empty; `total` is the rounded sum of
/// the item subtotals at creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_id: String,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
}

impl Order {
    /// Encode for the wire:
    /// `{"orderId":"ORD-1","items":[...],"total":2074.97}`.
    pub fn to_wire(&self) -> String {
        let items = wire::encode_array(self.items.iter().map(|i| i.to_wire()));
        ObjectEncoder::new()
            .string("orderId", &self.order_id)
            .raw("items", &items)
            .amount("total", self.total)
            .finish()
    }
}
