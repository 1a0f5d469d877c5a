//! In-memory product store, pre-loaded with the catalog
//!
//! Read-only after startup; safe to share across request workers behind an
//! `Arc` without further synchronization.

use rust_decimal::Decimal;

use super::product::Product;

pub struct ProductRepository {
    products: Vec<Product>,
}

impl ProductRepository {
    /// The fixed startup catalog.
    pub fn seeded() -> Self {
        Self {
            products: vec![
                Product::new(1, "Laptop", Decimal::new(99999, 2)),
                Product::new(2, "Mouse", Decimal::new(2499, 2)),
                Product::new(3, "Keyboard", Decimal::new(7499, 2)),
                Product::new(4, "Monitor", Decimal::new(34999, 2)),
                Product::new(5, "Headphones", Decimal::new(14999, 2)),
            ],
        }
    }

    /// All products in insertion order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}
