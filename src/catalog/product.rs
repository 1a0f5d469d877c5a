//! Product type and its wire representation

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use crate::money;
use crate::wire::ObjectEncoder;

/// A catalog product. Immutable after creation; identity is `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: Decimal,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// Encode as a flat wire object: `{"id":1,"name":"Laptop","price":999.99}`.
    pub fn to_wire(&self) -> String {
        ObjectEncoder::new()
            .uint("id", u64::from(self.id))
            .string("name", &self.name)
            .amount("price", self.price)
            .finish()
    }

    /// Rebuild a product from a decoded wire object.
    ///
    /// Used by the order side after a catalog lookup; a missing or unparsable
    /// field means the response was not a product.
    pub fn from_wire(fields: &FxHashMap<String, String>) -> Result<Self, String> {
        let id = fields
            .get("id")
            .ok_or("missing field: id")?
            .parse::<u32>()
            .map_err(|_| "invalid field: id".to_string())?;
        let name = fields.get("name").ok_or("missing field: name")?.clone();
        let price = money::parse_amount(fields.get("price").ok_or("missing field: price")?)
            .map_err(|e| format!("invalid field: price ({})", e))?;
        Ok(Self { id, name, price })
    }
}
