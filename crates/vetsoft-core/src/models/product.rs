//! Product models.

use serde::{Deserialize, Serialize};

/// A product sold by the clinic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Row id; 0 until the record is inserted.
    pub id: i64,
    /// Product name (letters and whitespace only)
    pub name: String,
    /// Product category, submitted as the form's "type" field
    pub kind: String,
    /// Unit price, strictly greater than zero
    pub price: f64,
}

impl Product {
    /// Create a product that has not been persisted yet.
    pub fn new(name: String, kind: String, price: f64) -> Self {
        Self {
            id: 0,
            name,
            kind,
            price,
        }
    }

    /// Whether this product has been assigned a row id.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}
