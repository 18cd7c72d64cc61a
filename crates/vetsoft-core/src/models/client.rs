//! Client models.

use serde::{Deserialize, Serialize};

use super::City;

/// A clinic client (pet owner).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Client {
    /// Row id; 0 until the record is inserted.
    pub id: i64,
    /// Client name (letters and whitespace only)
    pub name: String,
    /// Phone number, kept as the digit string the form submitted
    pub phone: String,
    /// Email address on the clinic domain
    pub email: String,
    /// City of residence
    pub city: City,
}

impl Client {
    /// Create a client that has not been persisted yet.
    pub fn new(name: String, phone: String, email: String, city: City) -> Self {
        Self {
            id: 0,
            name,
            phone,
            email,
            city,
        }
    }

    /// Whether this client has been assigned a row id.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}
