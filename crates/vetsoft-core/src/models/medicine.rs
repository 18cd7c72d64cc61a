//! Medicine models.

use serde::{Deserialize, Serialize};

/// A medicine the clinic stocks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medicine {
    /// Row id; 0 until the record is inserted.
    pub id: i64,
    /// Medicine name (letters and whitespace only)
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Dose, an integer between 1 and 10 inclusive
    pub dose: i64,
}

impl Medicine {
    /// Create a medicine that has not been persisted yet.
    pub fn new(name: String, description: String, dose: i64) -> Self {
        Self {
            id: 0,
            name,
            description,
            dose,
        }
    }

    /// Whether this medicine has been assigned a row id.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}
