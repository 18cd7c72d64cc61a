//! Pet models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A pet treated by the clinic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pet {
    /// Row id; 0 until the record is inserted.
    pub id: i64,
    /// Pet name (letters and whitespace only)
    pub name: String,
    /// Breed
    pub breed: String,
    /// Date of birth, strictly before the current date
    pub birthday: NaiveDate,
}

impl Pet {
    /// Create a pet that has not been persisted yet.
    pub fn new(name: String, breed: String, birthday: NaiveDate) -> Self {
        Self {
            id: 0,
            name,
            breed,
            birthday,
        }
    }

    /// Whether this pet has been assigned a row id.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}
