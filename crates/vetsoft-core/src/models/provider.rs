//! Provider models.

use serde::{Deserialize, Serialize};

use super::City;

/// A supplier of medicines and products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Provider {
    /// Row id; 0 until the record is inserted.
    pub id: i64,
    /// Provider name (letters and whitespace only)
    pub name: String,
    /// Contact email
    pub email: String,
    /// City the provider operates from
    pub city: City,
}

impl Provider {
    /// Create a provider that has not been persisted yet.
    pub fn new(name: String, email: String, city: City) -> Self {
        Self {
            id: 0,
            name,
            email,
            city,
        }
    }

    /// Whether this provider has been assigned a row id.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_provider() {
        let provider = Provider::new(
            "Farmacity".into(),
            "ventas@farmacity.com".into(),
            City::Berisso,
        );
        assert_eq!(provider.name, "Farmacity");
        assert_eq!(provider.city, City::Berisso);
        assert!(!provider.is_persisted());
    }
}
