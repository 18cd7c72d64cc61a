//! City enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Cities served by the clinic. Closed set; forms render `choices()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum City {
    #[default]
    LaPlata,
    Berisso,
    Ensenada,
}

impl City {
    /// All cities, in declaration order.
    pub const ALL: [City; 3] = [City::LaPlata, City::Berisso, City::Ensenada];

    /// Stable key, used as the stored column value and the form value.
    pub fn key(&self) -> &'static str {
        match self {
            City::LaPlata => "LaPlata",
            City::Berisso => "Berisso",
            City::Ensenada => "Ensenada",
        }
    }

    /// Human-readable label for rendering.
    pub fn label(&self) -> &'static str {
        match self {
            City::LaPlata => "La Plata",
            City::Berisso => "Berisso",
            City::Ensenada => "Ensenada",
        }
    }

    /// Look up a city by its stable key.
    pub fn from_key(key: &str) -> Option<City> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// (key, label) pairs in declaration order, for select widgets.
    pub fn choices() -> Vec<(&'static str, &'static str)> {
        Self::ALL.iter().map(|c| (c.key(), c.label())).collect()
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_la_plata() {
        assert_eq!(City::default(), City::LaPlata);
    }

    #[test]
    fn test_choices_in_declaration_order() {
        assert_eq!(
            City::choices(),
            vec![
                ("LaPlata", "La Plata"),
                ("Berisso", "Berisso"),
                ("Ensenada", "Ensenada"),
            ]
        );
    }

    #[test]
    fn test_from_key_round_trip() {
        for city in City::ALL {
            assert_eq!(City::from_key(city.key()), Some(city));
        }
        assert_eq!(City::from_key("Quilmes"), None);
        assert_eq!(City::from_key(""), None);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(City::LaPlata.to_string(), "La Plata");
    }
}
