//! Veterinary speciality enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Specialities a vet can hold. Closed set; forms render `choices()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Speciality {
    Oftalmologia,
    Quimioterapia,
    Radiologia,
    Ecocardiografias,
    Traumatologia,
    Ecografias,
    #[default]
    Urgencias,
}

impl Speciality {
    /// All specialities, in declaration order.
    pub const ALL: [Speciality; 7] = [
        Speciality::Oftalmologia,
        Speciality::Quimioterapia,
        Speciality::Radiologia,
        Speciality::Ecocardiografias,
        Speciality::Traumatologia,
        Speciality::Ecografias,
        Speciality::Urgencias,
    ];

    /// Stable key, used as the stored column value and the form value.
    pub fn key(&self) -> &'static str {
        match self {
            Speciality::Oftalmologia => "Oftalmologia",
            Speciality::Quimioterapia => "Quimioterapia",
            Speciality::Radiologia => "Radiologia",
            Speciality::Ecocardiografias => "Ecocardiografias",
            Speciality::Traumatologia => "Traumatologia",
            Speciality::Ecografias => "Ecografias",
            Speciality::Urgencias => "Urgencias",
        }
    }

    /// Human-readable label; for specialities the key is the label.
    pub fn label(&self) -> &'static str {
        self.key()
    }

    /// Look up a speciality by its stable key.
    pub fn from_key(key: &str) -> Option<Speciality> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    /// (key, label) pairs in declaration order, for select widgets.
    pub fn choices() -> Vec<(&'static str, &'static str)> {
        Self::ALL.iter().map(|s| (s.key(), s.label())).collect()
    }
}

impl fmt::Display for Speciality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
