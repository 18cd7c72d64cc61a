//! Entity gateways: the validate-before-write layer.
//!
//! Each gateway borrows the [`Database`](crate::db::Database) and wraps one
//! entity's validator around its persistence operations. `create` and
//! `update` never touch the store when validation fails; `update` merges the
//! incoming map over the stored record field by field, keeping the old value
//! wherever the new one is blank or absent.
//!
//! Note the contract quirk: `update` validates the raw map *as given*, so a
//! partial map fails validation on the fields the caller left out even
//! though the merge would have kept them. Callers must resubmit the full
//! field set.

mod client;
mod medicine;
mod pet;
mod product;
mod provider;
mod vet;

pub use client::ClientGateway;
pub use medicine::MedicineGateway;
pub use pet::PetGateway;
pub use product::ProductGateway;
pub use provider::ProviderGateway;
pub use vet::VetGateway;

use crate::validation::Errors;

/// Result of a create or update attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// Validation passed and the record was written.
    Saved(T),
    /// Validation failed; nothing was written.
    Rejected(Errors),
}

impl<T> Outcome<T> {
    /// Whether the write happened.
    pub fn is_saved(&self) -> bool {
        matches!(self, Outcome::Saved(_))
    }

    /// The validation errors, if the input was rejected.
    pub fn errors(&self) -> Option<&Errors> {
        match self {
            Outcome::Saved(_) => None,
            Outcome::Rejected(errors) => Some(errors),
        }
    }

    /// The saved record, if the write happened.
    pub fn into_saved(self) -> Option<T> {
        match self {
            Outcome::Saved(value) => Some(value),
            Outcome::Rejected(_) => None,
        }
    }
}

/// Fallback-retain merge for one text field: a blank incoming value keeps
/// the stored one.
pub(crate) fn or_keep(new: &str, old: &str) -> String {
    if new.is_empty() {
        old.to_string()
    } else {
        new.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_keep() {
        assert_eq!(or_keep("nuevo", "viejo"), "nuevo");
        assert_eq!(or_keep("", "viejo"), "viejo");
    }

    #[test]
    fn test_outcome_accessors() {
        let saved: Outcome<i64> = Outcome::Saved(1);
        assert!(saved.is_saved());
        assert!(saved.errors().is_none());
        assert_eq!(saved.into_saved(), Some(1));

        let mut errors = Errors::new();
        errors.insert("name", "Por favor ingrese un nombre");
        let rejected: Outcome<i64> = Outcome::Rejected(errors);
        assert!(!rejected.is_saved());
        assert_eq!(rejected.errors().map(|e| e.len()), Some(1));
        assert_eq!(rejected.into_saved(), None);
    }
}
