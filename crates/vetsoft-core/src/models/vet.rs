//! Vet models.

use serde::{Deserialize, Serialize};

use super::Speciality;

/// A veterinarian working at the clinic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vet {
    /// Row id; 0 until the record is inserted.
    pub id: i64,
    /// Vet name (letters and whitespace only)
    pub name: String,
    /// Contact email
    pub email: String,
    /// Phone number, kept as submitted
    pub phone: String,
    /// Speciality
    pub speciality: Speciality,
}

impl Vet {
    /// Create a vet that has not been persisted yet.
    pub fn new(name: String, email: String, phone: String, speciality: Speciality) -> Self {
        Self {
            id: 0,
            name,
            email,
            phone,
            speciality,
        }
    }

    /// Whether this vet has been assigned a row id.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vet() {
        let vet = Vet::new(
            "Juan Sebastian Veron".into(),
            "brujita75@hotmail.com".into(),
            "54221555232".into(),
            Speciality::Urgencias,
        );
        assert_eq!(vet.speciality, Speciality::Urgencias);
        assert!(!vet.is_persisted());
    }
}
