//! Vet gateway.

use crate::db::{Database, DbError, DbResult};
use crate::models::{Speciality, Vet};
use crate::validation::{field, validate_vet, FieldMap};

use super::{or_keep, Outcome};

/// Create, update, and delete vets behind the vet validator.
pub struct VetGateway<'a> {
    db: &'a Database,
}

impl<'a> VetGateway<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Validate the raw form fields and insert a new vet.
    pub fn create(&self, data: &FieldMap) -> DbResult<Outcome<Vet>> {
        let errors = validate_vet(data);
        if !errors.is_empty() {
            tracing::debug!(fields = errors.len(), "vet create rejected");
            return Ok(Outcome::Rejected(errors));
        }

        let mut vet = Vet::new(
            field(data, "name").to_string(),
            field(data, "email").to_string(),
            field(data, "phone").to_string(),
            Speciality::from_key(field(data, "speciality")).unwrap_or_default(),
        );
        vet.id = self.db.insert_vet(&vet)?;
        tracing::debug!(id = vet.id, "vet created");
        Ok(Outcome::Saved(vet))
    }

    /// Validate the raw form fields and apply them to a stored vet.
    pub fn update(&self, current: &Vet, data: &FieldMap) -> DbResult<Outcome<Vet>> {
        let errors = validate_vet(data);
        if !errors.is_empty() {
            tracing::debug!(id = current.id, fields = errors.len(), "vet update rejected");
            return Ok(Outcome::Rejected(errors));
        }

        let merged = Vet {
            id: current.id,
            name: or_keep(field(data, "name"), &current.name),
            email: or_keep(field(data, "email"), &current.email),
            phone: or_keep(field(data, "phone"), &current.phone),
            speciality: match field(data, "speciality") {
                "" => current.speciality,
                key => Speciality::from_key(key).unwrap_or_default(),
            },
        };

        if !self.db.update_vet(&merged)? {
            return Err(DbError::NotFound(format!("vet {}", current.id)));
        }
        tracing::debug!(id = merged.id, "vet updated");
        Ok(Outcome::Saved(merged))
    }

    /// Look up a vet by id.
    pub fn get(&self, id: i64) -> DbResult<Option<Vet>> {
        self.db.get_vet(id)
    }

    /// List all vets.
    pub fn list(&self) -> DbResult<Vec<Vet>> {
        self.db.list_vets()
    }

    /// Delete a vet by id. Returns false if it did not exist.
    pub fn delete(&self, id: i64) -> DbResult<bool> {
        let deleted = self.db.delete_vet(id)?;
        if deleted {
            tracing::debug!(id, "vet deleted");
        }
        Ok(deleted)
    }
}
