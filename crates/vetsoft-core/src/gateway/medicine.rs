//! Medicine gateway.

use crate::db::{Database, DbError, DbResult};
use crate::models::Medicine;
use crate::validation::{field, validate_medicine, FieldMap};

use super::{or_keep, Outcome};

/// Create, update, and delete medicines behind the medicine validator.
pub struct MedicineGateway<'a> {
    db: &'a Database,
}

impl<'a> MedicineGateway<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Validate the raw form fields and insert a new medicine.
    pub fn create(&self, data: &FieldMap) -> DbResult<Outcome<Medicine>> {
        let errors = validate_medicine(data);
        if !errors.is_empty() {
            tracing::debug!(fields = errors.len(), "medicine create rejected");
            return Ok(Outcome::Rejected(errors));
        }

        let mut medicine = Medicine::new(
            field(data, "name").to_string(),
            field(data, "description").to_string(),
            parse_dose(field(data, "dose"))?,
        );
        medicine.id = self.db.insert_medicine(&medicine)?;
        tracing::debug!(id = medicine.id, "medicine created");
        Ok(Outcome::Saved(medicine))
    }

    /// Validate the raw form fields and apply them to a stored medicine.
    pub fn update(&self, current: &Medicine, data: &FieldMap) -> DbResult<Outcome<Medicine>> {
        let errors = validate_medicine(data);
        if !errors.is_empty() {
            tracing::debug!(id = current.id, fields = errors.len(), "medicine update rejected");
            return Ok(Outcome::Rejected(errors));
        }

        let merged = Medicine {
            id: current.id,
            name: or_keep(field(data, "name"), &current.name),
            description: or_keep(field(data, "description"), &current.description),
            dose: match field(data, "dose") {
                "" => current.dose,
                raw => parse_dose(raw)?,
            },
        };

        if !self.db.update_medicine(&merged)? {
            return Err(DbError::NotFound(format!("medicine {}", current.id)));
        }
        tracing::debug!(id = merged.id, "medicine updated");
        Ok(Outcome::Saved(merged))
    }

    /// Look up a medicine by id.
    pub fn get(&self, id: i64) -> DbResult<Option<Medicine>> {
        self.db.get_medicine(id)
    }

    /// List all medicines.
    pub fn list(&self) -> DbResult<Vec<Medicine>> {
        self.db.list_medicines()
    }

    /// Delete a medicine by id. Returns false if it did not exist.
    pub fn delete(&self, id: i64) -> DbResult<bool> {
        let deleted = self.db.delete_medicine(id)?;
        if deleted {
            tracing::debug!(id, "medicine deleted");
        }
        Ok(deleted)
    }
}

// The validator has already proved the dose shape; a failure here means the
// gateway was called around it.
fn parse_dose(raw: &str) -> DbResult<i64> {
    raw.parse()
        .map_err(|_| DbError::Constraint(format!("dose is not an integer: {raw}")))
}
