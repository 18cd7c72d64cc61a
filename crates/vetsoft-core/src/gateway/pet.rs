//! Pet gateway.

use chrono::NaiveDate;

use crate::db::{Database, DbError, DbResult};
use crate::models::Pet;
use crate::validation::{field, validate_pet, FieldMap, BIRTHDAY_FORMAT};

use super::{or_keep, Outcome};

/// Create, update, and delete pets behind the pet validator.
pub struct PetGateway<'a> {
    db: &'a Database,
}

impl<'a> PetGateway<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Validate the raw form fields and insert a new pet.
    pub fn create(&self, data: &FieldMap) -> DbResult<Outcome<Pet>> {
        let errors = validate_pet(data);
        if !errors.is_empty() {
            tracing::debug!(fields = errors.len(), "pet create rejected");
            return Ok(Outcome::Rejected(errors));
        }

        let mut pet = Pet::new(
            field(data, "name").to_string(),
            field(data, "breed").to_string(),
            parse_birthday(field(data, "birthday"))?,
        );
        pet.id = self.db.insert_pet(&pet)?;
        tracing::debug!(id = pet.id, "pet created");
        Ok(Outcome::Saved(pet))
    }

    /// Validate the raw form fields and apply them to a stored pet.
    pub fn update(&self, current: &Pet, data: &FieldMap) -> DbResult<Outcome<Pet>> {
        let errors = validate_pet(data);
        if !errors.is_empty() {
            tracing::debug!(id = current.id, fields = errors.len(), "pet update rejected");
            return Ok(Outcome::Rejected(errors));
        }

        let merged = Pet {
            id: current.id,
            name: or_keep(field(data, "name"), &current.name),
            breed: or_keep(field(data, "breed"), &current.breed),
            birthday: match field(data, "birthday") {
                "" => current.birthday,
                raw => parse_birthday(raw)?,
            },
        };

        if !self.db.update_pet(&merged)? {
            return Err(DbError::NotFound(format!("pet {}", current.id)));
        }
        tracing::debug!(id = merged.id, "pet updated");
        Ok(Outcome::Saved(merged))
    }

    /// Look up a pet by id.
    pub fn get(&self, id: i64) -> DbResult<Option<Pet>> {
        self.db.get_pet(id)
    }

    /// List all pets.
    pub fn list(&self) -> DbResult<Vec<Pet>> {
        self.db.list_pets()
    }

    /// Delete a pet by id. Returns false if it did not exist.
    pub fn delete(&self, id: i64) -> DbResult<bool> {
        let deleted = self.db.delete_pet(id)?;
        if deleted {
            tracing::debug!(id, "pet deleted");
        }
        Ok(deleted)
    }
}

// Unreachable after a passing validation; kept as an error rather than a
// panic per the fatal-propagation policy.
fn parse_birthday(raw: &str) -> DbResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
        .map_err(|_| DbError::Constraint(format!("birthday is not a valid date: {raw}")))
}
