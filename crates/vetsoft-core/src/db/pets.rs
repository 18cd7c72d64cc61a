//! Pet database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::Pet;

fn row_to_pet(row: &Row<'_>) -> rusqlite::Result<Pet> {
    Ok(Pet {
        id: row.get(0)?,
        name: row.get(1)?,
        breed: row.get(2)?,
        // TEXT column in ISO form; rusqlite's chrono feature does the parse.
        birthday: row.get(3)?,
    })
}

impl Database {
    /// Insert a new pet, returning the assigned row id.
    pub fn insert_pet(&self, pet: &Pet) -> DbResult<i64> {
        self.conn.execute(
            "INSERT INTO pets (name, breed, birthday) VALUES (?1, ?2, ?3)",
            params![pet.name, pet.breed, pet.birthday],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Update an existing pet. Returns false if no row matched.
    pub fn update_pet(&self, pet: &Pet) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            "UPDATE pets SET name = ?2, breed = ?3, birthday = ?4 WHERE id = ?1",
            params![pet.id, pet.name, pet.breed, pet.birthday],
        )?;
        Ok(rows_affected > 0)
    }

    /// Get a pet by id.
    pub fn get_pet(&self, id: i64) -> DbResult<Option<Pet>> {
        self.conn
            .query_row(
                "SELECT id, name, breed, birthday FROM pets WHERE id = ?",
                [id],
                row_to_pet,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all pets in insertion order.
    pub fn list_pets(&self) -> DbResult<Vec<Pet>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, breed, birthday FROM pets ORDER BY id")?;
        let rows = stmt.query_map([], row_to_pet)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Delete a pet. Returns false if no row matched.
    pub fn delete_pet(&self, id: i64) -> DbResult<bool> {
        let rows_affected = self.conn.execute("DELETE FROM pets WHERE id = ?", [id])?;
        Ok(rows_affected > 0)
    }
}
