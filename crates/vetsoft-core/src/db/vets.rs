//! Vet database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::{Speciality, Vet};

fn row_to_vet(row: &Row<'_>) -> rusqlite::Result<Vet> {
    let speciality: String = row.get(4)?;
    Ok(Vet {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        speciality: Speciality::from_key(&speciality).unwrap_or_default(),
    })
}

impl Database {
    /// Insert a new vet, returning the assigned row id.
    pub fn insert_vet(&self, vet: &Vet) -> DbResult<i64> {
        self.conn.execute(
            "INSERT INTO vets (name, email, phone, speciality) VALUES (?1, ?2, ?3, ?4)",
            params![vet.name, vet.email, vet.phone, vet.speciality.key()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Update an existing vet. Returns false if no row matched.
    pub fn update_vet(&self, vet: &Vet) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            "UPDATE vets SET name = ?2, email = ?3, phone = ?4, speciality = ?5 WHERE id = ?1",
            params![vet.id, vet.name, vet.email, vet.phone, vet.speciality.key()],
        )?;
        Ok(rows_affected > 0)
    }

    /// Get a vet by id.
    pub fn get_vet(&self, id: i64) -> DbResult<Option<Vet>> {
        self.conn
            .query_row(
                "SELECT id, name, email, phone, speciality FROM vets WHERE id = ?",
                [id],
                row_to_vet,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all vets in insertion order.
    pub fn list_vets(&self) -> DbResult<Vec<Vet>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, email, phone, speciality FROM vets ORDER BY id")?;
        let rows = stmt.query_map([], row_to_vet)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Delete a vet. Returns false if no row matched.
    pub fn delete_vet(&self, id: i64) -> DbResult<bool> {
        let rows_affected = self.conn.execute("DELETE FROM vets WHERE id = ?", [id])?;
        Ok(rows_affected > 0)
    }
}
