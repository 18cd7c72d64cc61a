//! Medicine database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::Medicine;

fn row_to_medicine(row: &Row<'_>) -> rusqlite::Result<Medicine> {
    Ok(Medicine {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        dose: row.get(3)?,
    })
}

impl Database {
    /// Insert a new medicine, returning the assigned row id.
    pub fn insert_medicine(&self, medicine: &Medicine) -> DbResult<i64> {
        self.conn.execute(
            "INSERT INTO medicines (name, description, dose) VALUES (?1, ?2, ?3)",
            params![medicine.name, medicine.description, medicine.dose],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Update an existing medicine. Returns false if no row matched.
    pub fn update_medicine(&self, medicine: &Medicine) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            "UPDATE medicines SET name = ?2, description = ?3, dose = ?4 WHERE id = ?1",
            params![medicine.id, medicine.name, medicine.description, medicine.dose],
        )?;
        Ok(rows_affected > 0)
    }

    /// Get a medicine by id.
    pub fn get_medicine(&self, id: i64) -> DbResult<Option<Medicine>> {
        self.conn
            .query_row(
                "SELECT id, name, description, dose FROM medicines WHERE id = ?",
                [id],
                row_to_medicine,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all medicines in insertion order.
    pub fn list_medicines(&self) -> DbResult<Vec<Medicine>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, description, dose FROM medicines ORDER BY id")?;
        let rows = stmt.query_map([], row_to_medicine)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Delete a medicine. Returns false if no row matched.
    pub fn delete_medicine(&self, id: i64) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM medicines WHERE id = ?", [id])?;
        Ok(rows_affected > 0)
    }
}
