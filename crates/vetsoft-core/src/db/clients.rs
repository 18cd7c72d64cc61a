//! Client database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::{City, Client};

fn row_to_client(row: &Row<'_>) -> rusqlite::Result<Client> {
    let city: String = row.get(4)?;
    Ok(Client {
        id: row.get(0)?,
        name: row.get(1)?,
        phone: row.get(2)?,
        email: row.get(3)?,
        // Unknown text in the column falls back to the default city.
        city: City::from_key(&city).unwrap_or_default(),
    })
}

impl Database {
    /// Insert a new client, returning the assigned row id.
    pub fn insert_client(&self, client: &Client) -> DbResult<i64> {
        self.conn.execute(
            "INSERT INTO clients (name, phone, email, city) VALUES (?1, ?2, ?3, ?4)",
            params![client.name, client.phone, client.email, client.city.key()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Update an existing client. Returns false if no row matched.
    pub fn update_client(&self, client: &Client) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            "UPDATE clients SET name = ?2, phone = ?3, email = ?4, city = ?5 WHERE id = ?1",
            params![
                client.id,
                client.name,
                client.phone,
                client.email,
                client.city.key(),
            ],
        )?;
        Ok(rows_affected > 0)
    }

    /// Get a client by id.
    pub fn get_client(&self, id: i64) -> DbResult<Option<Client>> {
        self.conn
            .query_row(
                "SELECT id, name, phone, email, city FROM clients WHERE id = ?",
                [id],
                row_to_client,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all clients in insertion order.
    pub fn list_clients(&self) -> DbResult<Vec<Client>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, phone, email, city FROM clients ORDER BY id")?;
        let rows = stmt.query_map([], row_to_client)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Delete a client. Returns false if no row matched.
    pub fn delete_client(&self, id: i64) -> DbResult<bool> {
        let rows_affected = self.conn.execute("DELETE FROM clients WHERE id = ?", [id])?;
        Ok(rows_affected > 0)
    }
}
