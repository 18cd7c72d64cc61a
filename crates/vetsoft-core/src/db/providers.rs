//! Provider database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::{City, Provider};

fn row_to_provider(row: &Row<'_>) -> rusqlite::Result<Provider> {
    let city: String = row.get(3)?;
    Ok(Provider {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        city: City::from_key(&city).unwrap_or_default(),
    })
}

impl Database {
    /// Insert a new provider, returning the assigned row id.
    pub fn insert_provider(&self, provider: &Provider) -> DbResult<i64> {
        self.conn.execute(
            "INSERT INTO providers (name, email, city) VALUES (?1, ?2, ?3)",
            params![provider.name, provider.email, provider.city.key()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Update an existing provider. Returns false if no row matched.
    pub fn update_provider(&self, provider: &Provider) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            "UPDATE providers SET name = ?2, email = ?3, city = ?4 WHERE id = ?1",
            params![provider.id, provider.name, provider.email, provider.city.key()],
        )?;
        Ok(rows_affected > 0)
    }

    /// Get a provider by id.
    pub fn get_provider(&self, id: i64) -> DbResult<Option<Provider>> {
        self.conn
            .query_row(
                "SELECT id, name, email, city FROM providers WHERE id = ?",
                [id],
                row_to_provider,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all providers in insertion order.
    pub fn list_providers(&self) -> DbResult<Vec<Provider>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, email, city FROM providers ORDER BY id")?;
        let rows = stmt.query_map([], row_to_provider)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Delete a provider. Returns false if no row matched.
    pub fn delete_provider(&self, id: i64) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM providers WHERE id = ?", [id])?;
        Ok(rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_db() -> Database {
        Database::open_in_memory().unwrap()
    }

    #[test]
    fn test_insert_get_update_delete() {
        let db = setup_db();

        let mut provider =
            Provider::new("Farmacity".into(), "ventas@farmacity.com".into(), City::Berisso);
        provider.id = db.insert_provider(&provider).unwrap();

        let retrieved = db.get_provider(provider.id).unwrap().unwrap();
        assert_eq!(retrieved, provider);

        provider.email = "compras@farmacity.com".into();
        assert!(db.update_provider(&provider).unwrap());
        let retrieved = db.get_provider(provider.id).unwrap().unwrap();
        assert_eq!(retrieved.email, "compras@farmacity.com");

        assert!(db.delete_provider(provider.id).unwrap());
        assert!(db.get_provider(provider.id).unwrap().is_none());
    }

    #[test]
    fn test_list_providers() {
        let db = setup_db();
        assert!(db.list_providers().unwrap().is_empty());

        let provider =
            Provider::new("Farmacity".into(), "ventas@farmacity.com".into(), City::LaPlata);
        db.insert_provider(&provider).unwrap();
        assert_eq!(db.list_providers().unwrap().len(), 1);
    }
}
