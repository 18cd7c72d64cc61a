//! Client gateway.

use crate::db::{Database, DbError, DbResult};
use crate::models::{City, Client};
use crate::validation::{field, validate_client, FieldMap};

use super::{or_keep, Outcome};

/// Create, update, and delete clients behind the client validator.
pub struct ClientGateway<'a> {
    db: &'a Database,
}

impl<'a> ClientGateway<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Validate the raw form fields and insert a new client.
    pub fn create(&self, data: &FieldMap) -> DbResult<Outcome<Client>> {
        let errors = validate_client(data);
        if !errors.is_empty() {
            tracing::debug!(fields = errors.len(), "client create rejected");
            return Ok(Outcome::Rejected(errors));
        }

        let mut client = Client::new(
            field(data, "name").to_string(),
            field(data, "phone").to_string(),
            field(data, "email").to_string(),
            City::from_key(field(data, "city")).unwrap_or_default(),
        );
        client.id = self.db.insert_client(&client)?;
        tracing::debug!(id = client.id, "client created");
        Ok(Outcome::Saved(client))
    }

    /// Validate the raw form fields and apply them to a stored client.
    ///
    /// The map is validated as given, before any merging; on failure the
    /// stored record is untouched. On success, blank fields keep their
    /// stored values.
    pub fn update(&self, current: &Client, data: &FieldMap) -> DbResult<Outcome<Client>> {
        let errors = validate_client(data);
        if !errors.is_empty() {
            tracing::debug!(id = current.id, fields = errors.len(), "client update rejected");
            return Ok(Outcome::Rejected(errors));
        }

        let merged = Client {
            id: current.id,
            name: or_keep(field(data, "name"), &current.name),
            phone: or_keep(field(data, "phone"), &current.phone),
            email: or_keep(field(data, "email"), &current.email),
            city: match field(data, "city") {
                "" => current.city,
                key => City::from_key(key).unwrap_or_default(),
            },
        };

        if !self.db.update_client(&merged)? {
            return Err(DbError::NotFound(format!("client {}", current.id)));
        }
        tracing::debug!(id = merged.id, "client updated");
        Ok(Outcome::Saved(merged))
    }

    /// Look up a client by id.
    pub fn get(&self, id: i64) -> DbResult<Option<Client>> {
        self.db.get_client(id)
    }

    /// List all clients.
    pub fn list(&self) -> DbResult<Vec<Client>> {
        self.db.list_clients()
    }

    /// Delete a client by id. Returns false if it did not exist.
    pub fn delete(&self, id: i64) -> DbResult<bool> {
        let deleted = self.db.delete_client(id)?;
        if deleted {
            tracing::debug!(id, "client deleted");
        }
        Ok(deleted)
    }
}
