//! Provider gateway.

use crate::db::{Database, DbError, DbResult};
use crate::models::{City, Provider};
use crate::validation::{field, validate_provider, FieldMap};

use super::{or_keep, Outcome};

/// Create, update, and delete providers behind the provider validator.
pub struct ProviderGateway<'a> {
    db: &'a Database,
}

impl<'a> ProviderGateway<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Validate the raw form fields and insert a new provider.
    pub fn create(&self, data: &FieldMap) -> DbResult<Outcome<Provider>> {
        let errors = validate_provider(data);
        if !errors.is_empty() {
            tracing::debug!(fields = errors.len(), "provider create rejected");
            return Ok(Outcome::Rejected(errors));
        }

        let mut provider = Provider::new(
            field(data, "name").to_string(),
            field(data, "email").to_string(),
            City::from_key(field(data, "city")).unwrap_or_default(),
        );
        provider.id = self.db.insert_provider(&provider)?;
        tracing::debug!(id = provider.id, "provider created");
        Ok(Outcome::Saved(provider))
    }

    /// Validate the raw form fields and apply them to a stored provider.
    pub fn update(&self, current: &Provider, data: &FieldMap) -> DbResult<Outcome<Provider>> {
        let errors = validate_provider(data);
        if !errors.is_empty() {
            tracing::debug!(id = current.id, fields = errors.len(), "provider update rejected");
            return Ok(Outcome::Rejected(errors));
        }

        let merged = Provider {
            id: current.id,
            name: or_keep(field(data, "name"), &current.name),
            email: or_keep(field(data, "email"), &current.email),
            city: match field(data, "city") {
                "" => current.city,
                key => City::from_key(key).unwrap_or_default(),
            },
        };

        if !self.db.update_provider(&merged)? {
            return Err(DbError::NotFound(format!("provider {}", current.id)));
        }
        tracing::debug!(id = merged.id, "provider updated");
        Ok(Outcome::Saved(merged))
    }

    /// Look up a provider by id.
    pub fn get(&self, id: i64) -> DbResult<Option<Provider>> {
        self.db.get_provider(id)
    }

    /// List all providers.
    pub fn list(&self) -> DbResult<Vec<Provider>> {
        self.db.list_providers()
    }

    /// Delete a provider by id. Returns false if it did not exist.
    pub fn delete(&self, id: i64) -> DbResult<bool> {
        let deleted = self.db.delete_provider(id)?;
        if deleted {
            tracing::debug!(id, "provider deleted");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(pairs: &[(&str, &str)]) -> FieldMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn valid_provider() -> FieldMap {
        data(&[
            ("name", "Farmacity"),
            ("email", "ventas@farmacity.com"),
            ("city", "Berisso"),
        ])
    }

    #[test]
    fn test_create_persists_valid_provider() {
        let db = Database::open_in_memory().unwrap();
        let gateway = ProviderGateway::new(&db);

        let provider = gateway.create(&valid_provider()).unwrap().into_saved().unwrap();
        assert_eq!(provider.city, City::Berisso);
        assert_eq!(gateway.get(provider.id).unwrap().unwrap(), provider);
    }

    #[test]
    fn test_create_rejects_without_writing() {
        let db = Database::open_in_memory().unwrap();
        let gateway = ProviderGateway::new(&db);

        let outcome = gateway.create(&data(&[("name", "Farmacity")])).unwrap();
        assert!(!outcome.is_saved());
        assert!(gateway.list().unwrap().is_empty());
    }

    #[test]
    fn test_update_replaces_values() {
        let db = Database::open_in_memory().unwrap();
        let gateway = ProviderGateway::new(&db);
        let provider = gateway.create(&valid_provider()).unwrap().into_saved().unwrap();

        let mut update = valid_provider();
        update.insert("email".into(), "compras@farmacity.com".into());

        let updated = gateway.update(&provider, &update).unwrap().into_saved().unwrap();
        assert_eq!(updated.email, "compras@farmacity.com");
        assert_eq!(updated.name, provider.name);
    }
}
