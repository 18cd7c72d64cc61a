//! Product gateway.

use crate::db::{Database, DbError, DbResult};
use crate::models::Product;
use crate::validation::{field, validate_product, FieldMap};

use super::{or_keep, Outcome};

/// Create, update, and delete products behind the product validator.
pub struct ProductGateway<'a> {
    db: &'a Database,
}

impl<'a> ProductGateway<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Validate the raw form fields and insert a new product.
    pub fn create(&self, data: &FieldMap) -> DbResult<Outcome<Product>> {
        let errors = validate_product(data);
        if !errors.is_empty() {
            tracing::debug!(fields = errors.len(), "product create rejected");
            return Ok(Outcome::Rejected(errors));
        }

        let mut product = Product::new(
            field(data, "name").to_string(),
            field(data, "type").to_string(),
            parse_price(field(data, "price"))?,
        );
        product.id = self.db.insert_product(&product)?;
        tracing::debug!(id = product.id, "product created");
        Ok(Outcome::Saved(product))
    }

    /// Validate the raw form fields and apply them to a stored product.
    pub fn update(&self, current: &Product, data: &FieldMap) -> DbResult<Outcome<Product>> {
        let errors = validate_product(data);
        if !errors.is_empty() {
            tracing::debug!(id = current.id, fields = errors.len(), "product update rejected");
            return Ok(Outcome::Rejected(errors));
        }

        let merged = Product {
            id: current.id,
            name: or_keep(field(data, "name"), &current.name),
            kind: or_keep(field(data, "type"), &current.kind),
            price: match field(data, "price") {
                "" => current.price,
                raw => parse_price(raw)?,
            },
        };

        if !self.db.update_product(&merged)? {
            return Err(DbError::NotFound(format!("product {}", current.id)));
        }
        tracing::debug!(id = merged.id, "product updated");
        Ok(Outcome::Saved(merged))
    }

    /// Look up a product by id.
    pub fn get(&self, id: i64) -> DbResult<Option<Product>> {
        self.db.get_product(id)
    }

    /// List all products.
    pub fn list(&self) -> DbResult<Vec<Product>> {
        self.db.list_products()
    }

    /// Delete a product by id. Returns false if it did not exist.
    pub fn delete(&self, id: i64) -> DbResult<bool> {
        let deleted = self.db.delete_product(id)?;
        if deleted {
            tracing::debug!(id, "product deleted");
        }
        Ok(deleted)
    }
}

// Unreachable after a passing validation; kept as an error rather than a
// panic per the fatal-propagation policy.
fn parse_price(raw: &str) -> DbResult<f64> {
    raw.parse()
        .map_err(|_| DbError::Constraint(format!("price is not a number: {raw}")))
}
