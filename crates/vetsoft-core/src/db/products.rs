//! Product database operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbResult};
use crate::models::Product;

fn row_to_product(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        kind: row.get(2)?,
        price: row.get(3)?,
    })
}

impl Database {
    /// Insert a new product, returning the assigned row id.
    pub fn insert_product(&self, product: &Product) -> DbResult<i64> {
        self.conn.execute(
            "INSERT INTO products (name, kind, price) VALUES (?1, ?2, ?3)",
            params![product.name, product.kind, product.price],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Update an existing product. Returns false if no row matched.
    pub fn update_product(&self, product: &Product) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            "UPDATE products SET name = ?2, kind = ?3, price = ?4 WHERE id = ?1",
            params![product.id, product.name, product.kind, product.price],
        )?;
        Ok(rows_affected > 0)
    }

    /// Get a product by id.
    pub fn get_product(&self, id: i64) -> DbResult<Option<Product>> {
        self.conn
            .query_row(
                "SELECT id, name, kind, price FROM products WHERE id = ?",
                [id],
                row_to_product,
            )
            .optional()
            .map_err(Into::into)
    }

    /// List all products in insertion order.
    pub fn list_products(&self) -> DbResult<Vec<Product>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, kind, price FROM products ORDER BY id")?;
        let rows = stmt.query_map([], row_to_product)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Delete a product. Returns false if no row matched.
    pub fn delete_product(&self, id: i64) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM products WHERE id = ?", [id])?;
        Ok(rows_affected > 0)
    }
}
