//! Product repository for database operations.
//!
//! Queries are runtime-checked (`query_as` with `FromRow` models) so the
//! workspace builds without a live database.

use sqlx::PgPool;

use minimart_core::ProductId;

use super::RepositoryError;
use crate::models::{NewProduct, Product};
use crate::pagination::{self, Page};

const PRODUCT_COLUMNS: &str = "id, name, description, price, image, created_at, updated_at";

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a product by its id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }

    /// Fetch up to `limit` products in store default order (id ascending).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn first_n(&self, limit: i64) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Fetch one page of products, newest first, optionally filtered.
    ///
    /// The filter is a case-insensitive substring match against name OR
    /// description. `raw_page` is the untrusted `?page=` parameter; it
    /// clamps to the nearest valid page.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if either query fails.
    pub async fn list_page(
        &self,
        search: Option<&str>,
        raw_page: Option<&str>,
        per_page: u32,
    ) -> Result<Page<Product>, RepositoryError> {
        let pattern = search
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(|q| format!("%{}%", escape_like(q)));

        let total_items = match &pattern {
            Some(pattern) => {
                sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM products WHERE name ILIKE $1 OR description ILIKE $1",
                )
                .bind(pattern)
                .fetch_one(self.pool)
                .await?
            }
            None => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
                    .fetch_one(self.pool)
                    .await?
            }
        };
        let total_items = u64::try_from(total_items).unwrap_or(0);

        let total_pages = pagination::total_pages(total_items, per_page);
        let number = pagination::resolve_page(raw_page, total_pages);
        let offset = i64::from(number - 1) * i64::from(per_page);

        let items = match &pattern {
            Some(pattern) => {
                sqlx::query_as::<_, Product>(&format!(
                    "SELECT {PRODUCT_COLUMNS} FROM products \
                     WHERE name ILIKE $1 OR description ILIKE $1 \
                     ORDER BY id DESC LIMIT $2 OFFSET $3"
                ))
                .bind(pattern)
                .bind(i64::from(per_page))
                .bind(offset)
                .fetch_all(self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Product>(&format!(
                    "SELECT {PRODUCT_COLUMNS} FROM products \
                     ORDER BY id DESC LIMIT $1 OFFSET $2"
                ))
                .bind(i64::from(per_page))
                .bind(offset)
                .fetch_all(self.pool)
                .await?
            }
        };

        Ok(Page {
            items,
            number,
            total_pages,
            total_items,
        })
    }

    /// Persist a new product and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, new: &NewProduct) -> Result<Product, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO products (name, description, price, image) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.price)
        .bind(&new.image)
        .fetch_one(self.pool)
        .await?;

        Ok(product)
    }

    /// Save new field values over an existing product.
    ///
    /// Returns `None` if no product has this id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: ProductId,
        new: &NewProduct,
    ) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "UPDATE products \
             SET name = $2, description = $3, price = $4, image = $5, updated_at = now() \
             WHERE id = $1 \
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(id)
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.price)
        .bind(&new.image)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }

    /// Delete a product. Returns true if a row was deleted.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Escape `LIKE`/`ILIKE` metacharacters in a user-supplied query.
///
/// Postgres treats backslash as the default escape character, so escaping
/// `\`, `%`, and `_` makes the pattern match those characters literally.
fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for ch in query.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_passes_plain_text() {
        assert_eq!(escape_like("mug"), "mug");
    }

    #[test]
    fn test_escape_like_neutralizes_wildcards() {
        assert_eq!(escape_like("100%_off"), "100\\%\\_off");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }
}
