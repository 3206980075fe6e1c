//! Product and cart-line models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use minimart_core::ProductId;

/// A catalog product as stored in the `products` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Product {
    /// Store-assigned id.
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Non-negative; enforced by a database check constraint and form
    /// validation.
    pub price: Decimal,
    /// Reference to a stored image, if any. No upload mechanics here.
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated field values for creating or updating a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image: Option<String>,
}

/// A cart row derived from a cart entry plus a live product lookup.
///
/// Never stored: prices are re-read from the catalog on every cart render,
/// so an admin price change retroactively affects pending carts.
#[derive(Debug, Clone)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
    pub line_total: Decimal,
}

impl CartLine {
    /// Build a line item, computing `line_total = price × quantity`.
    #[must_use]
    pub fn new(product: Product, quantity: u32) -> Self {
        let line_total = product.price * Decimal::from(quantity);
        Self {
            product,
            quantity,
            line_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mug() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Mug".to_string(),
            description: "A mug".to_string(),
            price: Decimal::new(999, 2),
            image: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_cart_line_total() {
        let line = CartLine::new(mug(), 2);
        assert_eq!(line.line_total, Decimal::new(1998, 2));
    }

    #[test]
    fn test_cart_line_total_single() {
        let line = CartLine::new(mug(), 1);
        assert_eq!(line.line_total, Decimal::new(999, 2));
    }
}
