//! Cart route handlers.
//!
//! The cart lives in the session as a bare id-to-quantity mapping
//! ([`minimart_core::Cart`]). Line items and totals are rebuilt from live
//! product lookups on every render, so the cart never holds a price
//! snapshot.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::Redirect,
};
use rust_decimal::Decimal;
use tower_sessions::Session;
use tracing::instrument;

use minimart_core::{Cart, CartAddOutcome, ProductId};

use crate::error::{AppError, Result};
use crate::filters;
use crate::flash::{self, FlashLevel, FlashMessage};
use crate::models::{CartLine, session_keys};
use crate::state::AppState;

/// Read the cart mapping from the session, empty if absent.
///
/// A session store failure surfaces as an error rather than an empty
/// cart, so a broken store cannot silently wipe a cart on the next save.
async fn load_cart(session: &Session) -> Result<Cart> {
    let cart = session.get::<Cart>(session_keys::CART).await?;
    Ok(cart.unwrap_or_default())
}

/// Write the cart mapping back to the session.
async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(session_keys::CART, cart).await?;
    Ok(())
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub lines: Vec<CartLine>,
    pub total: Decimal,
    pub messages: Vec<FlashMessage>,
}

/// Display the cart page.
///
/// An entry whose product has since been deleted is skipped with a warning
/// rather than failing the whole page: a product removed by an admin must
/// not break carts that still reference it.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<CartShowTemplate> {
    let cart = load_cart(&session).await?;
    let repo = state.products();

    let mut lines = Vec::with_capacity(cart.len());
    let mut total = Decimal::ZERO;
    for (id, quantity) in cart.iter() {
        match repo.get(id).await? {
            Some(product) => {
                let line = CartLine::new(product, quantity);
                total += line.line_total;
                lines.push(line);
            }
            None => {
                tracing::warn!(product_id = %id, "skipping cart entry for deleted product");
            }
        }
    }

    let messages = flash::take(&session).await;

    Ok(CartShowTemplate {
        lines,
        total,
        messages,
    })
}

/// Add one unit of a product to the cart, then redirect to the cart page.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<Redirect> {
    let id = ProductId::new(id);
    let product = state
        .products()
        .get(id)
        .await?
        .ok_or_else(|| AppError::product_not_found(id))?;

    let mut cart = load_cart(&session).await?;
    match cart.add(id) {
        CartAddOutcome::Inserted => {
            flash::push(
                &session,
                FlashLevel::Success,
                format!("{} added to your cart!", product.name),
            )
            .await?;
        }
        CartAddOutcome::Incremented { .. } => {
            flash::push(
                &session,
                FlashLevel::Info,
                format!("Added another {} to your cart.", product.name),
            )
            .await?;
        }
    }
    save_cart(&session, &cart).await?;

    Ok(Redirect::to("/cart"))
}

/// Remove a product's entry from the cart, then redirect to the cart page.
///
/// Removing an id that is not in the cart is a silent no-op redirect.
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<Redirect> {
    let id = ProductId::new(id);
    let product = state
        .products()
        .get(id)
        .await?
        .ok_or_else(|| AppError::product_not_found(id))?;

    let mut cart = load_cart(&session).await?;
    if cart.remove(id) {
        save_cart(&session, &cart).await?;
        flash::push(
            &session,
            FlashLevel::Error,
            format!("{} removed from your cart.", product.name),
        )
        .await?;
    }

    Ok(Redirect::to("/cart"))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::{MemoryStore, Session};

    use super::*;

    fn fresh_session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_load_cart_defaults_to_empty() {
        let session = fresh_session();
        let cart = load_cart(&session).await.expect("load");
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_cart_round_trips_through_session() {
        let session = fresh_session();
        let mut cart = Cart::new();
        cart.add(ProductId::new(3));
        cart.add(ProductId::new(3));
        save_cart(&session, &cart).await.expect("save");

        let back = load_cart(&session).await.expect("load");
        assert_eq!(back, cart);
        assert_eq!(back.quantity(ProductId::new(3)), Some(2));
    }

    #[tokio::test]
    async fn test_load_cart_surfaces_bad_session_data() {
        let session = fresh_session();
        session
            .insert(session_keys::CART, "not a cart")
            .await
            .expect("insert");

        assert!(load_cart(&session).await.is_err());
    }
}
