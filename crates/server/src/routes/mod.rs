//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                              - Home page with featured product
//! GET  /health                        - Liveness check
//! GET  /health/ready                  - Readiness check (database ping)
//!
//! # Catalog
//! GET  /products/?q=&page=            - Public product list, search + pagination
//! GET  /product-details/{id}/         - Product detail
//!
//! # Cart (session-backed)
//! GET  /add-to-cart/{id}/             - Add to cart, redirect to cart
//! GET  /cart/                         - Cart page
//! GET  /remove-from-cart/{id}/        - Remove from cart, redirect to cart
//!
//! # Admin (x-admin-token gated when MINIMART_ADMIN_TOKEN is set)
//! GET  /manage/products/?q=&page=     - Admin product list
//! GET  /manage/products/add/          - Product form
//! POST /manage/products/add/          - Create product
//! GET  /manage/products/edit/{id}/    - Pre-filled product form
//! POST /manage/products/edit/{id}/    - Update product
//! GET  /manage/products/delete/{id}/  - Delete confirmation
//! POST /manage/products/delete/{id}/  - Delete product
//! ```
//!
//! Trailing slashes are trimmed by `NormalizePathLayer` before routing, so
//! both forms of each path resolve.

pub mod admin;
pub mod cart;
pub mod home;
pub mod products;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the admin routes router (nested under `/manage`).
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(admin::index))
        .route(
            "/products/add",
            get(admin::add_form).post(admin::add_submit),
        )
        .route(
            "/products/edit/{id}",
            get(admin::edit_form).post(admin::edit_submit),
        )
        .route(
            "/products/delete/{id}",
            get(admin::delete_confirm).post(admin::delete_submit),
        )
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Catalog
        .route("/products", get(products::index))
        .route("/product-details/{id}", get(products::show))
        // Cart
        .route("/cart", get(cart::show))
        .route("/add-to-cart/{id}", get(cart::add))
        .route("/remove-from-cart/{id}", get(cart::remove))
        // Admin
        .nest("/manage", admin_routes())
}
