//! Integration tests for Minimart.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations
//! cargo run -p minimart-cli -- migrate
//!
//! # Start the server
//! cargo run -p minimart-server
//!
//! # Run the ignored end-to-end tests
//! cargo test -p minimart-integration-tests -- --ignored
//! ```
//!
//! Tests default to `http://localhost:3000`; override with
//! `MINIMART_BASE_URL`. If the server runs with `MINIMART_ADMIN_TOKEN`
//! set, export the same value for the tests.

/// Base URL for the server (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("MINIMART_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Admin token matching the server's `MINIMART_ADMIN_TOKEN`, if any.
#[must_use]
pub fn admin_token() -> Option<String> {
    std::env::var("MINIMART_ADMIN_TOKEN").ok()
}

/// A cookie-holding client, so cart and flash state persist across requests.
#[must_use]
pub fn session_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}
