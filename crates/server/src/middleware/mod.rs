//! Middleware and extractors.

pub mod admin_auth;
pub mod session;

pub use admin_auth::RequireAdmin;
pub use session::create_session_layer;
