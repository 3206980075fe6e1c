//! Domain models for the server.

pub mod product;
pub mod session;

pub use product::{CartLine, NewProduct, Product};
pub use session::session_keys;
