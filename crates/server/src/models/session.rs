//! Session-related types.
//!
//! Keys under which per-client state lives in the tower-sessions store.

/// Session key constants.
pub mod session_keys {
    /// The id-to-quantity cart mapping ([`minimart_core::Cart`]).
    pub const CART: &str = "cart";
    /// Queued one-shot flash notices ([`crate::flash::FlashMessage`]).
    pub const FLASH: &str = "flash";
}
