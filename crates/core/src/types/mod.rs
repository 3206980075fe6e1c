//! Core types for Minimart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;

pub use cart::{Cart, CartAddOutcome};
pub use id::*;
