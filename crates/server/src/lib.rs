//! Minimart server library.
//!
//! This crate provides the storefront and admin functionality as a library,
//! allowing it to be tested and reused (the CLI borrows the repository and
//! models for seeding).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod flash;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod state;
