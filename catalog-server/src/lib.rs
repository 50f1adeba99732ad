//! HTTP layer of the catalog service.
//!
//! Translates four read routes into calls on the store port from
//! `catalog-core` and maps results to JSON and errors to status codes.
//! Binary entry point is in `main.rs`; everything here is reusable from
//! tests.

pub mod errors;
pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;
