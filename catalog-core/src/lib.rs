//! Core library for the catalog service.
//!
//! Owns the [`Product`] model, the [`ProductRepository`] store port, and the
//! storage backends that implement it (PostgreSQL for serving, in-memory for
//! tests and fixtures). HTTP concerns live in `catalog-server`.

/// Error types shared across the catalog crates
pub mod error;

/// The product domain model
pub mod product;

/// Store port and its implementations
pub mod store;

/// Embedded schema migrations for the products table
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

pub use error::{CatalogError, Result};
pub use product::{NewProduct, Product};
pub use store::memory::InMemoryProductRepository;
pub use store::ports::ProductRepository;
pub use store::postgres::PostgresProductRepository;
