//! The catalog store: one port, two backends.
//!
//! [`ports::ProductRepository`] is the boundary the API layer programs
//! against. [`postgres`] is the serving backend; [`memory`] backs tests and
//! fixtures with the same matching semantics.

pub mod memory;
pub mod ports;
pub mod postgres;

pub use memory::InMemoryProductRepository;
pub use ports::ProductRepository;
pub use postgres::PostgresProductRepository;
