//! Tradesim Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the paper-trading service.
//! It is database-agnostic and defines repository traits that are
//! implemented by the `storage-sqlite` crate. The trade execution
//! arithmetic lives in `trading::engine` as pure functions so the
//! storage layer can apply it inside a single database transaction.

pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod positions;
pub mod stocks;
pub mod trading;
pub mod transactions;
pub mod users;
pub mod watchlist;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
