//! Storage layer for objscope
//!
//! Read-only access to the object table populated by the indexer.
//! Handlers depend on the [`ObjectStore`] trait; [`PgStorage`] is the
//! PostgreSQL implementation.

pub mod error;
mod pg_storage;
pub mod traits;

pub use error::StorageError;
pub use pg_storage::PgStorage;
pub use traits::ObjectStore;
