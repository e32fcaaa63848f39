//! Typed error enum for the storage layer.
//!
//! Callers need to tell a missed deadline apart from every other failure,
//! so timeouts get their own variant instead of hiding inside `sqlx::Error`.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Deadline elapsed, the pool could not hand out a connection in time,
    /// or the server cancelled the statement.
    #[error("storage operation timed out")]
    Timeout,

    /// SQL / connection failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Row data could not be mapped into a domain type.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

impl StorageError {
    /// Whether this error is a timeout or cancellation.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}

/// SQLSTATE raised when a statement is cancelled (`statement_timeout`, `pg_cancel_backend`).
const QUERY_CANCELED: &str = "57014";

/// Custom `From<sqlx::Error>`, NOT blanket `#[from]`.
///
/// - `PoolTimedOut`, I/O `TimedOut` and SQLSTATE 57014 → `Timeout`
/// - Everything else → `Database`
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::PoolTimedOut => Self::Timeout,
            sqlx::Error::Io(io) if io.kind() == std::io::ErrorKind::TimedOut => Self::Timeout,
            sqlx::Error::Database(db_err) if db_err.code().is_some_and(|c| c == QUERY_CANCELED) => {
                Self::Timeout
            },
            _ => Self::Database(err),
        }
    }
}
