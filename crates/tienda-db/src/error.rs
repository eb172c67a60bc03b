//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  MySQL Error (sqlx::Error)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Connectivity vs. statement rejection          │
//! │       │                                                                 │
//! │       ├── probe failed      → ApiError::Unavailable (503)              │
//! │       └── statement failed  → ApiError::Execution   (500)              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Database operation errors.
///
/// Statement rejections keep the raw server message; [`DbError::details`]
/// returns it verbatim for diagnostics.
#[derive(Debug, Error)]
pub enum DbError {
    /// Unique constraint violation (MySQL 1062).
    #[error("Unique violation: {message}")]
    UniqueViolation { message: String },

    /// Foreign key constraint violation (MySQL 1451/1452).
    ///
    /// ## When This Occurs
    /// - Order header referencing a non-existent `id_cliente`
    /// - Order detail referencing a non-existent `id_pedido` / `id_producto`
    #[error("Foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// Database unreachable or connection refused.
    ///
    /// ## When This Occurs
    /// - MySQL is down or the host is wrong
    /// - Bad credentials
    /// - Pool already closed (shutdown in progress)
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Statement rejected by the server (syntax, type, NOT NULL, ...).
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// No connection became available within the acquire timeout.
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Anything else the driver reports (decode errors, protocol errors).
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Whether the failure means "the database is not reachable right now".
    ///
    /// Outside the probe, anything else is a statement failure.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, DbError::ConnectionFailed(_) | DbError::PoolExhausted)
    }

    /// The raw message without the variant prefix.
    pub fn details(&self) -> String {
        match self {
            DbError::UniqueViolation { message } | DbError::ForeignKeyViolation { message } => {
                message.clone()
            }
            DbError::ConnectionFailed(msg) | DbError::QueryFailed(msg) | DbError::Internal(msg) => {
                msg.clone()
            }
            DbError::PoolExhausted => self.to_string(),
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database       → constraint kind, else QueryFailed
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// Io / Tls / PoolClosed /
///   Configuration             → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let message = db_err.message().to_string();
                match db_err.kind() {
                    ErrorKind::UniqueViolation => DbError::UniqueViolation { message },
                    ErrorKind::ForeignKeyViolation => DbError::ForeignKeyViolation { message },
                    _ => DbError::QueryFailed(message),
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            sqlx::Error::Io(e) => DbError::ConnectionFailed(e.to_string()),

            sqlx::Error::Tls(e) => DbError::ConnectionFailed(e.to_string()),

            sqlx::Error::Configuration(e) => DbError::ConnectionFailed(e.to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
