//! # Tienda API
//!
//! HTTP/JSON endpoints over products, clients and orders stored in MySQL.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Tienda API Request Path                         │
//! │                                                                         │
//! │  request ──► Router ──► require_database (probe) ──► handler            │
//! │                │               │                        │               │
//! │                │               └─ fails: 503            ├─ body: 400    │
//! │                │                                        ├─ SQL:  500    │
//! │                └─ GET / (no probe)                      └─ ok: 200/201  │
//! │                                                                         │
//! │  AppState ── Arc<dyn Store> ── Database (MySqlPool)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! See [`config`]. `PORT`, `DATABASE_URL` or `DB_*`, `ERROR_DETAIL`.

pub mod config;
pub mod error;
pub mod routes;

#[cfg(test)]
mod testing;

use std::sync::Arc;

use tienda_db::{DbError, Store};

// Re-exports
pub use config::{ApiConfig, ErrorDetail};
pub use error::{ApiError, ApiResult};
pub use routes::router;

/// Shared application state.
///
/// Built once in `main` and handed to the router; there is no global pool.
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub error_detail: ErrorDetail,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, error_detail: ErrorDetail) -> Arc<Self> {
        Arc::new(AppState {
            store,
            error_detail,
        })
    }

    /// Converts a statement failure into the `500` response for `summary`.
    pub fn execution_error(&self, summary: &'static str, err: DbError) -> ApiError {
        ApiError::execution(summary, err, self.error_detail)
    }
}
