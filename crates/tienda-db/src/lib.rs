//! # tienda-db: Database Layer for the Tienda API
//!
//! This crate owns the MySQL connection pool and every SQL statement the API
//! runs. Each operation is exactly one parametrized statement.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tienda API Data Flow                             │
//! │                                                                         │
//! │  HTTP handler (GET /productos)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     tienda-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │    Store     │  │   │
//! │  │   │   (pool.rs)   │    │               │    │  (store.rs)  │  │   │
//! │  │   │               │    │ ProductRepo   │    │              │  │   │
//! │  │   │ MySqlPool     │◄───│ ClientRepo    │◄───│ trait seam   │  │   │
//! │  │   │ ping()        │    │ OrderRepo     │    │ for handlers │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  MySQL (productos, clientes, pedido_enc, pedido_det)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection descriptor, pool creation, liveness probe
//! - [`error`] - Database error types
//! - [`repository`] - One repository per table family
//! - [`store`] - The [`Store`] trait handlers program against
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tienda_db::{Database, DbConfig};
//!
//! let db = Database::connect(DbConfig::from_url("mysql://root@localhost:3307/tienda")).await?;
//! db.ping().await?;
//! let products = db.products().list_active().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pool;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use store::Store;

pub use repository::client::ClientRepository;
pub use repository::order::OrderRepository;
pub use repository::product::ProductRepository;
