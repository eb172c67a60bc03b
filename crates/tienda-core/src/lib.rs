//! # tienda-core: Domain Types for the Tienda API
//!
//! Row types returned by the listing endpoints, request bodies accepted by the
//! insert endpoints, and the validation that runs before any SQL is executed.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tienda API Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/api (axum)                              │   │
//! │  │    GET /productos, POST /clientes, POST /pedido_enc, ...        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tienda-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐  ┌───────────────┐  ┌───────────────┐      │   │
//! │  │   │     types     │  │  validation   │  │     error     │      │   │
//! │  │   │ Product, ...  │  │   Validate    │  │ValidationError│      │   │
//! │  │   │ NewProduct... │  │               │  │               │      │   │
//! │  │   └───────────────┘  └───────────────┘  └───────────────┘      │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 tienda-db (MySQL via sqlx)                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Row types and request bodies
//! - [`error`] - Validation error type
//! - [`validation`] - Field rules and the [`Validate`] trait
//!
//! ## Example Usage
//!
//! ```rust
//! use tienda_core::{NewClient, Validate};
//!
//! let body = NewClient {
//!     name: "Ana".to_string(),
//!     email: Some("ana@x.com".to_string()),
//!     phone: Some("555".to_string()),
//!     tax_id: Some("123".to_string()),
//! };
//! assert!(body.validate().is_ok());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use types::*;
pub use validation::Validate;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Status code of rows that appear in the default product and client listings.
pub const ACTIVE_STATUS: &str = "A";

/// Maximum length of the free-text columns (`VARCHAR(100)` in the schema).
pub const MAX_TEXT_LEN: usize = 100;
