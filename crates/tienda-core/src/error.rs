//! # Error Types
//!
//! Validation errors for request bodies.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tienda-core (this file)                                               │
//! │  └── ValidationError  - Body rejected before any SQL runs (400)        │
//! │                                                                         │
//! │  tienda-db                                                             │
//! │  └── DbError          - Probe (503) or statement (500) failures        │
//! │                                                                         │
//! │  apps/api                                                              │
//! │  └── ApiError         - What the HTTP client sees                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field names in messages are the JSON keys the client sent, not the Rust
//! field names.

use thiserror::Error;

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is empty or blank.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too long for its column.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: &'static str },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: &'static str },

    /// Invalid format (e.g. email without `@`).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: &'static str, reason: String },

    /// Two related fields are out of order.
    #[error("{low} must not be greater than {high}")]
    InvalidRange {
        low: &'static str,
        high: &'static str,
    },
}
