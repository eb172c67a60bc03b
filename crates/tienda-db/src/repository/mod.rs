//! # Repository Module
//!
//! One repository per table family. Each method runs exactly one statement.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Repository          Table(s)                 Operations                │
//! │  ─────────────────   ──────────────────────   ─────────────────────     │
//! │  ProductRepository   productos                list_active, insert       │
//! │  ClientRepository    clientes                 list_active, insert       │
//! │  OrderRepository     pedido_enc, pedido_det   list_headers,             │
//! │                      (+ clientes, productos)  list_details,             │
//! │                                               insert_header,            │
//! │                                               insert_detail             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Select lists alias every column to the Rust field name of the row type;
//! serde maps it back to the column name on the way out.

pub mod client;
pub mod order;
pub mod product;
