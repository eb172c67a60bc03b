//! # Domain Types
//!
//! Row types mirror one table each (plus the joined name column for orders).
//! Request bodies describe what an insert endpoint accepts.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Table        Row type (GET)          Body type (POST)                  │
//! │  ──────────   ────────────────────    ───────────────────               │
//! │  productos    Product                 NewProduct                        │
//! │  clientes     Client                  NewClient                         │
//! │  pedido_enc   OrderHeader (+cliente)  NewOrderHeader                    │
//! │  pedido_det   OrderDetail (+producto) NewOrderDetail                    │
//! │                                                                         │
//! │  Rust fields are English; JSON keys keep the column names.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Money
//! Prices and totals are `DECIMAL` columns. They are carried as
//! [`Decimal`] and serialized as JSON strings (`"12.50"`), so the exact
//! database value reaches the client. Bodies accept either a JSON number or
//! a numeric string.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ACTIVE_STATUS;

// =============================================================================
// Rows
// =============================================================================

/// A row of `productos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    #[serde(rename = "id_producto")]
    pub id: i32,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "precio_minimo")]
    pub min_price: Decimal,

    #[serde(rename = "precio_maximo")]
    pub max_price: Decimal,

    #[serde(rename = "cantidad_disponible")]
    pub available_quantity: i32,

    /// Single-character status code; `'A'` is active.
    #[serde(rename = "estado")]
    pub status: String,
}

/// A row of `clientes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Client {
    #[serde(rename = "id_cliente")]
    pub id: i32,

    #[serde(rename = "nombre")]
    pub name: String,

    pub email: Option<String>,

    #[serde(rename = "telefono")]
    pub phone: Option<String>,

    /// Tax identification number (NIT).
    #[serde(rename = "nit")]
    pub tax_id: Option<String>,

    #[serde(rename = "estado")]
    pub status: String,
}

/// A row of `pedido_enc` joined with the owning client's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderHeader {
    #[serde(rename = "id_pedido")]
    pub id: i32,

    #[serde(rename = "id_cliente")]
    pub client_id: i32,

    #[serde(rename = "nombre_cliente")]
    pub client_name: String,

    /// Set by the database on insert; `null` when the column has no default.
    #[serde(rename = "fecha")]
    pub date: Option<NaiveDateTime>,

    #[serde(rename = "total_pedido")]
    pub total: Decimal,

    #[serde(rename = "estado")]
    pub status: String,
}

/// A row of `pedido_det` joined with the product's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderDetail {
    #[serde(rename = "id_detalle")]
    pub id: i32,

    #[serde(rename = "id_pedido")]
    pub order_id: i32,

    #[serde(rename = "id_producto")]
    pub product_id: i32,

    #[serde(rename = "nombre_producto")]
    pub product_name: String,

    #[serde(rename = "precio_venta")]
    pub sale_price: Decimal,

    #[serde(rename = "cantidad_venta")]
    pub sale_quantity: i32,

    /// `precio_venta * cantidad_venta`, computed by the database. The insert
    /// never writes it, so it is `null` on tables without the generated column.
    #[serde(rename = "subtotal_venta")]
    pub subtotal: Option<Decimal>,
}

// =============================================================================
// Request Bodies
// =============================================================================

/// Body of `POST /productos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "precio_minimo")]
    pub min_price: Decimal,

    #[serde(rename = "precio_maximo")]
    pub max_price: Decimal,

    #[serde(rename = "cantidad_disponible")]
    pub available_quantity: i32,
}

/// Body of `POST /clientes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewClient {
    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,

    #[serde(rename = "nit", default)]
    pub tax_id: Option<String>,
}

/// Body of `POST /pedido_enc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrderHeader {
    #[serde(rename = "id_cliente")]
    pub client_id: i32,

    #[serde(rename = "total_pedido")]
    pub total: Decimal,

    /// Defaults to [`ACTIVE_STATUS`] when absent.
    #[serde(rename = "estado", default)]
    pub status: Option<String>,
}

impl NewOrderHeader {
    /// Status value bound into the insert.
    pub fn status_or_default(&self) -> &str {
        self.status.as_deref().unwrap_or(ACTIVE_STATUS)
    }
}

/// Body of `POST /pedido_det`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrderDetail {
    #[serde(rename = "id_pedido")]
    pub order_id: i32,

    #[serde(rename = "id_producto")]
    pub product_id: i32,

    #[serde(rename = "precio_venta")]
    pub sale_price: Decimal,

    #[serde(rename = "cantidad_venta")]
    pub sale_quantity: i32,
}

// =============================================================================
// Unit Tests
// =============================================================================
