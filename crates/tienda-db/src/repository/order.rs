//! # Order Repository
//!
//! Database operations for order headers (`pedido_enc`) and order details
//! (`pedido_det`).
//!
//! ## Creating an Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order Creation                                    │
//! │                                                                         │
//! │  1. POST /pedido_enc                                                   │
//! │     └── insert_header() → id_pedido                                    │
//! │                                                                         │
//! │  2. POST /pedido_det  (once per line)                                  │
//! │     └── insert_detail(id_pedido, ...) → id_detalle                     │
//! │                                                                         │
//! │  Each step is its own statement and its own request. There is no       │
//! │  transaction across them: if step 2 fails, the header stays.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Listings are not filtered by status.

use sqlx::MySqlPool;
use tracing::debug;

use crate::error::DbResult;
use tienda_core::{NewOrderDetail, NewOrderHeader, OrderDetail, OrderHeader};

const LIST_HEADERS: &str = r#"
    SELECT
        p.id_pedido AS id,
        p.id_cliente AS client_id,
        c.nombre AS client_name,
        p.fecha AS date,
        p.total_pedido AS total,
        p.estado AS status
    FROM pedido_enc p
    JOIN clientes c ON p.id_cliente = c.id_cliente
    ORDER BY p.id_pedido
"#;

const LIST_DETAILS: &str = r#"
    SELECT
        d.id_detalle AS id,
        d.id_pedido AS order_id,
        d.id_producto AS product_id,
        pr.nombre AS product_name,
        d.precio_venta AS sale_price,
        d.cantidad_venta AS sale_quantity,
        d.subtotal_venta AS subtotal
    FROM pedido_det d
    JOIN productos pr ON d.id_producto = pr.id_producto
    ORDER BY d.id_detalle
"#;

const INSERT_HEADER: &str = r#"
    INSERT INTO pedido_enc (id_cliente, total_pedido, estado)
    VALUES (?, ?, ?)
"#;

const INSERT_DETAIL: &str = r#"
    INSERT INTO pedido_det (id_pedido, id_producto, precio_venta, cantidad_venta)
    VALUES (?, ?, ?, ?)
"#;

/// Repository for order headers and details.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: MySqlPool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: MySqlPool) -> Self {
        OrderRepository { pool }
    }

    /// Lists all order headers with the client name.
    pub async fn list_headers(&self) -> DbResult<Vec<OrderHeader>> {
        let headers = sqlx::query_as::<_, OrderHeader>(LIST_HEADERS)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = headers.len(), "Listed order headers");
        Ok(headers)
    }

    /// Lists all order details with the product name.
    pub async fn list_details(&self) -> DbResult<Vec<OrderDetail>> {
        let details = sqlx::query_as::<_, OrderDetail>(LIST_DETAILS)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = details.len(), "Listed order details");
        Ok(details)
    }

    /// Inserts an order header and returns the generated `id_pedido`.
    ///
    /// `fecha` comes from the column default.
    pub async fn insert_header(&self, header: &NewOrderHeader) -> DbResult<u64> {
        debug!(client_id = header.client_id, total = %header.total, "Inserting order header");

        let result = sqlx::query(INSERT_HEADER)
            .bind(header.client_id)
            .bind(header.total)
            .bind(header.status_or_default())
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_id())
    }

    /// Inserts an order detail and returns the generated `id_detalle`.
    ///
    /// `subtotal_venta` is computed by the database.
    pub async fn insert_detail(&self, detail: &NewOrderDetail) -> DbResult<u64> {
        debug!(
            order_id = detail.order_id,
            product_id = detail.product_id,
            "Inserting order detail"
        );

        let result = sqlx::query(INSERT_DETAIL)
            .bind(detail.order_id)
            .bind(detail.product_id)
            .bind(detail.sale_price)
            .bind(detail.sale_quantity)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_id())
    }
}
