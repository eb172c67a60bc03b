//! # Store Trait
//!
//! The single seam between HTTP handlers and the database.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   handlers ──► Arc<dyn Store> ──┬──► Database (MySQL)     production    │
//! │                                 └──► in-memory store      router tests  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every method is one round trip. `ping` is the liveness probe; the rest map
//! one-to-one onto repository methods.

use async_trait::async_trait;

use crate::error::DbResult;
use crate::pool::Database;
use tienda_core::{
    Client, NewClient, NewOrderDetail, NewOrderHeader, NewProduct, OrderDetail, OrderHeader,
    Product,
};

/// Everything the HTTP layer needs from persistence.
#[async_trait]
pub trait Store: Send + Sync {
    /// Liveness probe.
    async fn ping(&self) -> DbResult<()>;

    async fn list_products(&self) -> DbResult<Vec<Product>>;

    async fn list_clients(&self) -> DbResult<Vec<Client>>;

    async fn list_order_headers(&self) -> DbResult<Vec<OrderHeader>>;

    async fn list_order_details(&self) -> DbResult<Vec<OrderDetail>>;

    /// Returns the generated `id_producto`.
    async fn insert_product(&self, product: &NewProduct) -> DbResult<u64>;

    /// Returns the generated `id_cliente`.
    async fn insert_client(&self, client: &NewClient) -> DbResult<u64>;

    /// Returns the generated `id_pedido`.
    async fn insert_order_header(&self, header: &NewOrderHeader) -> DbResult<u64>;

    /// Returns the generated `id_detalle`.
    async fn insert_order_detail(&self, detail: &NewOrderDetail) -> DbResult<u64>;
}

#[async_trait]
impl Store for Database {
    async fn ping(&self) -> DbResult<()> {
        Database::ping(self).await
    }

    async fn list_products(&self) -> DbResult<Vec<Product>> {
        self.products().list_active().await
    }

    async fn list_clients(&self) -> DbResult<Vec<Client>> {
        self.clients().list_active().await
    }

    async fn list_order_headers(&self) -> DbResult<Vec<OrderHeader>> {
        self.orders().list_headers().await
    }

    async fn list_order_details(&self) -> DbResult<Vec<OrderDetail>> {
        self.orders().list_details().await
    }

    async fn insert_product(&self, product: &NewProduct) -> DbResult<u64> {
        self.products().insert(product).await
    }

    async fn insert_client(&self, client: &NewClient) -> DbResult<u64> {
        self.clients().insert(client).await
    }

    async fn insert_order_header(&self, header: &NewOrderHeader) -> DbResult<u64> {
        self.orders().insert_header(header).await
    }

    async fn insert_order_detail(&self, detail: &NewOrderDetail) -> DbResult<u64> {
        self.orders().insert_detail(detail).await
    }
}
