//! In-memory [`Store`] for router tests.
//!
//! Behaves like the MySQL tables closely enough for the HTTP contract:
//! generated ids start at 1, status defaults to `'A'`, listings of products
//! and clients skip inactive rows, and foreign keys are checked on insert.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tienda_core::{
    Client, NewClient, NewOrderDetail, NewOrderHeader, NewProduct, OrderDetail, OrderHeader,
    Product, ACTIVE_STATUS,
};
use tienda_db::{DbError, DbResult, Store};

#[derive(Default)]
struct Tables {
    products: Vec<Product>,
    clients: Vec<Client>,
    headers: Vec<(i32, i32, Decimal, String)>,
    details: Vec<DetailRow>,
}

struct DetailRow {
    id: i32,
    order_id: i32,
    product_id: i32,
    sale_price: Decimal,
    sale_quantity: i32,
    subtotal: Option<Decimal>,
}

pub struct MemoryStore {
    tables: Mutex<Tables>,
    online: AtomicBool,
    failure: Mutex<Option<String>>,
    statements: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            tables: Mutex::new(Tables::default()),
            online: AtomicBool::new(true),
            failure: Mutex::new(None),
            statements: AtomicUsize::new(0),
        }
    }

    /// Makes every probe fail.
    pub fn offline() -> Self {
        let store = Self::new();
        store.online.store(false, Ordering::SeqCst);
        store
    }

    /// Makes every statement (not the probe) fail with `message`.
    pub fn failing(message: &str) -> Self {
        let store = Self::new();
        *store.failure.lock().unwrap() = Some(message.to_string());
        store
    }

    /// Inserts a product row as-is, bypassing the insert statement.
    pub fn seed_product(&self, product: Product) {
        self.tables.lock().unwrap().products.push(product);
    }

    /// Inserts a detail row whose `subtotal_venta` is NULL, as on a table
    /// without the generated column.
    pub fn seed_detail_without_subtotal(
        &self,
        order_id: i32,
        product_id: i32,
        sale_price: Decimal,
        sale_quantity: i32,
    ) {
        let mut tables = self.tables.lock().unwrap();
        let id = tables.details.len() as i32 + 1;
        tables.details.push(DetailRow {
            id,
            order_id,
            product_id,
            sale_price,
            sale_quantity,
            subtotal: None,
        });
    }

    /// Number of statements executed, probes excluded.
    pub fn statements(&self) -> usize {
        self.statements.load(Ordering::SeqCst)
    }

    fn execute(&self) -> DbResult<std::sync::MutexGuard<'_, Tables>> {
        self.statements.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(DbError::QueryFailed(message));
        }
        Ok(self.tables.lock().unwrap())
    }
}

fn order_date() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .unwrap()
}

fn fk_violation(column: &str) -> DbError {
    DbError::ForeignKeyViolation {
        message: format!("Cannot add or update a child row: a foreign key constraint fails ({column})"),
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> DbResult<()> {
        if self.online.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(DbError::ConnectionFailed("Connection refused (os error 111)".to_string()))
        }
    }

    async fn list_products(&self) -> DbResult<Vec<Product>> {
        let tables = self.execute()?;
        Ok(tables
            .products
            .iter()
            .filter(|p| p.status == ACTIVE_STATUS)
            .cloned()
            .collect())
    }

    async fn list_clients(&self) -> DbResult<Vec<Client>> {
        let tables = self.execute()?;
        Ok(tables
            .clients
            .iter()
            .filter(|c| c.status == ACTIVE_STATUS)
            .cloned()
            .collect())
    }

    async fn list_order_headers(&self) -> DbResult<Vec<OrderHeader>> {
        let tables = self.execute()?;
        Ok(tables
            .headers
            .iter()
            .filter_map(|(id, client_id, total, status)| {
                let client = tables.clients.iter().find(|c| c.id == *client_id)?;
                Some(OrderHeader {
                    id: *id,
                    client_id: *client_id,
                    client_name: client.name.clone(),
                    date: Some(order_date()),
                    total: *total,
                    status: status.clone(),
                })
            })
            .collect())
    }

    async fn list_order_details(&self) -> DbResult<Vec<OrderDetail>> {
        let tables = self.execute()?;
        Ok(tables
            .details
            .iter()
            .filter_map(|row| {
                let product = tables.products.iter().find(|p| p.id == row.product_id)?;
                Some(OrderDetail {
                    id: row.id,
                    order_id: row.order_id,
                    product_id: row.product_id,
                    product_name: product.name.clone(),
                    sale_price: row.sale_price,
                    sale_quantity: row.sale_quantity,
                    subtotal: row.subtotal,
                })
            })
            .collect())
    }

    async fn insert_product(&self, product: &NewProduct) -> DbResult<u64> {
        let mut tables = self.execute()?;
        let id = tables.products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        tables.products.push(Product {
            id,
            name: product.name.clone(),
            min_price: product.min_price,
            max_price: product.max_price,
            available_quantity: product.available_quantity,
            status: ACTIVE_STATUS.to_string(),
        });
        Ok(id as u64)
    }

    async fn insert_client(&self, client: &NewClient) -> DbResult<u64> {
        let mut tables = self.execute()?;
        let id = tables.clients.len() as i32 + 1;
        tables.clients.push(Client {
            id,
            name: client.name.clone(),
            email: client.email.clone(),
            phone: client.phone.clone(),
            tax_id: client.tax_id.clone(),
            status: ACTIVE_STATUS.to_string(),
        });
        Ok(id as u64)
    }

    async fn insert_order_header(&self, header: &NewOrderHeader) -> DbResult<u64> {
        let mut tables = self.execute()?;
        if !tables.clients.iter().any(|c| c.id == header.client_id) {
            return Err(fk_violation("id_cliente"));
        }
        let id = tables.headers.len() as i32 + 1;
        tables.headers.push((
            id,
            header.client_id,
            header.total,
            header.status_or_default().to_string(),
        ));
        Ok(id as u64)
    }

    async fn insert_order_detail(&self, detail: &NewOrderDetail) -> DbResult<u64> {
        let mut tables = self.execute()?;
        if !tables.headers.iter().any(|h| h.0 == detail.order_id) {
            return Err(fk_violation("id_pedido"));
        }
        if !tables.products.iter().any(|p| p.id == detail.product_id) {
            return Err(fk_violation("id_producto"));
        }
        let id = tables.details.len() as i32 + 1;
        tables.details.push(DetailRow {
            id,
            order_id: detail.order_id,
            product_id: detail.product_id,
            sale_price: detail.sale_price,
            sale_quantity: detail.sale_quantity,
            subtotal: Some(detail.sale_price * Decimal::from(detail.sale_quantity)),
        });
        Ok(id as u64)
    }
}
