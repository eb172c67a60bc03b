//! # Product Repository
//!
//! Database operations for `productos`.
//!
//! ## Key Operations
//! - List active products (`estado = 'A'`)
//! - Insert a product (status comes from the column default)

use sqlx::MySqlPool;
use tracing::debug;

use crate::error::DbResult;
use tienda_core::{NewProduct, Product};

const LIST_ACTIVE: &str = r#"
    SELECT
        id_producto AS id,
        nombre AS name,
        precio_minimo AS min_price,
        precio_maximo AS max_price,
        cantidad_disponible AS available_quantity,
        estado AS status
    FROM productos
    WHERE estado = 'A'
    ORDER BY id_producto
"#;

const INSERT: &str = r#"
    INSERT INTO productos (nombre, precio_minimo, precio_maximo, cantidad_disponible)
    VALUES (?, ?, ?, ?)
"#;

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
/// let products = repo.list_active().await?;
/// let id = repo.insert(&new_product).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: MySqlPool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: MySqlPool) -> Self {
        ProductRepository { pool }
    }

    /// Lists active products, ordered by id.
    pub async fn list_active(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(LIST_ACTIVE)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Listed active products");
        Ok(products)
    }

    /// Inserts a product and returns the generated `id_producto`.
    ///
    /// Every value is bound as a parameter; `nombre` is stored exactly as sent.
    pub async fn insert(&self, product: &NewProduct) -> DbResult<u64> {
        debug!(name = %product.name, "Inserting product");

        let result = sqlx::query(INSERT)
            .bind(&product.name)
            .bind(product.min_price)
            .bind(product.max_price)
            .bind(product.available_quantity)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_id())
    }
}
