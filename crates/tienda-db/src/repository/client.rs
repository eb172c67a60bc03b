//! # Client Repository
//!
//! Database operations for `clientes`.

use sqlx::MySqlPool;
use tracing::debug;

use crate::error::DbResult;
use tienda_core::{Client, NewClient};

const LIST_ACTIVE: &str = r#"
    SELECT
        id_cliente AS id,
        nombre AS name,
        email,
        telefono AS phone,
        nit AS tax_id,
        estado AS status
    FROM clientes
    WHERE estado = 'A'
    ORDER BY id_cliente
"#;

const INSERT: &str = r#"
    INSERT INTO clientes (nombre, email, telefono, nit)
    VALUES (?, ?, ?, ?)
"#;

/// Repository for client database operations.
#[derive(Debug, Clone)]
pub struct ClientRepository {
    pool: MySqlPool,
}

impl ClientRepository {
    /// Creates a new ClientRepository.
    pub fn new(pool: MySqlPool) -> Self {
        ClientRepository { pool }
    }

    /// Lists active clients, ordered by id.
    pub async fn list_active(&self) -> DbResult<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>(LIST_ACTIVE)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = clients.len(), "Listed active clients");
        Ok(clients)
    }

    /// Inserts a client and returns the generated `id_cliente`.
    ///
    /// Absent optional fields are bound as `NULL`.
    pub async fn insert(&self, client: &NewClient) -> DbResult<u64> {
        debug!(name = %client.name, "Inserting client");

        let result = sqlx::query(INSERT)
            .bind(&client.name)
            .bind(&client.email)
            .bind(&client.phone)
            .bind(&client.tax_id)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_id())
    }
}
