//! `/clientes` handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::info;

use super::extract::ValidJson;
use crate::error::ApiResult;
use crate::AppState;
use tienda_core::{Client, NewClient};

const LIST_FAILED: &str = "Failed to retrieve clients";
const CREATE_FAILED: &str = "Error al insertar cliente";

/// `201` body of `POST /clientes`.
#[derive(Debug, Serialize)]
pub struct ClientCreated {
    pub message: &'static str,
    pub id_cliente: u64,
}

/// `GET /clientes`: active clients.
pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Client>>> {
    let clients = state
        .store
        .list_clients()
        .await
        .map_err(|e| state.execution_error(LIST_FAILED, e))?;

    Ok(Json(clients))
}

/// `POST /clientes`.
pub async fn create(
    State(state): State<Arc<AppState>>,
    ValidJson(body): ValidJson<NewClient>,
) -> ApiResult<(StatusCode, Json<ClientCreated>)> {
    let id = state
        .store
        .insert_client(&body)
        .await
        .map_err(|e| state.execution_error(CREATE_FAILED, e))?;

    info!(id_cliente = id, "Client created");

    Ok((
        StatusCode::CREATED,
        Json(ClientCreated {
            message: "Cliente creado exitosamente",
            id_cliente: id,
        }),
    ))
}
