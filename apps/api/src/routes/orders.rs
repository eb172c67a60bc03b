//! Order header and order detail handlers.
//!
//! `POST /pedido_det` answers `200`, not `201`, matching the existing API
//! contract clients depend on.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::info;

use super::extract::ValidJson;
use crate::error::ApiResult;
use crate::AppState;
use tienda_core::{NewOrderDetail, NewOrderHeader, OrderDetail, OrderHeader};

const LIST_HEADERS_FAILED: &str = "Failed to retrieve orders";
const LIST_DETAILS_FAILED: &str = "Failed to retrieve order details";
const CREATE_HEADER_FAILED: &str = "Error al insertar pedido_enc";
const CREATE_DETAIL_FAILED: &str = "Error al insertar detalle de pedido";

/// `201` body of `POST /pedido_enc`.
#[derive(Debug, Serialize)]
pub struct OrderHeaderCreated {
    pub message: &'static str,
    pub id_pedido: u64,
}

/// `200` body of `POST /pedido_det`.
#[derive(Debug, Serialize)]
pub struct OrderDetailCreated {
    pub message: &'static str,
    pub id_detalle: u64,
}

/// `GET /pedidos`: every order header with its client's name.
pub async fn list_headers(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<OrderHeader>>> {
    let headers = state
        .store
        .list_order_headers()
        .await
        .map_err(|e| state.execution_error(LIST_HEADERS_FAILED, e))?;

    Ok(Json(headers))
}

/// `GET /detalles`: every order detail with its product's name.
pub async fn list_details(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<OrderDetail>>> {
    let details = state
        .store
        .list_order_details()
        .await
        .map_err(|e| state.execution_error(LIST_DETAILS_FAILED, e))?;

    Ok(Json(details))
}

/// `POST /pedido_enc`.
pub async fn create_header(
    State(state): State<Arc<AppState>>,
    ValidJson(body): ValidJson<NewOrderHeader>,
) -> ApiResult<(StatusCode, Json<OrderHeaderCreated>)> {
    let id = state
        .store
        .insert_order_header(&body)
        .await
        .map_err(|e| state.execution_error(CREATE_HEADER_FAILED, e))?;

    info!(id_pedido = id, id_cliente = body.client_id, "Order header created");

    Ok((
        StatusCode::CREATED,
        Json(OrderHeaderCreated {
            message: "Pedido creado exitosamente",
            id_pedido: id,
        }),
    ))
}

/// `POST /pedido_det`.
pub async fn create_detail(
    State(state): State<Arc<AppState>>,
    ValidJson(body): ValidJson<NewOrderDetail>,
) -> ApiResult<Json<OrderDetailCreated>> {
    let id = state
        .store
        .insert_order_detail(&body)
        .await
        .map_err(|e| state.execution_error(CREATE_DETAIL_FAILED, e))?;

    info!(id_detalle = id, id_pedido = body.order_id, "Order detail created");

    Ok(Json(OrderDetailCreated {
        message: "Detalle de pedido creado exitosamente",
        id_detalle: id,
    }))
}
