//! `/productos` handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::info;

use super::extract::ValidJson;
use crate::error::ApiResult;
use crate::AppState;
use tienda_core::{NewProduct, Product};

const LIST_FAILED: &str = "Failed to retrieve products";
const CREATE_FAILED: &str = "Failed to create product";

/// `201` body of `POST /productos`.
#[derive(Debug, Serialize)]
pub struct ProductCreated {
    pub message: &'static str,
    pub id_producto: u64,
}

/// `GET /productos`: active products.
pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Product>>> {
    let products = state
        .store
        .list_products()
        .await
        .map_err(|e| state.execution_error(LIST_FAILED, e))?;

    Ok(Json(products))
}

/// `POST /productos`.
pub async fn create(
    State(state): State<Arc<AppState>>,
    ValidJson(body): ValidJson<NewProduct>,
) -> ApiResult<(StatusCode, Json<ProductCreated>)> {
    let id = state
        .store
        .insert_product(&body)
        .await
        .map_err(|e| state.execution_error(CREATE_FAILED, e))?;

    info!(id_producto = id, "Product created");

    Ok((
        StatusCode::CREATED,
        Json(ProductCreated {
            message: "Product created successfully",
            id_producto: id,
        }),
    ))
}
