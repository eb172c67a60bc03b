//! # Routes
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Method  Path          Probe  Handler                  Success          │
//! │  ──────  ───────────   ─────  ───────────────────────  ──────────────   │
//! │  GET     /             no     root                     200 text         │
//! │  GET     /productos    yes    products::list           200 [rows]       │
//! │  POST    /productos    yes    products::create         201 {id}         │
//! │  GET     /clientes     yes    clients::list            200 [rows]       │
//! │  POST    /clientes     yes    clients::create          201 {id}         │
//! │  GET     /pedidos      yes    orders::list_headers     200 [rows]       │
//! │  GET     /detalles     yes    orders::list_details     200 [rows]       │
//! │  POST    /pedido_enc   yes    orders::create_header    201 {id}         │
//! │  POST    /pedido_det   yes    orders::create_detail    200 {id}         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The probe runs as a route layer on every database route, `/pedido_det`
//! included. Unknown paths fall through to axum's default `404`.

pub mod clients;
pub mod extract;
pub mod orders;
pub mod products;


use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::error::ApiError;
use crate::AppState;

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let database_routes = Router::new()
        .route("/productos", get(products::list).post(products::create))
        .route("/clientes", get(clients::list).post(clients::create))
        .route("/pedidos", get(orders::list_headers))
        .route("/detalles", get(orders::list_details))
        .route("/pedido_enc", post(orders::create_header))
        .route("/pedido_det", post(orders::create_detail))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_database,
        ));

    Router::new()
        .route("/", get(root))
        .merge(database_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness text.
async fn root() -> &'static str {
    "Api is running"
}

/// Runs the probe before the handler; answers `503` without touching the
/// handler when it fails.
async fn require_database(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    match state.store.ping().await {
        Ok(()) => next.run(request).await,
        Err(err) => {
            error!(
                method = %request.method(),
                path = %request.uri().path(),
                unreachable = err.is_connectivity(),
                error = %err,
                "Database probe failed"
            );
            ApiError::Unavailable.into_response()
        }
    }
}
