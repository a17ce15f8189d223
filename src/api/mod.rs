//! REST API over saved calculations and the consumption engine.
//!
//! Routes:
//! - `GET`/`POST /api/calculations` — list and create
//! - `GET`/`PATCH`/`DELETE /api/calculations/{id}` — single-record CRUD
//! - `GET /api/calculations/{id}/summary` — recomputed usage, totals, analysis
//! - `GET /api/appliances` — built-in appliance catalog

mod handlers;
mod types;

pub use types::{CreateCalculationRequest, ErrorBody, SummaryLine, SummaryResponse};

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tracing::info;

use crate::config::TariffConfig;
use crate::storage::Storage;

/// Shared application state for request handlers.
///
/// The storage handle is selected once at startup; tariff defaults fill
/// in omitted create fields.
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub tariff: TariffConfig,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/calculations",
            get(handlers::list_calculations).post(handlers::create_calculation),
        )
        .route(
            "/api/calculations/{id}",
            get(handlers::get_calculation)
                .patch(handlers::update_calculation)
                .delete(handlers::delete_calculation),
        )
        .route("/api/calculations/{id}/summary", get(handlers::get_summary))
        .route("/api/appliances", get(handlers::list_catalog))
        .with_state(state)
}

/// Binds to the given address and serves the API until shutdown.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server
/// fails while running.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API server listening");
    axum::serve(listener, app).await
}
