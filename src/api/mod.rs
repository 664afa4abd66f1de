//! HTTP layer exposing medicine search over the loaded catalog.

pub mod routes;
pub mod types;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::{catalog::MedicineRecord, matching::MatchEngine};

#[derive(Clone)]
pub struct AppState {
    pub engine: MatchEngine,
    pub catalog: Arc<Vec<MedicineRecord>>,
}

impl AppState {
    pub fn new(engine: MatchEngine, catalog: Vec<MedicineRecord>) -> Self {
        Self {
            engine,
            catalog: Arc::new(catalog),
        }
    }
}

/// Build the application router; split out so tests can drive it in-process.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/medicines/search", post(routes::search_medicines))
        .route("/medicines/barcode/:barcode", get(routes::search_by_barcode))
        .route("/ocr/search", post(routes::search_by_ocr))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(state: AppState, host: String, port: u16) -> Result<()> {
    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, records = state.catalog.len(), "serving medscan API");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router(state).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
