//! Local HTTP endpoint that stands in for the remote game store.
//!
//! `GET /` returns the stored document. `POST /` replaces it and echoes it
//! back. Bodies that fail to parse (wrong board length, unknown marker) are
//! rejected by the JSON extractor with a 4xx status.

use crate::document::GameDocument;
use crate::store::GameStore;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, instrument};

/// Shared store handle for the router.
pub type SharedStore = Arc<dyn GameStore>;

/// Builds the stub router over a store.
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(load).post(save))
        .with_state(store)
}

/// Serves the stub on an already-bound listener until the process stops.
///
/// # Errors
///
/// Returns the I/O error that stopped the server.
#[instrument(skip_all)]
pub async fn serve(listener: TcpListener, store: SharedStore) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Game store stub listening");
    }
    axum::serve(listener, router(store)).await
}

#[instrument(skip(store))]
async fn load(State(store): State<SharedStore>) -> Result<Json<GameDocument>, (StatusCode, String)> {
    store.load_state().await.map(Json).map_err(|e| {
        error!(error = %e, "Load failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })
}

#[instrument(skip(store, doc))]
async fn save(
    State(store): State<SharedStore>,
    Json(doc): Json<GameDocument>,
) -> Result<Json<GameDocument>, (StatusCode, String)> {
    info!(
        player = %doc.state().current_player(),
        position = ?doc.position(),
        winner = ?doc.winner(),
        "Storing game state"
    );
    store.save_state(&doc).await.map_err(|e| {
        error!(error = %e, "Save failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;
    Ok(Json(doc))
}
