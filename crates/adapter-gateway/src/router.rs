//! # HTTP Router
//!
//! Route construction and request handlers. Handlers delegate straight
//! to the core proposer/resolver; the only logic here is JSON shape
//! and error mapping.

use crate::error::ApiError;
use adapter_core::{
    AdapterError, Deal, DealId, DealProposer, DealResolver, DealStore, ProposeDealRequest,
    Resolution, SigningIdentity,
};
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state: one identity, one store, and the two
/// orchestrators over them.
#[derive(Clone)]
pub struct AppState {
    proposer: Arc<DealProposer>,
    resolver: Arc<DealResolver>,
    identity: Arc<SigningIdentity>,
    store: Arc<DealStore>,
}

impl AppState {
    /// Wire up the core around a signing identity.
    pub fn new(identity: Arc<SigningIdentity>) -> Self {
        let store = Arc::new(DealStore::new());
        Self {
            proposer: Arc::new(DealProposer::new(
                Arc::clone(&identity),
                Arc::clone(&store),
            )),
            resolver: Arc::new(DealResolver::new(Arc::clone(&store))),
            identity,
            store,
        }
    }
}

/// Body of a resolution request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveDealRequest {
    /// Id of a previously proposed deal.
    pub id: DealId,
}

/// Build the adapter's router with request tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/propose_deal", post(propose_deal))
        .route("/resolve_deal", post(resolve_deal))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `POST /propose_deal`: sign and store a proposed deal, returning
/// the complete record.
async fn propose_deal(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<Deal>, ApiError> {
    let request: ProposeDealRequest =
        serde_json::from_value(body).map_err(|e| AdapterError::Decoding {
            reason: format!("invalid proposal body: {e}"),
        })?;

    let deal = state.proposer.propose(request)?;
    Ok(Json((*deal).clone()))
}

/// `POST /resolve_deal`: return the outcome tag for a deal id.
async fn resolve_deal(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<Resolution>, ApiError> {
    let request: ResolveDealRequest =
        serde_json::from_value(body).map_err(|e| AdapterError::Decoding {
            reason: format!("invalid resolution body: {e}"),
        })?;

    let resolution = state.resolver.resolve(request.id)?;
    Ok(Json(resolution))
}

/// `GET /health`: liveness plus the signer address callers must
/// configure on-chain.
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "adapter-gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "signer": state.identity.address_hex(),
        "deals": state.store.len(),
    }))
}
