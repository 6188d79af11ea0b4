//! The enhancement service: `POST /enhance` behind axum.
//!
//! The pipeline per request: deterministic heuristic enrichment, then a
//! polishing pass through the configured [`Polisher`].

pub mod heuristics;
pub mod polish;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    Json, Router,
    extract::State,
    http::{Method, StatusCode},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use crate::enhancer::{EnhanceRequest, EnhanceResponse};
use self::polish::Polisher;

pub struct AppState {
    pub polisher: Box<dyn Polisher>,
}

/// Error body, shaped as `{"detail": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    // The browser extension front-end has no origin of its own, so the
    // service accepts any origin for the single POST route.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(healthz))
        .route("/enhance", post(enhance))
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn enhance(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, (StatusCode, Json<ErrorDetail>)> {
    info!(chars = req.user_prompt.len(), "received raw prompt");

    let enriched = heuristics::enrich(&req.user_prompt);

    match state.polisher.polish(&enriched).await {
        Ok(text) => Ok(Json(EnhanceResponse {
            enhanced_prompt: Some(text),
        })),
        Err(e) => {
            error!(%e, "polishing failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDetail {
                    detail: e.to_string(),
                }),
            ))
        }
    }
}

/// Bind and serve until the process is stopped.
pub async fn serve(bind: &str, state: AppState) -> Result<()> {
    let addr: SocketAddr = bind.parse()?;
    let app = build_router(Arc::new(state));

    info!(%addr, "enhancement service listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
