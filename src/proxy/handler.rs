//! Proxy request handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use hyperliquid::HyperliquidError;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, error, info};

use super::state::ProxyState;

/// The only error text a proxy caller ever sees.
pub const PROXY_FAILURE_MESSAGE: &str = "Failed to fetch data from Hyperliquid";

/// Keys copied from the caller's body into the upstream one.
const FORWARDED_KEYS: [&str; 2] = ["type", "user"];

/// Upstream body built from the caller's. `type` and `user` are copied as
/// given, `null` included; a missing key stays missing and anything else is
/// dropped.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct ProxyRequest(Map<String, Value>);

impl ProxyRequest {
    /// Parse a raw request body, which must be a JSON object.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut body: Map<String, Value> = serde_json::from_slice(body)?;
        let mut forwarded = Map::new();
        for key in FORWARDED_KEYS {
            if let Some(value) = body.remove(key) {
                forwarded.insert(key.to_string(), value);
            }
        }
        Ok(Self(forwarded))
    }

    pub fn kind(&self) -> Option<&Value> {
        self.0.get("type")
    }

    pub fn user(&self) -> Option<&Value> {
        self.0.get("user")
    }
}

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("invalid request body: {0}")]
    Body(#[from] serde_json::Error),

    #[error("gateway request failed: {0}")]
    Gateway(#[from] HyperliquidError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        // Detail stays in the server log.
        error!(error = %self, "proxy request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: PROXY_FAILURE_MESSAGE,
            }),
        )
            .into_response()
    }
}

/// `POST /api/hyperliquid` - relay the body to the gateway and its JSON back
/// byte for byte.
pub async fn forward(
    State(state): State<Arc<ProxyState>>,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let request = ProxyRequest::from_slice(&body)?;
    info!(kind = ?request.kind(), user = ?request.user(), "proxying info request");

    let data = state.gateway.post_raw(&request).await?;
    debug!(bytes = data.len(), "gateway response relayed");

    Ok(([(header::CONTENT_TYPE, "application/json")], data).into_response())
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
