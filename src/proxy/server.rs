//! Proxy HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::routes::{create_router, PROXY_PATH};
use super::state::ProxyState;
use crate::error::AppError;

pub struct ProxyServer {
    bind: SocketAddr,
    state: Arc<ProxyState>,
}

impl ProxyServer {
    pub fn new(bind: SocketAddr, gateway_url: &str) -> Self {
        Self {
            bind,
            state: Arc::new(ProxyState::new(gateway_url)),
        }
    }

    pub fn state(&self) -> &Arc<ProxyState> {
        &self.state
    }

    /// Serve until `cancel` fires, then drain in-flight requests and return.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Server`] if the listener cannot bind or the server
    /// fails while running.
    pub async fn run(self, cancel: CancellationToken) -> Result<(), AppError> {
        let app = create_router(self.state.clone());

        let listener = TcpListener::bind(self.bind)
            .await
            .map_err(|e| AppError::Server(format!("failed to bind to {}: {e}", self.bind)))?;

        info!(
            addr = %self.bind,
            route = PROXY_PATH,
            gateway = %self.state.gateway.info_url(),
            "proxy listening"
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(cancel.cancelled_owned())
            .await
            .map_err(|e| AppError::Server(format!("server error: {e}")))?;

        info!("proxy shut down");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_gateway_url() {
        let server = ProxyServer::new(
            SocketAddr::from(([127, 0, 0, 1], 0)),
            "http://127.0.0.1:9/info",
        );
        assert_eq!(server.state().gateway.info_url(), "http://127.0.0.1:9/info");
    }

    #[tokio::test]
    async fn test_run_returns_after_cancel() {
        let server = ProxyServer::new(
            SocketAddr::from(([127, 0, 0, 1], 0)),
            "http://127.0.0.1:9/info",
        );
        let cancel = CancellationToken::new();
        cancel.cancel();
        server.run(cancel).await.unwrap();
    }
}
