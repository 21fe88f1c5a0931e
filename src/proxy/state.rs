use hyperliquid::InfoHttpClient;

/// Shared proxy state.
#[derive(Debug, Clone)]
pub struct ProxyState {
    /// Client for the upstream info endpoint.
    pub gateway: InfoHttpClient,
}

impl ProxyState {
    pub fn new(gateway_url: &str) -> Self {
        Self {
            gateway: InfoHttpClient::new(gateway_url),
        }
    }
}
