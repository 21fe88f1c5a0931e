//! Info proxy: forwards `{type, user}` bodies to the Hyperliquid gateway.

pub mod handler;
pub mod routes;
pub mod server;
pub mod state;

pub use handler::{ProxyError, ProxyRequest, PROXY_FAILURE_MESSAGE};
pub use routes::create_router;
pub use server::ProxyServer;
pub use state::ProxyState;
