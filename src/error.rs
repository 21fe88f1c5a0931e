use thiserror::Error;

use crate::lookup::LookupError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("hyperliquid error: {0}")]
    Hyperliquid(#[from] hyperliquid::HyperliquidError),

    #[error("{0}")]
    Lookup(#[from] LookupError),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("server error: {0}")]
    Server(String),

    #[error("terminal error: {0}")]
    Terminal(String),
}
