pub mod address;
pub mod config;
pub mod error;
pub mod filter;
pub mod rest;
pub mod types;
pub mod volume;

// ---- Top-level re-exports for ergonomic usage ----

// Config + errors
pub use config::HyperliquidConfig;
pub use error::{HyperliquidError, Result};

// Wallet address
pub use address::WalletAddress;

// REST client
pub use rest::InfoHttpClient;

// Wire types
pub use types::{
    fills_from_value, parse_decimal_or_zero, AccountSnapshot, AssetPosition, CrossMarginSummary,
    Fill, InfoKind, InfoRequest, MarginSummary, Position,
};

// Aggregation + filtering
pub use filter::{apply_filter, PairTotals};
pub use volume::{aggregate, VolumeReport, UNKNOWN_PAIR};
