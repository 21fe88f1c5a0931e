//! Wallet lookup: account state, then fills, then aggregation.

use hyperliquid::{
    aggregate, AccountSnapshot, HyperliquidError, InfoHttpClient, VolumeReport, WalletAddress,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

/// Why a lookup produced nothing to show. `Display` is the message shown to
/// the user.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Please enter a valid wallet address (format: 0x followed by 40 hex characters)")]
    InvalidAddress(String),

    #[error("No data found for this address. Check that the wallet has activity on Hyperliquid.")]
    NoData,

    #[error("Unable to fetch data from Hyperliquid")]
    Transport(#[source] HyperliquidError),
}

/// Everything one successful lookup yields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupData {
    pub address: WalletAddress,
    pub account: AccountSnapshot,
    pub report: VolumeReport,
    /// The fills request failed and volume figures are zero as a result.
    pub fills_unavailable: bool,
}

/// Validate user input as a wallet address.
pub fn validate_address(input: &str) -> Result<WalletAddress, LookupError> {
    WalletAddress::parse(input).map_err(|_| LookupError::InvalidAddress(input.to_string()))
}

/// Run one lookup against `client`.
///
/// The fills request is only made once the account request succeeded and
/// returned data. A failed fills request degrades to zero fills instead of
/// failing the lookup.
pub async fn lookup(
    client: &InfoHttpClient,
    address: &WalletAddress,
) -> Result<LookupData, LookupError> {
    let account = client.clearinghouse_state(address).await.map_err(|e| {
        warn!(user = %address, error = %e, "clearinghouseState request failed");
        LookupError::Transport(e)
    })?;

    if !account.has_data() {
        info!(user = %address, "no account data");
        return Err(LookupError::NoData);
    }

    let (fills, fills_unavailable) = match client.user_fills(address).await {
        Ok(fills) => (fills, false),
        Err(e) => {
            warn!(user = %address, error = %e, "userFills request failed, volume unavailable");
            (Vec::new(), true)
        }
    };

    let report = aggregate(&fills);
    info!(
        user = %address,
        trades = report.trades_count,
        volume = report.total_volume,
        pairs = report.volume_by_pair.len(),
        "lookup complete"
    );

    Ok(LookupData {
        address: address.clone(),
        account,
        report,
        fills_unavailable,
    })
}
