use tracing::debug;

use crate::address::WalletAddress;
use crate::error::Result;
use crate::rest::InfoHttpClient;
use crate::types::*;

impl InfoHttpClient {
    /// POST /info `clearinghouseState` - Margin summary and open positions.
    pub async fn clearinghouse_state(&self, user: &WalletAddress) -> Result<AccountSnapshot> {
        let value = self
            .post_value(&InfoRequest::clearinghouse_state(user))
            .await?;
        Ok(AccountSnapshot::from_value(value))
    }

    /// POST /info `userFills` - Trade history. A non-array answer is no fills.
    pub async fn user_fills(&self, user: &WalletAddress) -> Result<Vec<Fill>> {
        let value = self.post_value(&InfoRequest::user_fills(user)).await?;
        let fills = fills_from_value(value);
        debug!(user = %user, count = fills.len(), "fetched fills");
        Ok(fills)
    }
}
