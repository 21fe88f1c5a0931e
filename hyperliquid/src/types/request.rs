use serde::{Deserialize, Serialize};

use super::enums::InfoKind;
use crate::address::WalletAddress;

/// Body of a `POST /info` call: `{"type": ..., "user": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub user: String,
}

impl InfoRequest {
    pub fn new(kind: InfoKind, user: &WalletAddress) -> Self {
        Self {
            kind: kind.as_str().to_string(),
            user: user.as_str().to_string(),
        }
    }

    pub fn clearinghouse_state(user: &WalletAddress) -> Self {
        Self::new(InfoKind::ClearinghouseState, user)
    }

    pub fn user_fills(user: &WalletAddress) -> Self {
        Self::new(InfoKind::UserFills, user)
    }
}
