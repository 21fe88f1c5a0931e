use std::fmt;

use serde::{Deserialize, Serialize};

/// The `type` values this crate knows how to request from `/info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InfoKind {
    /// Margin summary, withdrawable balance and open positions.
    ClearinghouseState,
    /// Trade history for the user.
    UserFills,
}

impl InfoKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InfoKind::ClearinghouseState => "clearinghouseState",
            InfoKind::UserFills => "userFills",
        }
    }
}

impl fmt::Display for InfoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
