//! Wallet address validation.
//!
//! Hyperliquid accounts are identified by EVM-style addresses: `0x` followed
//! by 40 hexadecimal characters. Addresses are checked here, before anything
//! touches the network.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{HyperliquidError, Result};

/// Number of hex characters after the `0x` prefix.
const ADDRESS_HEX_LEN: usize = 40;

/// A syntactically valid wallet address, kept exactly as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Validate `input` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns [`HyperliquidError::InvalidAddress`] unless `input` is `0x`
    /// followed by exactly 40 hex digits (either case).
    pub fn parse(input: &str) -> Result<Self> {
        let digits = input
            .strip_prefix("0x")
            .ok_or_else(|| HyperliquidError::InvalidAddress(input.to_string()))?;
        if digits.len() != ADDRESS_HEX_LEN || hex::decode(digits).is_err() {
            return Err(HyperliquidError::InvalidAddress(input.to_string()));
        }
        Ok(Self(input.to_string()))
    }

    /// Returns `true` if `input` would parse.
    pub fn is_valid(input: &str) -> bool {
        Self::parse(input).is_ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated form for display, e.g. `0x1234...abcd`.
    pub fn short(&self) -> String {
        let s = &self.0;
        format!("{}...{}", &s[..6], &s[s.len() - 4..])
    }
}

impl FromStr for WalletAddress {
    type Err = HyperliquidError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for WalletAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for WalletAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
