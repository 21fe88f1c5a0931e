use url::Url;

use crate::error::{HyperliquidError, Result};

/// Public mainnet info endpoint.
pub const MAINNET_INFO_URL: &str = "https://api.hyperliquid.xyz/info";

/// Configuration for the Hyperliquid info client.
#[derive(Debug, Clone)]
pub struct HyperliquidConfig {
    /// Full URL of the info endpoint (gateway `/info` or a proxy route).
    pub info_url: String,
}

impl HyperliquidConfig {
    /// Build a config for `info_url`, rejecting anything that is not an
    /// absolute `http(s)` URL.
    pub fn new(info_url: &str) -> Result<Self> {
        let parsed = Url::parse(info_url)
            .map_err(|e| HyperliquidError::Config(format!("invalid info url {info_url:?}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(HyperliquidError::Config(format!(
                "unsupported scheme {:?} in {info_url:?}",
                parsed.scheme()
            )));
        }
        Ok(Self {
            info_url: info_url.to_string(),
        })
    }
}

impl Default for HyperliquidConfig {
    fn default() -> Self {
        Self {
            info_url: MAINNET_INFO_URL.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_mainnet() {
        assert_eq!(HyperliquidConfig::default().info_url, MAINNET_INFO_URL);
    }

    #[test]
    fn test_new_accepts_http_urls() {
        let cfg = HyperliquidConfig::new("http://127.0.0.1:3000/api/hyperliquid").unwrap();
        assert_eq!(cfg.info_url, "http://127.0.0.1:3000/api/hyperliquid");
    }

    #[test]
    fn test_new_rejects_garbage_and_other_schemes() {
        assert!(matches!(
            HyperliquidConfig::new("not a url"),
            Err(HyperliquidError::Config(_))
        ));
        assert!(matches!(
            HyperliquidConfig::new("ftp://api.hyperliquid.xyz/info"),
            Err(HyperliquidError::Config(_))
        ));
    }
}
