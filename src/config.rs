//! Application configuration.
//!
//! Every setting is resolved as: command-line flag, then environment variable
//! (a `.env` file is loaded first by `main`), then the built-in default.

use std::net::SocketAddr;

use hyperliquid::config::MAINNET_INFO_URL;
use hyperliquid::HyperliquidConfig;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

pub const ENV_GATEWAY_URL: &str = "HYPERLIQUID_INFO_URL";
pub const ENV_BIND: &str = "HLVOL_BIND";
pub const ENV_PROXY_URL: &str = "HLVOL_PROXY_URL";
pub const ENV_LOG: &str = "RUST_LOG";

/// Default proxy listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Settings given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub gateway_url: Option<String>,
    pub bind: Option<String>,
    pub proxy_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Hyperliquid info endpoint the proxy (or a direct client) talks to.
    pub gateway_url: String,
    /// Proxy listen address.
    pub bind: SocketAddr,
    /// When set, clients go through this proxy route instead of the gateway.
    pub proxy_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gateway_url: MAINNET_INFO_URL.into(),
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            proxy_url: None,
        }
    }
}

impl AppConfig {
    /// Resolve against the process environment.
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self, AppError> {
        Self::resolve_with(overrides, |key| std::env::var(key).ok())
    }

    /// Resolve with a custom environment lookup.
    pub fn resolve_with<F>(overrides: ConfigOverrides, env: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let gateway_url = overrides
            .gateway_url
            .or_else(|| var(ENV_GATEWAY_URL))
            .unwrap_or_else(|| MAINNET_INFO_URL.to_string());
        HyperliquidConfig::new(&gateway_url)?;

        let bind_str = overrides
            .bind
            .or_else(|| var(ENV_BIND))
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_str
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("invalid bind address {bind_str:?}: {e}")))?;

        let proxy_url = overrides.proxy_url.or_else(|| var(ENV_PROXY_URL));
        if let Some(url) = &proxy_url {
            HyperliquidConfig::new(url)?;
        }

        Ok(Self {
            gateway_url,
            bind,
            proxy_url,
        })
    }

    /// Endpoint a lookup client should use: the proxy if configured,
    /// otherwise the gateway.
    pub fn client_info_url(&self) -> &str {
        self.proxy_url.as_deref().unwrap_or(&self.gateway_url)
    }
}

/// Build the log filter: `RUST_LOG` directives when set, otherwise every
/// target at `log_level` (an unknown level reads as `info`).
pub fn log_filter(log_level: &str, directives: Option<&str>) -> EnvFilter {
    let level = log_level.parse::<LevelFilter>().unwrap_or(LevelFilter::INFO);
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(directives.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::resolve_with(ConfigOverrides::default(), env_from(&[])).unwrap();
        assert_eq!(cfg.gateway_url, MAINNET_INFO_URL);
        assert_eq!(cfg.bind.to_string(), DEFAULT_BIND);
        assert!(cfg.proxy_url.is_none());
        assert_eq!(cfg.client_info_url(), MAINNET_INFO_URL);
    }

    #[test]
    fn test_env_fills_in_missing_flags() {
        let env = env_from(&[
            (ENV_GATEWAY_URL, "http://localhost:9000/info"),
            (ENV_BIND, "0.0.0.0:8080"),
            (ENV_PROXY_URL, "http://localhost:8080/api/hyperliquid"),
        ]);
        let cfg = AppConfig::resolve_with(ConfigOverrides::default(), env).unwrap();
        assert_eq!(cfg.gateway_url, "http://localhost:9000/info");
        assert_eq!(cfg.bind.port(), 8080);
        assert_eq!(cfg.client_info_url(), "http://localhost:8080/api/hyperliquid");
    }

    #[test]
    fn test_flags_win_over_env() {
        let env = env_from(&[(ENV_GATEWAY_URL, "http://env/info"), (ENV_BIND, "0.0.0.0:1")]);
        let overrides = ConfigOverrides {
            gateway_url: Some("http://flag/info".into()),
            bind: Some("127.0.0.1:4000".into()),
            proxy_url: None,
        };
        let cfg = AppConfig::resolve_with(overrides, env).unwrap();
        assert_eq!(cfg.gateway_url, "http://flag/info");
        assert_eq!(cfg.bind.port(), 4000);
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let env = env_from(&[(ENV_PROXY_URL, "  ")]);
        let cfg = AppConfig::resolve_with(ConfigOverrides::default(), env).unwrap();
        assert!(cfg.proxy_url.is_none());
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let bad_bind = ConfigOverrides {
            bind: Some("localhost".into()),
            ..Default::default()
        };
        assert!(matches!(
            AppConfig::resolve_with(bad_bind, env_from(&[])),
            Err(AppError::Config(_))
        ));

        let bad_url = ConfigOverrides {
            proxy_url: Some("nope".into()),
            ..Default::default()
        };
        assert!(matches!(
            AppConfig::resolve_with(bad_url, env_from(&[])),
            Err(AppError::Hyperliquid(_))
        ));
    }

    #[test]
    fn test_log_filter_uses_level_flag() {
        assert_eq!(log_filter("debug", None).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter("loud", None).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_log_filter_prefers_directives() {
        let filter = log_filter("warn", Some("hyperliquid=trace"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }
}
