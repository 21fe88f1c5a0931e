pub mod endpoints;

use reqwest::Client;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::HyperliquidConfig;
use crate::error::{HyperliquidError, Result};

/// HTTP client for an info endpoint.
///
/// The endpoint is either the gateway's `/info` or a proxy route that speaks
/// the same `{type, user}` shape; the client does not care which.
#[derive(Debug, Clone)]
pub struct InfoHttpClient {
    client: Client,
    info_url: String,
}

impl InfoHttpClient {
    pub fn new(info_url: &str) -> Self {
        Self {
            client: Client::new(),
            info_url: info_url.to_string(),
        }
    }

    pub fn from_config(config: &HyperliquidConfig) -> Self {
        Self::new(&config.info_url)
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post<B, T>(&self, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let bytes = self.send(body).await?;
        serde_json::from_slice(&bytes).map_err(HyperliquidError::Json)
    }

    /// POST a JSON body and return the response bytes as received, once they
    /// are known to be valid JSON.
    pub async fn post_raw<B>(&self, body: &B) -> Result<Vec<u8>>
    where
        B: Serialize + ?Sized,
    {
        let bytes = self.send(body).await?;
        serde_json::from_slice::<IgnoredAny>(&bytes)?;
        Ok(bytes)
    }

    async fn send<B>(&self, body: &B) -> Result<Vec<u8>>
    where
        B: Serialize + ?Sized,
    {
        let resp = self.client.post(&self.info_url).json(body).send().await?;
        debug!(url = %self.info_url, status = resp.status().as_u16(), "info response");

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(HyperliquidError::Http {
                status,
                message: body,
            });
        }

        Ok(resp.bytes().await?.to_vec())
    }

    /// POST a JSON body and return the response untouched as a JSON value.
    pub async fn post_value<B>(&self, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.post(body).await
    }

    /// Get the endpoint URL.
    pub fn info_url(&self) -> &str {
        &self.info_url
    }
}
