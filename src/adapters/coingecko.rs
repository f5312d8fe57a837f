use crate::core::{ConfigProvider, PriceSource};
use crate::utils::error::{ClockError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const ASSET: &str = "bitcoin";
pub const CURRENCY: &str = "usd";

/// Bitcoin/USD quotes from a CoinGecko-style `simple/price` endpoint, which
/// answers with `{"bitcoin": {"usd": <price>}}`.
pub struct CoinGeckoSource {
    client: Client,
    endpoint: String,
}

impl CoinGeckoSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(
            config.endpoint(),
            Duration::from_secs(config.timeout_seconds()),
        )
    }
}

#[async_trait]
impl PriceSource for CoinGeckoSource {
    async fn fetch_price(&self) -> Result<f64> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(ClockError::HttpStatusError {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let json: serde_json::Value = serde_json::from_str(&body)?;
        extract_price(&json)
    }
}

/// Read `json.bitcoin.usd` as a finite number.
pub fn extract_price(json: &serde_json::Value) -> Result<f64> {
    let field = json
        .get(ASSET)
        .and_then(|quotes| quotes.get(CURRENCY))
        .ok_or_else(|| ClockError::MissingFieldError {
            path: format!("{}.{}", ASSET, CURRENCY),
        })?;

    let price = field.as_f64().ok_or_else(|| ClockError::InvalidPriceError {
        reason: format!("expected a number, got {}", field),
    })?;

    if !price.is_finite() {
        return Err(ClockError::InvalidPriceError {
            reason: format!("price is not finite: {}", price),
        });
    }
    Ok(price)
}
