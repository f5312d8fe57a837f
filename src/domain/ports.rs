use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Human-readable location `path` resolves to, for reporting.
    fn location(&self, path: &str) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn output_path(&self) -> &str;
    fn refresh_seconds(&self) -> u64;
}

#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Current Bitcoin price in US dollars.
    async fn fetch_price(&self) -> Result<f64>;
}
