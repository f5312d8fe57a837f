use crate::core::ConfigProvider;
use crate::utils::error::{ClockError, Result};
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "btc-clock.toml";
pub const DEFAULT_ENDPOINT: &str =
    "https://api.coingecko.com/api/v3/simple/price?ids=bitcoin&vs_currencies=usd";

/// Clock settings. Every field has a default, so the file is optional and
/// may override any subset of keys. Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClockConfig {
    pub source: SourceConfig,
    pub page: PageConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    /// Must answer with `{"bitcoin": {"usd": <price>}}`.
    pub endpoint: String,
    pub timeout_seconds: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub output_path: String,
    pub refresh_seconds: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            output_path: "index.html".to_string(),
            refresh_seconds: crate::core::page::DEFAULT_REFRESH_SECONDS,
        }
    }
}

impl ClockConfig {
    /// Load from `path`, or fall back to defaults when the file is absent.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ClockError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ClockError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl ConfigProvider for ClockConfig {
    fn endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn timeout_seconds(&self) -> u64 {
        self.source.timeout_seconds
    }

    fn output_path(&self) -> &str {
        &self.page.output_path
    }

    fn refresh_seconds(&self) -> u64 {
        self.page.refresh_seconds
    }
}

impl Validate for ClockConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source.endpoint", &self.source.endpoint)?;
        validate_range("source.timeout_seconds", self.source.timeout_seconds, 1, 120)?;
        validate_path("page.output_path", &self.page.output_path)?;
        validate_range("page.refresh_seconds", self.page.refresh_seconds, 1, 3600)?;
        Ok(())
    }
}
