use crate::core::format::format_price;
use crate::core::page::{assemble_with_refresh, format_timestamp};
use crate::core::render::render;
use crate::core::{ClockReport, ConfigProvider, DisplayText, Layout, PriceSource, Storage};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};

/// Pick the text to show for a fetch outcome. Failures become `ERROR`.
pub fn display_text_for(outcome: Result<f64>) -> DisplayText {
    match outcome.and_then(format_price) {
        Ok(text) => DisplayText::new(text),
        Err(e) => {
            tracing::warn!("Price unavailable, showing {}: {}", DisplayText::ERROR, e);
            DisplayText::error()
        }
    }
}

pub struct ClockEngine<P: PriceSource, S: Storage, C: ConfigProvider> {
    source: P,
    storage: S,
    config: C,
    layout: Layout,
}

impl<P: PriceSource, S: Storage, C: ConfigProvider> ClockEngine<P, S, C> {
    pub fn new(source: P, storage: S, config: C) -> Self {
        Self {
            source,
            storage,
            config,
            layout: Layout::default(),
        }
    }

    /// One fetch-render-write cycle stamped with the current time.
    pub async fn run(&self) -> Result<ClockReport> {
        self.run_at(Utc::now()).await
    }

    /// Only a failed write is an error; fetch failures render `ERROR`.
    pub async fn run_at(&self, now: DateTime<Utc>) -> Result<ClockReport> {
        tracing::debug!("Fetching price");
        let outcome = self.source.fetch_price().await;
        if let Ok(price) = &outcome {
            tracing::info!("Fetched BTC/USD price: {}", price);
        }

        let display_text = display_text_for(outcome);
        let image = render(display_text.as_str(), &self.layout);
        tracing::debug!(
            "Rendered '{}' as {} squares ({}x{})",
            display_text,
            image.squares.len(),
            image.width,
            image.height
        );

        let page = assemble_with_refresh(
            display_text.as_str(),
            &image,
            &format_timestamp(now),
            self.config.refresh_seconds(),
        );

        let output_path = self.config.output_path();
        self.storage.write_file(output_path, page.as_bytes()).await?;
        let location = self.storage.location(output_path);
        tracing::info!("Wrote {} bytes to {}", page.len(), location);

        Ok(ClockReport {
            used_fallback: display_text.is_error(),
            display_text,
            output_path: location,
        })
    }
}
