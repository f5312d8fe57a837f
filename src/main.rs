use anyhow::Context;
use btc_block_clock::config::{program_dir, CONFIG_FILE_NAME};
use btc_block_clock::utils::{logger, validation::Validate};
use btc_block_clock::{ClockConfig, ClockEngine, CoinGeckoSource, LocalStorage};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    logger::init_logger();

    let base_dir = program_dir();
    let config_path = base_dir.join(CONFIG_FILE_NAME);
    let config = ClockConfig::load_or_default(&config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;
    config.validate().context("invalid clock configuration")?;
    tracing::debug!("Clock config: {:?}", config);

    let source = CoinGeckoSource::from_config(&config).context("failed to build HTTP client")?;
    let storage = LocalStorage::new(base_dir);
    let engine = ClockEngine::new(source, storage, config);

    let report = engine.run().await.context("failed to write clock page")?;
    if report.used_fallback {
        tracing::warn!("Page written with {} display", report.display_text);
    } else {
        tracing::info!("Page shows {}", report.display_text);
    }
    tracing::info!("Output saved to: {}", report.output_path);

    Ok(())
}
