use btc_block_clock::core::glyph::filled_cells;
use btc_block_clock::core::ClockReport;
use btc_block_clock::{ClockConfig, ClockEngine, CoinGeckoSource, LocalStorage};
use httpmock::prelude::*;
use std::time::Duration;
use tempfile::TempDir;

fn config_for(endpoint: String, timeout_seconds: u64) -> ClockConfig {
    let mut config = ClockConfig::default();
    config.source.endpoint = endpoint;
    config.source.timeout_seconds = timeout_seconds;
    config
}

async fn run_clock(config: ClockConfig, output_dir: &TempDir) -> (ClockReport, String) {
    let source = CoinGeckoSource::from_config(&config).unwrap();
    let storage = LocalStorage::new(output_dir.path());
    let engine = ClockEngine::new(source, storage, config);

    let report = engine.run().await.unwrap();
    let page = std::fs::read_to_string(output_dir.path().join("index.html")).unwrap();
    (report, page)
}

#[tokio::test]
async fn test_price_page_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v3/simple/price")
                .query_param("ids", "bitcoin")
                .query_param("vs_currencies", "usd");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"bitcoin": {"usd": 67845.4}}));
        })
        .await;

    let config = config_for(
        server.url("/api/v3/simple/price?ids=bitcoin&vs_currencies=usd"),
        10,
    );
    let (report, page) = run_clock(config, &temp_dir).await;

    api_mock.assert_async().await;
    assert_eq!(report.display_text.as_str(), "$67,845");
    assert!(!report.used_fallback);
    assert!(report.output_path.ends_with("index.html"));

    assert!(page.contains(r#"aria-label="$67,845""#));
    assert!(page.contains(r#"<meta http-equiv="refresh" content="15">"#));
    assert!(page.contains("Last updated: "));
    assert!(page.contains(" UTC</div>"));

    let expected_squares: usize = "$67,845".chars().map(filled_cells).sum();
    assert_eq!(page.matches("<rect ").count(), expected_squares);
}

#[tokio::test]
async fn test_timeout_renders_error_page() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/slow");
            then.status(200)
                .delay(Duration::from_secs(3))
                .json_body(serde_json::json!({"bitcoin": {"usd": 67845.4}}));
        })
        .await;

    let config = config_for(server.url("/slow"), 1);
    let (report, page) = run_clock(config, &temp_dir).await;

    assert!(report.used_fallback);
    assert_eq!(report.display_text.as_str(), "ERROR");
    assert!(page.contains(r#"aria-label="ERROR""#));
    // every letter degrades to the '0' glyph
    assert_eq!(page.matches("<rect ").count(), 5 * filled_cells('0'));
}

#[tokio::test]
async fn test_missing_field_renders_error_page() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"status": {"error_code": 429}}));
        })
        .await;

    let (report, page) = run_clock(config_for(server.url("/"), 10), &temp_dir).await;

    assert!(report.used_fallback);
    assert!(page.contains("<title>ERROR | Bitcoin Clock</title>"));
    assert!(!page.contains("error_code"));
}

#[tokio::test]
async fn test_error_page_overwrites_previous_price() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("index.html");
    std::fs::write(&output, "stale content from an earlier run").unwrap();

    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(503);
        })
        .await;

    let (report, page) = run_clock(config_for(server.url("/"), 10), &temp_dir).await;

    assert!(report.used_fallback);
    assert!(!page.contains("stale content"));
    assert!(page.starts_with("<!DOCTYPE html>"));
}
