use crate::core::render::escape_xml;
use crate::domain::model::RenderedImage;
use chrono::{DateTime, Utc};

pub const DEFAULT_REFRESH_SECONDS: u64 = 15;
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Wrap the image in a self-refreshing HTML page.
pub fn assemble(display_text: &str, image: &RenderedImage, timestamp: &str) -> String {
    assemble_with_refresh(display_text, image, timestamp, DEFAULT_REFRESH_SECONDS)
}

/// Same as [`assemble`] with an explicit meta-refresh interval.
///
/// No scripts or external stylesheets: e-readers ship minimal browsers.
pub fn assemble_with_refresh(
    display_text: &str,
    image: &RenderedImage,
    timestamp: &str,
    refresh_seconds: u64,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} | Bitcoin Clock</title>
  <meta http-equiv="refresh" content="{refresh}">
  <style>
    html, body {{
      height: 100%;
      margin: 0;
      background: #ffffff;
      color: #000000;
      display: flex;
      align-items: center;
      justify-content: center;
      font-family: monospace;
    }}
    .wrap {{
      text-align: center;
    }}
    .wrap svg {{
      max-width: 100vw;
      height: auto;
    }}
    .updated {{
      margin-top: 12px;
      font-size: 14px;
      color: #444;
    }}
  </style>
</head>
<body>
  <div class="wrap">
    {svg}
    <div class="updated">Last updated: {timestamp}</div>
  </div>
</body>
</html>"#,
        title = escape_xml(display_text),
        refresh = refresh_seconds,
        svg = image.to_svg(),
        timestamp = escape_xml(timestamp),
    )
}
