use crate::core::glyph::pattern_for;
use crate::domain::model::{Layout, RenderedImage, Square};

pub const CORNER_RADIUS: u32 = 4;
pub const FILL_COLOR: &str = "#000000";

/// Lay out `text` as 3×5 block glyphs, left to right.
///
/// Squares come out in character order and row-major within a character.
/// Characters without a pattern use the '0' glyph; this never fails.
/// An empty string yields no squares and a canvas that is only margins.
pub fn render(text: &str, layout: &Layout) -> RenderedImage {
    let pitch = layout.pitch();
    let advance = layout.char_width() + layout.char_gap();

    let mut squares = Vec::new();
    let mut x_cursor = layout.margin();
    for ch in text.chars() {
        for (row, cells) in pattern_for(ch).iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == 1 {
                    squares.push(Square {
                        x: x_cursor + col as u32 * pitch,
                        y: layout.margin() + row as u32 * pitch,
                        size: layout.block(),
                    });
                }
            }
        }
        x_cursor += advance;
    }

    let (width, height) = canvas_size(text.chars().count() as u32, layout);

    RenderedImage {
        label: text.to_string(),
        squares,
        width,
        height,
    }
}

pub fn canvas_size(char_count: u32, layout: &Layout) -> (u32, u32) {
    let width = 2 * layout.margin()
        + char_count * layout.char_width()
        + char_count.saturating_sub(1) * layout.char_gap();
    let height = 2 * layout.margin() + layout.char_height();
    (width, height)
}

impl RenderedImage {
    /// Serialize as a standalone SVG with a transparent background.
    pub fn to_svg(&self) -> String {
        let label = escape_xml(&self.label);
        let rects: String = self
            .squares
            .iter()
            .map(|square| {
                format!(
                    r#"<rect x="{}" y="{}" width="{s}" height="{s}" rx="{r}" ry="{r}" />"#,
                    square.x,
                    square.y,
                    s = square.size,
                    r = CORNER_RADIUS,
                )
            })
            .collect();

        format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img" aria-label="{label}">
  <title>{label}</title>
  <g fill="{fill}">
    {rects}
  </g>
</svg>"##,
            w = self.width,
            h = self.height,
            label = label,
            fill = FILL_COLOR,
            rects = rects,
        )
    }
}

pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
