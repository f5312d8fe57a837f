use crate::utils::error::{ClockError, Result};
use std::fmt;

/// Sizing of the block display, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    block: u32,
    gap: u32,
    margin: u32,
}

impl Layout {
    pub fn new(block: u32, gap: u32, margin: u32) -> Result<Self> {
        if block == 0 {
            return Err(ClockError::InvalidConfigValueError {
                field: "block".to_string(),
                value: block.to_string(),
                reason: "Block size must be greater than 0".to_string(),
            });
        }
        Ok(Self { block, gap, margin })
    }

    pub fn block(&self) -> u32 {
        self.block
    }

    pub fn gap(&self) -> u32 {
        self.gap
    }

    pub fn margin(&self) -> u32 {
        self.margin
    }

    /// Distance between the origins of two neighbouring cells in a glyph.
    pub fn pitch(&self) -> u32 {
        self.block + self.gap
    }

    pub fn char_width(&self) -> u32 {
        3 * self.block + 2 * self.gap
    }

    pub fn char_height(&self) -> u32 {
        5 * self.block + 4 * self.gap
    }

    pub fn char_gap(&self) -> u32 {
        self.block
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            block: 28,
            gap: 8,
            margin: 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub x: u32,
    pub y: u32,
    pub size: u32,
}

impl Square {
    pub fn overlaps(&self, other: &Square) -> bool {
        self.x < other.x + other.size
            && other.x < self.x + self.size
            && self.y < other.y + other.size
            && other.y < self.y + self.size
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    pub label: String,
    pub squares: Vec<Square>,
    pub width: u32,
    pub height: u32,
}

/// Text shown on the clock: a formatted price or the error sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayText(String);

impl DisplayText {
    pub const ERROR: &'static str = "ERROR";

    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn error() -> Self {
        Self(Self::ERROR.to_string())
    }

    pub fn is_error(&self) -> bool {
        self.0 == Self::ERROR
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of one fetch-render-write cycle.
#[derive(Debug, Clone)]
pub struct ClockReport {
    pub display_text: DisplayText,
    pub output_path: String,
    pub used_fallback: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_rejects_zero_block() {
        assert!(Layout::new(0, 8, 20).is_err());
        assert!(Layout::new(1, 0, 0).is_ok());
    }

    #[test]
    fn test_layout_derived_sizes() {
        let layout = Layout::default();
        assert_eq!(layout.char_width(), 3 * 28 + 2 * 8);
        assert_eq!(layout.char_height(), 5 * 28 + 4 * 8);
        assert_eq!(layout.char_gap(), 28);
        assert_eq!(layout.pitch(), 36);
    }

    #[test]
    fn test_square_overlap() {
        let a = Square { x: 0, y: 0, size: 10 };
        let touching = Square { x: 10, y: 0, size: 10 };
        let inside = Square { x: 5, y: 5, size: 10 };
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
    }

    #[test]
    fn test_display_text_error_sentinel() {
        assert!(DisplayText::error().is_error());
        assert!(!DisplayText::new("$67,845").is_error());
        assert_eq!(DisplayText::new("$1").to_string(), "$1");
    }
}
