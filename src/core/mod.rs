pub mod clock;
pub mod format;
pub mod glyph;
pub mod page;
pub mod render;

pub use crate::domain::model::{ClockReport, DisplayText, Layout, RenderedImage, Square};
pub use crate::domain::ports::{ConfigProvider, PriceSource, Storage};
pub use crate::utils::error::Result;
