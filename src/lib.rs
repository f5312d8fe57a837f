pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{coingecko::CoinGeckoSource, storage::LocalStorage};
pub use crate::config::ClockConfig;
pub use crate::core::{clock::ClockEngine, page::assemble, render::render};
pub use crate::utils::error::{ClockError, Result};
