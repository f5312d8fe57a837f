pub mod toml_config;

pub use toml_config::{ClockConfig, CONFIG_FILE_NAME};

use std::path::PathBuf;

/// Directory holding the running executable; config and output live here.
/// Falls back to the working directory when it cannot be determined.
pub fn program_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}
