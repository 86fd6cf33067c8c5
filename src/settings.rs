//! Search settings persistence
//!
//! Saves and loads [`SearchConfig`] to/from a JSON file.
//!
//! # Error Handling
//!
//! - Load failures fall back to default settings with a warning
//! - Save failures are returned to the caller

use crate::error::AppResult;
use chess_engine::SearchConfig;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Default settings filename
pub const SETTINGS_FILENAME: &str = "chess_ai.json";

/// Load settings, falling back to defaults when the file is missing or invalid
pub fn load_settings(path: &Path) -> SearchConfig {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return SearchConfig::default();
    }

    match read_settings(path) {
        Ok(config) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            config
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            SearchConfig::default()
        }
    }
}

/// Strict variant of [`load_settings`]
///
/// # Errors
///
/// Returns I/O errors for unreadable files and serialization errors for
/// malformed JSON.
pub fn read_settings(path: &Path) -> AppResult<SearchConfig> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write settings as pretty JSON, creating the parent directory if needed
///
/// # Errors
///
/// Returns I/O errors from directory creation or the write itself.
pub fn save_settings(path: &Path, config: &SearchConfig) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
