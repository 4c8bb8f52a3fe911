use std::fs;
use std::path::{Path, PathBuf};

use preview_logging::preview_warn;
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory.
pub const CONFIG_FILENAME: &str = ".preview_app.ron";

/// App configuration, read once at startup.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PreviewConfig {
    /// Directory holding `markdown.css`, `marked.js` and `markdown-view.js`.
    pub assets_dir: Option<PathBuf>,
    /// Also write logs to `./preview.log`.
    pub log_to_file: bool,
}

/// Read the config from `dir`. A missing file falls back to defaults; a
/// malformed one is logged and ignored.
pub fn load_config(dir: &Path) -> PreviewConfig {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return PreviewConfig::default();
        }
        Err(err) => {
            preview_warn!("Failed to read config from {:?}: {}", path, err);
            return PreviewConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => config,
        Err(err) => {
            preview_warn!("Failed to parse config from {:?}: {}", path, err);
            PreviewConfig::default()
        }
    }
}
