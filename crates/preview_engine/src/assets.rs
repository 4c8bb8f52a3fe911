use std::fs;
use std::io;
use std::path::Path;

use preview_logging::preview_info;
use thiserror::Error;

// File names the packaging ships in the plugin data directory.
const STYLESHEET_FILE: &str = "markdown.css";
const CONVERTER_FILE: &str = "marked.js";
const BOOTSTRAP_FILE: &str = "markdown-view.js";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("preview asset {name} unreadable at {path}: {source}")]
    Unreadable {
        name: &'static str,
        path: String,
        source: io::Error,
    },
}

/// Static assets every preview document embeds: the rendered-Markdown
/// stylesheet, the converter library, and the bootstrap script exposing
/// `preview()`.
///
/// Constructed once at process start and shared read-only by every view.
/// A missing or unreadable asset is fatal to preview availability for the
/// session; there is no degraded mode.
#[derive(Debug, Clone)]
pub struct PreviewAssets {
    pub stylesheet: String,
    pub converter: String,
    pub bootstrap: String,
}

impl PreviewAssets {
    pub fn from_parts(
        stylesheet: impl Into<String>,
        converter: impl Into<String>,
        bootstrap: impl Into<String>,
    ) -> Self {
        Self {
            stylesheet: stylesheet.into(),
            converter: converter.into(),
            bootstrap: bootstrap.into(),
        }
    }

    /// Read all three assets from `dir`, failing on the first one missing.
    pub fn load_from_dir(dir: &Path) -> Result<Self, AssetError> {
        let assets = Self {
            stylesheet: read_asset(dir, STYLESHEET_FILE)?,
            converter: read_asset(dir, CONVERTER_FILE)?,
            bootstrap: read_asset(dir, BOOTSTRAP_FILE)?,
        };
        preview_info!("Loaded preview assets from {:?}", dir);
        Ok(assets)
    }
}

fn read_asset(dir: &Path, name: &'static str) -> Result<String, AssetError> {
    let path = dir.join(name);
    fs::read_to_string(&path).map_err(|source| AssetError::Unreadable {
        name,
        path: path.display().to_string(),
        source,
    })
}
