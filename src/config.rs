//! Export settings, persisted as JSON

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Settings shared by the raster and markup exporters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Whether shapes are anti-aliased when rasterized
    #[serde(default)]
    pub anti_alias: bool,
    /// JPEG quality (1-100)
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
    /// Width and height written into the markup document header
    #[serde(default = "default_markup_canvas")]
    pub markup_canvas: (u32, u32),
}

fn default_jpeg_quality() -> u8 {
    75
}

fn default_markup_canvas() -> (u32, u32) {
    (1000, 1000)
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            // Aliased edges, like the editor's own canvas
            anti_alias: false,
            jpeg_quality: default_jpeg_quality(),
            markup_canvas: default_markup_canvas(),
        }
    }
}

impl ExportConfig {
    /// Load configuration from disk, or return defaults if unavailable
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => config,
                Err(err) => {
                    log::warn!(
                        "Error parsing config {}, using defaults: {}",
                        path.display(),
                        err
                    );
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!(
                    "Could not read config {}, using defaults: {}",
                    path.display(),
                    err
                );
                Self::default()
            }
        }
    }

    /// Save configuration to disk
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// JPEG quality clamped to the range the encoder accepts
    pub fn jpeg_quality(&self) -> u8 {
        self.jpeg_quality.clamp(1, 100)
    }
}
