//! Badge configuration and manifest loading.
//!
//! A manifest declares the bitmaps a host has decoded and the badge built
//! from them:
//!
//! ```yaml
//! images:
//!   star: { width: 24, height: 24 }
//!   star_outline: { width: 24, height: 24 }
//! badge:
//!   checked_image: star
//!   unchecked_image: star_outline
//!   checked_color: "#FF00FF00"
//!   unchecked_color: "#FFFF0000"
//! ```

use crate::error::ConfigError;
use crate::toggle_badge::ToggleBadge;
use flipbadge_core::{BitmapStore, Color};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

fn default_duration_ms() -> u64 {
    200
}

/// Configuration of a single badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleBadgeConfig {
    /// Image name shown while checked
    #[serde(default)]
    pub checked_image: Option<String>,
    /// Image name shown while unchecked
    #[serde(default)]
    pub unchecked_image: Option<String>,
    /// Disc color while checked (`"#AARRGGBB"`, `"#RRGGBB"` or integer)
    #[serde(default, with = "flipbadge_core::color::argb")]
    pub checked_color: Color,
    /// Disc color while unchecked
    #[serde(default, with = "flipbadge_core::color::argb")]
    pub unchecked_color: Color,
    /// Initial checked state
    #[serde(default)]
    pub checked: bool,
    /// Flip duration in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

impl Default for ToggleBadgeConfig {
    fn default() -> Self {
        Self {
            checked_image: None,
            unchecked_image: None,
            checked_color: Color::TRANSPARENT,
            unchecked_color: Color::TRANSPARENT,
            checked: false,
            duration_ms: default_duration_ms(),
        }
    }
}

impl ToggleBadgeConfig {
    /// Flip duration.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Pixel dimensions of a declared bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSpec {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Declared bitmaps plus one badge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BadgeManifest {
    /// Bitmaps by name
    #[serde(default)]
    pub images: BTreeMap<String, ImageSpec>,
    /// The badge
    #[serde(default)]
    pub badge: ToggleBadgeConfig,
}

impl BadgeManifest {
    /// Parse a manifest from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parse a manifest from TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load a manifest, picking the format from the file extension
    /// (`.yaml`/`.yml` or `.toml`).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unknown extension,
    /// or fails to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let parse: fn(&str) -> Result<Self, ConfigError> = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml,
            "toml" => Self::from_toml,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = parse(&text)?;
        tracing::debug!(
            path = %path.display(),
            images = manifest.images.len(),
            "manifest loaded"
        );
        Ok(manifest)
    }

    /// Register every declared image in a new store.
    #[must_use]
    pub fn bitmap_store(&self) -> BitmapStore {
        let mut store = BitmapStore::new();
        for (name, spec) in &self.images {
            store.insert(name.clone(), spec.width, spec.height);
        }
        store
    }

    /// Image names the badge references that are not declared.
    #[must_use]
    pub fn missing_images(&self) -> Vec<&str> {
        [&self.badge.checked_image, &self.badge.unchecked_image]
            .into_iter()
            .filter_map(Option::as_deref)
            .filter(|name| !self.images.contains_key(*name))
            .collect()
    }

    /// Build the badge together with the store its bitmaps live in.
    #[must_use]
    pub fn build(&self) -> (ToggleBadge, BitmapStore) {
        let store = self.bitmap_store();
        let badge = ToggleBadge::from_config(&self.badge, &store);
        (badge, store)
    }
}
