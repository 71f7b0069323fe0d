//! Segmentation tuning loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file) yields the
//! standard cut points:
//!
//! ```toml
//! tip_fraction = 0.15
//! mid_fraction = 0.40
//! face_fraction = 0.15
//! face_normal_cutoff = 0.5
//! handle_keyword = "handle"
//! barrel_keyword = "barrel"
//! recenter = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Segmentation parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SegmentationConfig {
    /// End of the tip (knob) zone as a fraction of the dominant-axis range.
    pub tip_fraction: f32,
    /// End of the mid (handle) zone as a fraction of the dominant-axis range.
    pub mid_fraction: f32,
    /// Depth of the face zone at each knob end, as a fraction of the knob's range.
    pub face_fraction: f32,
    /// Minimum outward normal component for a knob triangle to count as face.
    pub face_normal_cutoff: f32,
    /// Case-insensitive substring marking handle nodes.
    pub handle_keyword: String,
    /// Case-insensitive substring marking barrel nodes.
    pub barrel_keyword: String,
    /// Move the object so its bounding box is centered on the origin.
    pub recenter: bool,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            tip_fraction: 0.15,
            mid_fraction: 0.40,
            face_fraction: 0.15,
            face_normal_cutoff: 0.5,
            handle_keyword: "handle".into(),
            barrel_keyword: "barrel".into(),
            recenter: false,
        }
    }
}

impl SegmentationConfig {
    /// Returns this config with recentering switched on or off.
    #[must_use]
    pub fn with_recenter(mut self, recenter: bool) -> Self {
        self.recenter = recenter;
        self
    }

    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Self::parse(text, PathBuf::from("<inline>"))
    }

    /// Read, parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path.to_path_buf())
    }

    fn parse(text: &str, path: PathBuf) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(text).map_err(|source| ConfigError::Parse { path, source })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is within its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tip_fraction > 0.0 && self.tip_fraction <= 1.0) {
            return Err(invalid("tip_fraction", "must be in (0, 1]"));
        }
        if !(self.mid_fraction >= self.tip_fraction && self.mid_fraction <= 1.0) {
            return Err(invalid(
                "mid_fraction",
                "must be in [tip_fraction, 1]",
            ));
        }
        if !(self.face_fraction > 0.0 && self.face_fraction <= 0.5) {
            return Err(invalid("face_fraction", "must be in (0, 0.5]"));
        }
        if !(self.face_normal_cutoff >= 0.0 && self.face_normal_cutoff < 1.0) {
            return Err(invalid("face_normal_cutoff", "must be in [0, 1)"));
        }
        if self.handle_keyword.trim().is_empty() {
            return Err(invalid("handle_keyword", "must not be empty"));
        }
        if self.barrel_keyword.trim().is_empty() {
            return Err(invalid("barrel_keyword", "must not be empty"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_owned(),
    }
}
