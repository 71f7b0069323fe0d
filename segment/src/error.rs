//! Error types for segmentation and configuration loading.

use std::path::PathBuf;

use batsmith_core::mesh::GeometryError;
use thiserror::Error;

/// Fatal segmentation errors.
///
/// Missing regions are not errors; they show up as absent entries in the
/// region map.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SegmentError {
    /// The scene holds no mesh with at least one triangle.
    #[error("source geometry has no triangles")]
    NoTriangles,
    /// A geometry operation failed.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised while loading or validating a [`SegmentationConfig`](crate::SegmentationConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The config text is not valid TOML for this schema.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path of the config file, `<inline>` for strings.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
    /// A field holds a value outside its allowed range.
    #[error("invalid `{field}`: {reason}")]
    Invalid {
        /// Offending field name.
        field: &'static str,
        /// What the field must satisfy.
        reason: String,
    },
}
