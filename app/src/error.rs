//! CLI error type.

use std::path::PathBuf;

use batsmith_core::gltf::GltfError;
use batsmith_core::obj::ObjError;
use batsmith_segment::{ConfigError, SegmentError};

/// Anything that stops a CLI run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The model file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension is not a supported model format.
    #[error("unsupported model format for {0} (expected .obj, .gltf or .glb)")]
    UnsupportedFormat(PathBuf),

    #[error("OBJ load failed: {0}")]
    Obj(#[from] ObjError),

    #[error("glTF load failed: {0}")]
    Gltf(#[from] GltfError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("segmentation failed: {0}")]
    Segment(#[from] SegmentError),
}
