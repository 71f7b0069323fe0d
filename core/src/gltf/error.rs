//! Error types for glTF loading.

use thiserror::Error;

use crate::mesh::GeometryError;

/// Errors that can occur during glTF loading.
#[derive(Error, Debug)]
pub enum GltfError {
    /// Failed to parse the glTF document.
    #[error("glTF parse error: {0}")]
    Parse(#[from] gltf_dep::Error),
    /// The document defines no scene to load.
    #[error("glTF document has no scenes")]
    NoScene,
    /// A primitive is missing position data.
    #[error("mesh {mesh} primitive {primitive} has no POSITION attribute")]
    MissingPositions {
        /// Mesh index in the glTF document.
        mesh: usize,
        /// Primitive index within the mesh.
        primitive: usize,
    },
    /// A primitive's attributes or indices do not form valid geometry.
    #[error("mesh {mesh} primitive {primitive} is invalid: {source}")]
    InvalidGeometry {
        /// Mesh index in the glTF document.
        mesh: usize,
        /// Primitive index within the mesh.
        primitive: usize,
        /// The violated geometry invariant.
        #[source]
        source: GeometryError,
    },
    /// Error resolving buffer data.
    #[error("buffer error: {0}")]
    BufferError(String),
}
