//! Error types for geometry construction and merging.

use thiserror::Error;

/// Errors raised when a geometry would violate its invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// `merge_geometries` was called with no inputs.
    #[error("cannot merge an empty list of geometries")]
    EmptyInput,
    /// An index refers past the end of the vertex table.
    #[error("index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        /// The offending index value.
        index: u32,
        /// Vertex count of the geometry.
        vertex_count: usize,
    },
    /// A per-vertex attribute does not have one entry per vertex.
    #[error("{attribute} count {actual} does not match vertex count {expected}")]
    AttributeCountMismatch {
        /// Attribute name (`"normal"` or `"uv"`).
        attribute: &'static str,
        /// Expected entry count (the vertex count).
        expected: usize,
        /// Actual entry count.
        actual: usize,
    },
    /// The index buffer length is not a multiple of three.
    #[error("index count {0} is not a multiple of 3")]
    IncompleteTriangle(usize),
}
