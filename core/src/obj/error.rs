//! Error types for OBJ loading.

use thiserror::Error;

use crate::mesh::GeometryError;

/// Errors that can occur during OBJ loading.
#[derive(Error, Debug)]
pub enum ObjError {
    /// The OBJ text could not be parsed.
    #[error("OBJ parse error: {0}")]
    Parse(#[from] tobj::LoadError),
    /// A model's face indices do not fit its vertex table.
    #[error("OBJ model `{name}` is invalid: {source}")]
    InvalidGeometry {
        /// Model (object or group) name.
        name: String,
        /// The violated geometry invariant.
        #[source]
        source: GeometryError,
    },
}
