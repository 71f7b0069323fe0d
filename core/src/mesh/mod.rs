//! CPU-side geometry types and region utilities.
//!
//! This module provides the geometry data the segmentation engine works on:
//!
//! - [`Geometry`] - Position/normal/UV attribute table with an optional index buffer
//! - [`BoundingBox`] / [`BoundingSphere`] - Derived bounding volumes
//! - [`merge_geometries`] - Concatenate geometries into one index space
//! - [`extract_region`] - Build a compact geometry from a triangle subset
//! - [`PresentationBuffers`] - Interleaved byte buffers for GPU upload
//! - Generators for test and demo shapes (capped cylinder, quad)

mod bounds;
mod error;
mod extract;
pub mod generators;
mod geometry;
mod merge;
mod vertex;

pub use bounds::{Axis, BoundingBox, BoundingSphere};
pub use error::GeometryError;
pub use extract::extract_region;
pub use geometry::{Geometry, Triangles};
pub use merge::merge_geometries;
pub use vertex::{PresentationBuffers, PresentationVertex};
