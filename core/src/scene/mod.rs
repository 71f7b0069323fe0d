//! Scene tree types for representing loaded models.
//!
//! These types are format-agnostic and can be produced by any loader
//! (glTF, OBJ) or built programmatically.
//!
//! - [`Scene`] - A forest of nodes
//! - [`Node`] - Either a [`GroupNode`] or a [`MeshNode`] leaf
//! - [`NodeTransform`] - TRS transform using plain arrays
//! - [`Walk`] / [`NodeVisit`] / [`NodePath`] - Pre-order traversal with world matrices

mod types;
mod walk;

pub use types::{GroupNode, MeshNode, Node, NodeTransform, Scene};
pub use walk::{NodePath, NodeVisit, Walk};
