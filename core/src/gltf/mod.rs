//! glTF 2.0 loader.
//!
//! Loads `.gltf`/`.glb` files into a [`Scene`] tree of groups and mesh
//! leaves. Only triangle geometry is kept: positions, normals and the first
//! UV set, with indices widened to `u32`. Materials, textures, cameras,
//! skins and animations are ignored.
//!
//! # Node mapping
//!
//! A glTF node with a single-primitive mesh and no children becomes a
//! [`Node::Mesh`](crate::scene::Node::Mesh) leaf named after the node (or the
//! mesh). Every other node becomes a group. Primitives of a multi-primitive
//! mesh become leaves labelled `{mesh}_prim{i}`.
//!
//! # Example
//!
//! ```ignore
//! use batsmith_core::gltf::load_gltf;
//!
//! let data = std::fs::read("bat.glb").unwrap();
//! let scene = load_gltf(&data).unwrap();
//! println!("Meshes: {}", scene.mesh_count());
//! ```

mod error;
mod loader;

pub use error::GltfError;

use crate::scene::Scene;

/// Load the default scene (or the first scene) of a glTF document.
///
/// Supports both binary glTF (`.glb`) and JSON glTF (`.gltf` with embedded
/// data URIs). External file references are not supported.
pub fn load_gltf(data: &[u8]) -> Result<Scene, GltfError> {
    let gltf = gltf_dep::Gltf::from_slice(data)?;
    let blob = gltf.blob.clone();

    let buffers = loader::resolve_buffers(&gltf.document, blob)?;
    let ctx = loader::LoadContext::new(gltf.document, buffers);

    let meshes = ctx.load_meshes()?;
    let scene = ctx.load_scene(&meshes)?;

    log::info!(
        "Loaded glTF scene {:?}: {} meshes, {} nodes at root",
        scene.name.as_deref().unwrap_or("<unnamed>"),
        scene.mesh_count(),
        scene.nodes.len()
    );
    Ok(scene)
}
