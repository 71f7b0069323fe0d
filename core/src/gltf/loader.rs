//! Internal glTF loading logic.
//!
//! The [`LoadContext`] holds the parsed document and its resolved buffer
//! data while meshes and the node tree are converted.

use crate::mesh::{Geometry, GeometryError};
use crate::scene::{GroupNode, MeshNode, Node, NodeTransform, Scene};

use super::error::GltfError;

/// Internal loading context that holds resolved data during loading.
pub(crate) struct LoadContext {
    /// The parsed glTF document.
    document: gltf_dep::Document,
    /// Resolved buffer data, one entry per glTF buffer.
    buffers: Vec<gltf_dep::buffer::Data>,
}

/// Geometry of one triangle primitive, labelled for the scene tree.
pub(crate) struct LoadedPrimitive {
    label: Option<String>,
    geometry: Geometry,
}

impl LoadContext {
    /// Create a new LoadContext from parsed glTF data.
    pub fn new(document: gltf_dep::Document, buffers: Vec<gltf_dep::buffer::Data>) -> Self {
        Self { document, buffers }
    }

    /// Load every mesh as a list of triangle primitives.
    ///
    /// The outer list is indexed by glTF mesh index. Point and line
    /// primitives are skipped.
    pub fn load_meshes(&self) -> Result<Vec<Vec<LoadedPrimitive>>, GltfError> {
        let mut result = Vec::new();

        for (mesh_idx, mesh) in self.document.meshes().enumerate() {
            let primitive_count = mesh.primitives().count();
            let mut primitives = Vec::new();

            for (prim_idx, primitive) in mesh.primitives().enumerate() {
                if primitive.mode() != gltf_dep::mesh::Mode::Triangles {
                    log::warn!(
                        "Skipping mesh {mesh_idx} primitive {prim_idx}: unsupported mode {:?}",
                        primitive.mode()
                    );
                    continue;
                }

                let geometry = self.read_primitive(&primitive, mesh_idx, prim_idx)?;
                let label = mesh.name().map(|name| {
                    if primitive_count > 1 {
                        format!("{name}_prim{prim_idx}")
                    } else {
                        name.to_string()
                    }
                });
                let geometry = match &label {
                    Some(label) => geometry.with_label(label.clone()),
                    None => geometry,
                };
                primitives.push(LoadedPrimitive { label, geometry });
            }

            result.push(primitives);
        }

        Ok(result)
    }

    fn read_primitive(
        &self,
        primitive: &gltf_dep::Primitive<'_>,
        mesh: usize,
        prim: usize,
    ) -> Result<Geometry, GltfError> {
        let reader = primitive.reader(|buffer| {
            self.buffers
                .get(buffer.index())
                .map(|data| data.0.as_slice())
        });
        let invalid = |source: GeometryError| GltfError::InvalidGeometry {
            mesh,
            primitive: prim,
            source,
        };

        let positions: Vec<[f32; 3]> = reader
            .read_positions()
            .ok_or(GltfError::MissingPositions {
                mesh,
                primitive: prim,
            })?
            .collect();
        let mut geometry = Geometry::new(positions);

        if let Some(normals) = reader.read_normals() {
            geometry = geometry.with_normals(normals.collect()).map_err(invalid)?;
        }
        if let Some(uvs) = reader.read_tex_coords(0) {
            geometry = geometry
                .with_uvs(uvs.into_f32().collect())
                .map_err(invalid)?;
        }
        if let Some(indices) = reader.read_indices() {
            geometry = geometry
                .with_indices(indices.into_u32().collect())
                .map_err(invalid)?;
        }

        Ok(geometry.ensure_normals())
    }

    /// Convert the default scene (or the first one) into a [`Scene`].
    pub fn load_scene(&self, meshes: &[Vec<LoadedPrimitive>]) -> Result<Scene, GltfError> {
        let scene = self
            .document
            .default_scene()
            .or_else(|| self.document.scenes().next())
            .ok_or(GltfError::NoScene)?;

        let mut out = Scene::new().with_nodes(
            scene
                .nodes()
                .map(|node| load_node(&node, meshes))
                .collect(),
        );
        if let Some(name) = scene.name() {
            out = out.with_name(name);
        }
        Ok(out)
    }
}

/// Recursively convert a node and its children.
///
/// A node with a single-primitive mesh and no children becomes a mesh leaf.
/// Any other node becomes a group; its primitives come first as leaves with
/// identity transforms, followed by its children.
fn load_node(node: &gltf_dep::Node<'_>, meshes: &[Vec<LoadedPrimitive>]) -> Node {
    let (translation, rotation, scale) = node.transform().decomposed();
    let transform = NodeTransform::IDENTITY
        .with_translation(translation)
        .with_rotation(rotation)
        .with_scale(scale);
    let primitives = node
        .mesh()
        .and_then(|m| meshes.get(m.index()))
        .map(Vec::as_slice)
        .unwrap_or_default();

    if let [primitive] = primitives {
        if node.children().next().is_none() {
            let name = node.name().map(String::from).or_else(|| primitive.label.clone());
            let mut leaf = MeshNode::new(primitive.geometry.clone()).with_transform(transform);
            leaf.name = name;
            return leaf.into();
        }
    }

    let mut children: Vec<Node> = primitives
        .iter()
        .map(|primitive| {
            let mut leaf = MeshNode::new(primitive.geometry.clone());
            leaf.name = primitive.label.clone();
            leaf.into()
        })
        .collect();
    children.extend(node.children().map(|c| load_node(&c, meshes)));

    let mut group = GroupNode::new()
        .with_transform(transform)
        .with_children(children);
    group.name = node.name().map(String::from);
    group.into()
}

/// Resolve every buffer of `document`.
///
/// The GLB blob backs the binary buffer and data URIs are decoded by the
/// `gltf` crate. External file URIs are rejected since only bytes are loaded.
pub(crate) fn resolve_buffers(
    document: &gltf_dep::Document,
    blob: Option<Vec<u8>>,
) -> Result<Vec<gltf_dep::buffer::Data>, GltfError> {
    let has_external = document.buffers().any(|buffer| match buffer.source() {
        gltf_dep::buffer::Source::Uri(uri) => !uri.starts_with("data:"),
        gltf_dep::buffer::Source::Bin => false,
    });
    if has_external {
        return Err(GltfError::BufferError(
            "external buffer URIs not supported".into(),
        ));
    }
    gltf_dep::import_buffers(document, None, blob)
        .map_err(|err| GltfError::BufferError(err.to_string()))
}
