//! Wavefront OBJ loader.
//!
//! Parses OBJ text with `tobj` (faces triangulated, one index per vertex)
//! into a [`Scene`] holding one unnamed root group with a mesh leaf per
//! `o`/`g` model. Materials are ignored.

mod error;

pub use error::ObjError;

use crate::mesh::{Geometry, GeometryError};
use crate::scene::{GroupNode, MeshNode, Node, Scene};

/// Name tobj gives models declared without `o` or `g`.
const UNNAMED_MODEL: &str = "unnamed_object";

/// Load OBJ bytes into a scene tree.
///
/// Normals and UVs are kept when present for every vertex of a model and
/// dropped with a warning otherwise. Models without vertices are skipped.
pub fn load_obj(data: &[u8]) -> Result<Scene, ObjError> {
    let mut reader = data;
    let (models, _materials) = tobj::load_obj_buf(
        &mut reader,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
        |_| Ok(Default::default()),
    )?;

    let mut leaves = Vec::with_capacity(models.len());
    for model in models {
        if model.mesh.positions.is_empty() {
            log::debug!("OBJ model '{}': no vertices, skipped", model.name);
            continue;
        }
        let geometry = model_geometry(&model)?;
        log::debug!(
            "OBJ model '{}': {} vertices, {} triangles",
            model.name,
            geometry.vertex_count(),
            geometry.triangle_count()
        );

        let leaf = MeshNode::new(geometry);
        let leaf = if model.name == UNNAMED_MODEL {
            leaf
        } else {
            leaf.with_name(model.name)
        };
        leaves.push(Node::from(leaf));
    }

    log::info!("Loaded OBJ: {} meshes", leaves.len());
    Ok(Scene::new().with_nodes(vec![GroupNode::new().with_children(leaves).into()]))
}

fn model_geometry(model: &tobj::Model) -> Result<Geometry, ObjError> {
    let mesh = &model.mesh;
    let invalid = |source: GeometryError| ObjError::InvalidGeometry {
        name: model.name.clone(),
        source,
    };

    let positions: Vec<[f32; 3]> = mesh
        .positions
        .chunks_exact(3)
        .map(|c| [c[0], c[1], c[2]])
        .collect();
    let vertex_count = positions.len();
    let mut geometry = Geometry::new(positions).with_label(model.name.clone());

    if mesh.normals.len() == vertex_count * 3 {
        let normals = mesh
            .normals
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        geometry = geometry.with_normals(normals).map_err(invalid)?;
    } else if !mesh.normals.is_empty() {
        log::warn!(
            "OBJ model '{}': {} normal components for {vertex_count} vertices, recomputing",
            model.name,
            mesh.normals.len()
        );
    }

    if mesh.texcoords.len() == vertex_count * 2 {
        let uvs = mesh
            .texcoords
            .chunks_exact(2)
            .map(|c| [c[0], c[1]])
            .collect();
        geometry = geometry.with_uvs(uvs).map_err(invalid)?;
    } else if !mesh.texcoords.is_empty() {
        log::warn!(
            "OBJ model '{}': {} uv components for {vertex_count} vertices, dropping uvs",
            model.name,
            mesh.texcoords.len()
        );
    }

    let geometry = geometry
        .with_indices(mesh.indices.clone())
        .map_err(invalid)?;
    Ok(geometry.ensure_normals())
}
