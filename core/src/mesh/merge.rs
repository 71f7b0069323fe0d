//! Geometry concatenation into a single index space.

use super::error::GeometryError;
use super::geometry::Geometry;

/// Concatenate geometries into one, in list order.
///
/// Vertex attributes are appended and each input's indices are re-based by
/// the number of vertices that precede it. The result:
///
/// - is indexed if any input is indexed (non-indexed inputs get sequential
///   indices before re-basing), otherwise non-indexed;
/// - carries UVs only if every input has them;
/// - carries the inputs' normals if every input has them, otherwise normals
///   recomputed from the merged topology.
///
/// A single input yields a copy of it. Inputs are never modified.
pub fn merge_geometries(geometries: &[Geometry]) -> Result<Geometry, GeometryError> {
    let Some(first) = geometries.first() else {
        return Err(GeometryError::EmptyInput);
    };
    if geometries.len() == 1 {
        return Ok(first.clone());
    }

    let vertex_count: usize = geometries.iter().map(Geometry::vertex_count).sum();
    if u32::try_from(vertex_count).is_err() {
        return Err(GeometryError::IndexOutOfRange {
            index: u32::MAX,
            vertex_count,
        });
    }

    let all_normals = geometries.iter().all(Geometry::has_normals);
    let all_uvs = geometries.iter().all(Geometry::has_uvs);
    let any_indexed = geometries.iter().any(Geometry::is_indexed);

    let mut positions = Vec::with_capacity(vertex_count);
    let mut normals = all_normals.then(|| Vec::with_capacity(vertex_count));
    let mut uvs = all_uvs.then(|| Vec::with_capacity(vertex_count));
    let mut indices = any_indexed.then(Vec::new);

    let mut offset = 0u32;
    for geometry in geometries {
        positions.extend_from_slice(geometry.positions());
        if let (Some(out), Some(src)) = (normals.as_mut(), geometry.normals()) {
            out.extend_from_slice(src);
        }
        if let (Some(out), Some(src)) = (uvs.as_mut(), geometry.uvs()) {
            out.extend_from_slice(src);
        }
        if let Some(out) = indices.as_mut() {
            out.extend(geometry.triangles().flatten().map(|i| i + offset));
        }
        offset += geometry.vertex_count() as u32;
    }

    let merged = Geometry::from_parts(positions, normals, uvs, indices, None);
    Ok(if all_normals {
        merged
    } else {
        merged.with_computed_normals()
    })
}
