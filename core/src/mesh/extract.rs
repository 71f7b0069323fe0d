//! Compact sub-geometry extraction.

use super::geometry::Geometry;

/// Build a self-contained geometry from a subset of `source`'s triangles.
///
/// `triangle_indices` holds vertex indices into `source`, three per triangle.
/// Referenced vertices are copied once each, in order of first appearance,
/// and the index buffer is rewritten through that remap. Normals and UVs are
/// copied when the source has them; missing normals are computed from the
/// new topology. Returns `None` for an empty index list.
///
/// # Panics
///
/// Panics if an index is out of range for `source`. Indices produced from a
/// [`Geometry`]'s own triangles are always in range.
pub fn extract_region(source: &Geometry, triangle_indices: &[u32]) -> Option<Geometry> {
    if triangle_indices.is_empty() {
        return None;
    }

    let mut remap: Vec<Option<u32>> = vec![None; source.vertex_count()];
    let mut order: Vec<usize> = Vec::new();
    let indices: Vec<u32> = triangle_indices
        .iter()
        .map(|&old| {
            *remap[old as usize].get_or_insert_with(|| {
                order.push(old as usize);
                (order.len() - 1) as u32
            })
        })
        .collect();

    let positions = order.iter().map(|&i| source.positions()[i]).collect();
    let normals = source
        .normals()
        .map(|normals| order.iter().map(|&i| normals[i]).collect());
    let uvs = source
        .uvs()
        .map(|uvs| order.iter().map(|&i| uvs[i]).collect());

    let region = Geometry::from_parts(
        positions,
        normals,
        uvs,
        Some(indices),
        source.label().map(str::to_owned),
    );
    Some(region.ensure_normals())
}
