//! CPU-side triangle geometry.
//!
//! This module provides:
//! - [`Geometry`] - Vertex attribute table (position, optional normal and UV)
//!   with an optional `u32` index buffer
//! - [`Triangles`] - Iterator over triangle vertex-index triples that treats
//!   indexed and non-indexed geometry the same way

use crate::math::{self, Mat4, Vec3};

use super::bounds::{BoundingBox, BoundingSphere};
use super::error::GeometryError;

/// A triangulated geometry.
///
/// Invariants, enforced by the `with_*` builders:
/// - every index is `< vertex_count()`;
/// - the index count is a multiple of 3;
/// - normals and UVs, when present, have exactly one entry per vertex.
///
/// Bounding volumes are recomputed whenever positions are set, so they always
/// describe the current vertex table. A geometry without vertices has none.
///
/// # Example
///
/// ```
/// use batsmith_core::mesh::Geometry;
///
/// let geometry = Geometry::new(vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])
///     .with_indices(vec![0, 1, 2])
///     .unwrap()
///     .with_label("triangle");
/// assert_eq!(geometry.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    positions: Vec<[f32; 3]>,
    normals: Option<Vec<[f32; 3]>>,
    uvs: Option<Vec<[f32; 2]>>,
    indices: Option<Vec<u32>>,
    bounding_box: Option<BoundingBox>,
    bounding_sphere: Option<BoundingSphere>,
    label: Option<String>,
}

impl Geometry {
    /// Create a non-indexed geometry from positions only.
    pub fn new(positions: Vec<[f32; 3]>) -> Self {
        Self::from_parts(positions, None, None, None, None)
    }

    /// Assemble a geometry from parts the caller already validated.
    pub(crate) fn from_parts(
        positions: Vec<[f32; 3]>,
        normals: Option<Vec<[f32; 3]>>,
        uvs: Option<Vec<[f32; 2]>>,
        indices: Option<Vec<u32>>,
        label: Option<String>,
    ) -> Self {
        let bounding_box = BoundingBox::from_points(&positions);
        let bounding_sphere =
            bounding_box.map(|bounds| BoundingSphere::from_points(&bounds, &positions));
        Self {
            positions,
            normals,
            uvs,
            indices,
            bounding_box,
            bounding_sphere,
            label,
        }
    }

    /// Attach per-vertex normals.
    pub fn with_normals(mut self, normals: Vec<[f32; 3]>) -> Result<Self, GeometryError> {
        check_attribute_count("normal", self.positions.len(), normals.len())?;
        self.normals = Some(normals);
        Ok(self)
    }

    /// Attach per-vertex texture coordinates.
    pub fn with_uvs(mut self, uvs: Vec<[f32; 2]>) -> Result<Self, GeometryError> {
        check_attribute_count("uv", self.positions.len(), uvs.len())?;
        self.uvs = Some(uvs);
        Ok(self)
    }

    /// Attach an index buffer (three entries per triangle).
    pub fn with_indices(mut self, indices: Vec<u32>) -> Result<Self, GeometryError> {
        if indices.len() % 3 != 0 {
            return Err(GeometryError::IncompleteTriangle(indices.len()));
        }
        let vertex_count = self.positions.len();
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(GeometryError::IndexOutOfRange {
                index,
                vertex_count,
            });
        }
        self.indices = Some(indices);
        Ok(self)
    }

    /// Set a debug label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Replace normals with ones computed from the current topology.
    #[must_use]
    pub fn with_computed_normals(mut self) -> Self {
        self.normals = Some(self.compute_vertex_normals());
        self
    }

    /// Compute normals only when the geometry has none.
    #[must_use]
    pub fn ensure_normals(self) -> Self {
        if self.normals.is_some() {
            self
        } else {
            self.with_computed_normals()
        }
    }

    /// Vertex positions.
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Vertex normals, if present.
    pub fn normals(&self) -> Option<&[[f32; 3]]> {
        self.normals.as_deref()
    }

    /// Texture coordinates, if present.
    pub fn uvs(&self) -> Option<&[[f32; 2]]> {
        self.uvs.as_deref()
    }

    /// Index buffer, if the geometry is indexed.
    pub fn indices(&self) -> Option<&[u32]> {
        self.indices.as_deref()
    }

    /// Debug label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of whole triangles.
    ///
    /// Non-indexed geometry ignores trailing vertices that do not form a
    /// complete triangle.
    pub fn triangle_count(&self) -> usize {
        match &self.indices {
            Some(indices) => indices.len() / 3,
            None => self.positions.len() / 3,
        }
    }

    /// Check if this geometry uses an index buffer.
    pub fn is_indexed(&self) -> bool {
        self.indices.is_some()
    }

    /// Check if normals are present.
    pub fn has_normals(&self) -> bool {
        self.normals.is_some()
    }

    /// Check if texture coordinates are present.
    pub fn has_uvs(&self) -> bool {
        self.uvs.is_some()
    }

    /// Axis-aligned bounding box, `None` when there are no vertices.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.bounding_box
    }

    /// Bounding sphere, `None` when there are no vertices.
    pub fn bounding_sphere(&self) -> Option<BoundingSphere> {
        self.bounding_sphere
    }

    /// Iterate over triangles as vertex-index triples.
    ///
    /// Non-indexed geometry yields sequential triples `[3t, 3t + 1, 3t + 2]`.
    pub fn triangles(&self) -> Triangles<'_> {
        Triangles {
            indices: self.indices.as_deref(),
            next: 0,
            count: self.triangle_count(),
        }
    }

    /// Per-vertex normals from the current topology.
    ///
    /// Face normals (area weighted) are accumulated on each referenced vertex
    /// and normalized. Vertices no triangle references get a zero normal.
    pub fn compute_vertex_normals(&self) -> Vec<[f32; 3]> {
        let mut accum = vec![Vec3::zeros(); self.positions.len()];
        for [a, b, c] in self.triangles() {
            let pa = to_vec3(self.positions[a as usize]);
            let pb = to_vec3(self.positions[b as usize]);
            let pc = to_vec3(self.positions[c as usize]);
            let face = (pc - pb).cross(&(pa - pb));
            accum[a as usize] += face;
            accum[b as usize] += face;
            accum[c as usize] += face;
        }
        accum
            .into_iter()
            .map(|n| {
                let len = n.norm();
                if len > 0.0 {
                    [n.x / len, n.y / len, n.z / len]
                } else {
                    [0.0, 0.0, 0.0]
                }
            })
            .collect()
    }

    /// Copy with sequential indices synthesized for non-indexed geometry.
    ///
    /// Trailing vertices that do not form a whole triangle stay in the vertex
    /// table but are not referenced.
    #[must_use]
    pub fn to_indexed(&self) -> Geometry {
        if self.is_indexed() {
            return self.clone();
        }
        let indices = (0..(self.triangle_count() * 3) as u32).collect();
        let mut out = self.clone();
        out.indices = Some(indices);
        out
    }

    /// Copy with positions and normals transformed by an affine matrix.
    ///
    /// Normals go through the inverse transpose and are renormalized.
    #[must_use]
    pub fn transformed(&self, m: &Mat4) -> Geometry {
        let positions = self
            .positions
            .iter()
            .map(|&p| math::transform_point(m, p))
            .collect();
        let normals = self.normals.as_ref().map(|normals| {
            let nm = math::normal_matrix(m);
            normals
                .iter()
                .map(|&n| math::transform_normal(&nm, n))
                .collect()
        });
        Self::from_parts(
            positions,
            normals,
            self.uvs.clone(),
            self.indices.clone(),
            self.label.clone(),
        )
    }
}

fn check_attribute_count(
    attribute: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), GeometryError> {
    if expected == actual {
        Ok(())
    } else {
        Err(GeometryError::AttributeCountMismatch {
            attribute,
            expected,
            actual,
        })
    }
}

fn to_vec3(p: [f32; 3]) -> Vec3 {
    Vec3::new(p[0], p[1], p[2])
}

/// Iterator over the triangles of a [`Geometry`].
#[derive(Debug, Clone)]
pub struct Triangles<'a> {
    indices: Option<&'a [u32]>,
    next: usize,
    count: usize,
}

impl Iterator for Triangles<'_> {
    type Item = [u32; 3];

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let base = self.next * 3;
        self.next += 1;
        Some(match self.indices {
            Some(indices) => [indices[base], indices[base + 1], indices[base + 2]],
            None => {
                let base = base as u32;
                [base, base + 1, base + 2]
            }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Triangles<'_> {}
