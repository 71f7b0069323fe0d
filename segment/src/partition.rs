//! Triangle classification along the dominant axis.

use batsmith_core::mesh::{Axis, Geometry};

use crate::axis::Thresholds;

/// Vertex-index triples of each zone, in source triangle order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriangleBuckets {
    /// Triangles whose centroid is at or below the tip cut.
    pub tip: Vec<u32>,
    /// Triangles between the tip and mid cuts (mid cut inclusive).
    pub mid: Vec<u32>,
    /// Everything else.
    pub base: Vec<u32>,
}

impl TriangleBuckets {
    /// Triangle count of each bucket as `(tip, mid, base)`.
    pub fn triangle_counts(&self) -> (usize, usize, usize) {
        (self.tip.len() / 3, self.mid.len() / 3, self.base.len() / 3)
    }
}

/// Mean coordinate of a triangle's vertices along `axis`.
pub(crate) fn centroid_on(geometry: &Geometry, triangle: [u32; 3], axis: Axis) -> f32 {
    let positions = geometry.positions();
    let i = axis.index();
    triangle
        .iter()
        .map(|&v| positions[v as usize][i])
        .sum::<f32>()
        / 3.0
}

/// Sort every triangle of `geometry` into the tip, mid or base bucket.
///
/// A centroid equal to a cut goes to the lower bucket. A NaN centroid
/// compares false against both cuts and lands in base.
pub fn partition(geometry: &Geometry, axis: Axis, thresholds: Thresholds) -> TriangleBuckets {
    let mut buckets = TriangleBuckets::default();
    for triangle in geometry.triangles() {
        let avg = centroid_on(geometry, triangle, axis);
        let bucket = if avg <= thresholds.tip_end {
            &mut buckets.tip
        } else if avg <= thresholds.mid_end {
            &mut buckets.mid
        } else {
            &mut buckets.base
        };
        bucket.extend_from_slice(&triangle);
    }
    buckets
}

/// Two-way split at a single cut: `(at_or_below, above)`.
pub fn split_at(geometry: &Geometry, axis: Axis, cut: f32) -> (Vec<u32>, Vec<u32>) {
    let mut below = Vec::new();
    let mut above = Vec::new();
    for triangle in geometry.triangles() {
        if centroid_on(geometry, triangle, axis) <= cut {
            below.extend_from_slice(&triangle);
        } else {
            above.extend_from_slice(&triangle);
        }
    }
    (below, above)
}
