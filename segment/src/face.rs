//! Knob end-cap ("face") versus lateral surface ("body") split.

use std::borrow::Cow;

use batsmith_core::mesh::{Geometry, extract_region};

use crate::axis::select_axis;
use crate::partition::centroid_on;

/// Outcome of [`split_face_body`].
#[derive(Debug, Clone)]
pub enum FaceSplit {
    /// The knob has no index buffer and was left whole.
    NotIndexed,
    /// No triangle qualified as face; the knob stays whole.
    NoFace,
    /// Face triangles were found.
    Split {
        /// The end-cap triangles.
        face: Geometry,
        /// The remaining triangles, `None` when every triangle was face.
        body: Option<Geometry>,
    },
}

/// Separate the end caps of a knob from its lateral surface.
///
/// Works along the knob's own dominant axis. A triangle is face when its
/// centroid lies within `face_fraction` of the range from either end and its
/// mean normal component along the axis points outward at that end by more
/// than `normal_cutoff`.
pub fn split_face_body(knob: &Geometry, face_fraction: f32, normal_cutoff: f32) -> FaceSplit {
    if !knob.is_indexed() {
        return FaceSplit::NotIndexed;
    }
    let Some(bounds) = knob.bounding_box() else {
        return FaceSplit::NoFace;
    };

    let knob: Cow<'_, Geometry> = if knob.has_normals() {
        Cow::Borrowed(knob)
    } else {
        Cow::Owned(knob.clone().with_computed_normals())
    };
    let normals = knob.normals().unwrap_or_default();

    let selection = select_axis(&bounds);
    let axis = selection.axis;
    let threshold = selection.range * face_fraction;
    log::debug!(
        "Knob face split along {axis}: range {}, threshold {threshold}",
        selection.range
    );

    let mut face = Vec::new();
    let mut body = Vec::new();
    for triangle in knob.triangles() {
        let avg_pos = centroid_on(&knob, triangle, axis);
        let avg_normal = triangle
            .iter()
            .map(|&v| normals[v as usize][axis.index()])
            .sum::<f32>()
            / 3.0;

        let at_min = avg_pos <= selection.min + threshold;
        let at_max = avg_pos >= selection.max - threshold;
        let faces_out =
            (at_min && avg_normal < -normal_cutoff) || (at_max && avg_normal > normal_cutoff);

        if faces_out {
            face.extend_from_slice(&triangle);
        } else {
            body.extend_from_slice(&triangle);
        }
    }

    match extract_region(&knob, &face) {
        None => FaceSplit::NoFace,
        Some(face) => FaceSplit::Split {
            face,
            body: extract_region(&knob, &body),
        },
    }
}
