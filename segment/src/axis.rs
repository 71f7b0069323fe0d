//! Dominant-axis selection and proportional cut points.

use batsmith_core::mesh::{Axis, BoundingBox};

/// Longest axis of a bounding box with its extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSelection {
    /// Axis with the largest extent.
    pub axis: Axis,
    /// Minimum coordinate along `axis`.
    pub min: f32,
    /// Maximum coordinate along `axis`.
    pub max: f32,
    /// `max - min`.
    pub range: f32,
}

impl AxisSelection {
    /// Absolute cut points at `tip_fraction` and `mid_fraction` of the range.
    pub fn thresholds(&self, tip_fraction: f32, mid_fraction: f32) -> Thresholds {
        Thresholds {
            tip_end: self.min + self.range * tip_fraction,
            mid_end: self.min + self.range * mid_fraction,
        }
    }
}

/// Absolute coordinates separating the tip, mid and base zones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Upper bound (inclusive) of the tip zone.
    pub tip_end: f32,
    /// Upper bound (inclusive) of the mid zone.
    pub mid_end: f32,
}

/// Pick the axis with the largest extent.
///
/// Ties go to X first, then Z, then Y.
pub fn select_axis(bounds: &BoundingBox) -> AxisSelection {
    let [x, y, z] = bounds.size();
    let axis = if x >= y && x >= z {
        Axis::X
    } else if z >= y {
        Axis::Z
    } else {
        Axis::Y
    };
    AxisSelection {
        axis,
        min: bounds.min_on(axis),
        max: bounds.max_on(axis),
        range: bounds.extent(axis),
    }
}
