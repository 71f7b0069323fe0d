//! Axis-aligned bounding boxes and bounding spheres.
//!
//! Both are derived data: geometries recompute them whenever their positions
//! change and never treat them as authoritative.

use std::fmt;

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis.
    Y,
    /// The Z axis.
    Z,
}

impl Axis {
    /// All axes in component order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index of this axis (`0`, `1` or `2`).
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        };
        f.write_str(name)
    }
}

/// An axis-aligned bounding box.
///
/// Invariant: `min[i] <= max[i]` for every axis. Empty point sets have no
/// bounding box, so constructors return `Option`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: [f32; 3],
    /// Maximum corner.
    pub max: [f32; 3],
}

impl BoundingBox {
    /// Create a box from two corners, sorting components per axis.
    pub fn new(a: [f32; 3], b: [f32; 3]) -> Self {
        Self {
            min: [a[0].min(b[0]), a[1].min(b[1]), a[2].min(b[2])],
            max: [a[0].max(b[0]), a[1].max(b[1]), a[2].max(b[2])],
        }
    }

    /// Smallest box enclosing all points, or `None` for an empty iterator.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a [f32; 3]>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let mut bounds = Self {
            min: first,
            max: first,
        };
        for p in iter {
            bounds.expand_to_include(p);
        }
        Some(bounds)
    }

    /// Grow the box to contain `p`.
    pub fn expand_to_include(&mut self, p: &[f32; 3]) {
        for i in 0..3 {
            self.min[i] = self.min[i].min(p[i]);
            self.max[i] = self.max[i].max(p[i]);
        }
    }

    /// Smallest box enclosing both boxes.
    #[must_use]
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let mut out = *self;
        out.expand_to_include(&other.min);
        out.expand_to_include(&other.max);
        out
    }

    /// Extent along every axis.
    pub fn size(&self) -> [f32; 3] {
        Axis::ALL.map(|axis| self.extent(axis))
    }

    /// Center point.
    pub fn center(&self) -> [f32; 3] {
        [
            (self.min[0] + self.max[0]) * 0.5,
            (self.min[1] + self.max[1]) * 0.5,
            (self.min[2] + self.max[2]) * 0.5,
        ]
    }

    /// Extent along one axis.
    pub fn extent(&self, axis: Axis) -> f32 {
        self.max[axis.index()] - self.min[axis.index()]
    }

    /// Minimum coordinate along one axis.
    pub fn min_on(&self, axis: Axis) -> f32 {
        self.min[axis.index()]
    }

    /// Maximum coordinate along one axis.
    pub fn max_on(&self, axis: Axis) -> f32 {
        self.max[axis.index()]
    }

    /// Check whether a point lies inside or on the boundary.
    pub fn contains(&self, p: &[f32; 3]) -> bool {
        (0..3).all(|i| p[i] >= self.min[i] && p[i] <= self.max[i])
    }
}

/// A bounding sphere centered on the bounding box center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// Sphere center.
    pub center: [f32; 3],
    /// Radius reaching the farthest point.
    pub radius: f32,
}

impl BoundingSphere {
    /// Sphere around `points`, centered on `bounds`' center.
    pub fn from_points<'a>(
        bounds: &BoundingBox,
        points: impl IntoIterator<Item = &'a [f32; 3]>,
    ) -> Self {
        let center = bounds.center();
        let max_sq = points
            .into_iter()
            .map(|p| {
                let dx = p[0] - center[0];
                let dy = p[1] - center[1];
                let dz = p[2] - center[2];
                dx * dx + dy * dy + dz * dz
            })
            .fold(0.0f32, f32::max);
        Self {
            center,
            radius: max_sq.sqrt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_empty_is_none() {
        let points: Vec<[f32; 3]> = Vec::new();
        assert!(BoundingBox::from_points(&points).is_none());
    }

    #[test]
    fn from_points_covers_all() {
        let points = [[0.0, 5.0, -1.0], [10.0, 2.0, 3.0], [-2.0, 8.0, 1.0]];
        let bounds = BoundingBox::from_points(&points).unwrap();
        assert_eq!(bounds.min, [-2.0, 2.0, -1.0]);
        assert_eq!(bounds.max, [10.0, 8.0, 3.0]);
        assert_eq!(bounds.size(), [12.0, 6.0, 4.0]);
        assert_eq!(bounds.center(), [4.0, 5.0, 1.0]);
        assert!(points.iter().all(|p| bounds.contains(p)));
    }

    #[test]
    fn new_sorts_corners() {
        let bounds = BoundingBox::new([1.0, -1.0, 4.0], [0.0, 2.0, 3.0]);
        assert_eq!(bounds.min, [0.0, -1.0, 3.0]);
        assert_eq!(bounds.max, [1.0, 2.0, 4.0]);
    }

    #[test]
    fn union_and_axis_accessors() {
        let a = BoundingBox::new([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        let b = BoundingBox::new([2.0, -1.0, 0.5], [3.0, 0.5, 0.7]);
        let u = a.union(&b);
        assert_eq!(u.min_on(Axis::Y), -1.0);
        assert_eq!(u.max_on(Axis::X), 3.0);
        assert_eq!(u.extent(Axis::Z), 1.0);
    }

    #[test]
    fn sphere_reaches_farthest_corner() {
        let points = [[-1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.5, 0.0]];
        let bounds = BoundingBox::from_points(&points).unwrap();
        let sphere = BoundingSphere::from_points(&bounds, &points);
        assert_eq!(sphere.center, [0.0, 0.25, 0.0]);
        let expected = (1.0f32 + 0.0625).sqrt();
        assert!((sphere.radius - expected).abs() < 1e-6);
    }

    #[test]
    fn axis_display_and_index() {
        assert_eq!(Axis::Z.to_string(), "z");
        assert_eq!(Axis::ALL.map(Axis::index), [0, 1, 2]);
    }
}
