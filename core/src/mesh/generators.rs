//! Geometry generators for common shapes.
//!
//! These produce indexed [`Geometry`] values with normals and UVs, used as
//! fixtures by tests and benchmarks.

use std::f32::consts::PI;

use super::geometry::Geometry;

/// Generate a capped cylinder lying along +X.
///
/// The lateral surface runs from `x = 0` to `x = length` and is split into
/// `stacks` rings of `segments` quads. Each end has a flat cap with its own
/// vertices, so cap normals are exactly `-X` at `x = 0` and `+X` at
/// `x = length`. Lateral normals point radially outward.
///
/// # Arguments
///
/// * `radius` - Cylinder radius
/// * `length` - Extent along X
/// * `segments` - Number of segments around the circumference (at least 3)
/// * `stacks` - Number of lateral subdivisions along X (at least 1)
pub fn generate_cylinder(radius: f32, length: f32, segments: u32, stacks: u32) -> Geometry {
    let segments = segments.max(3);
    let stacks = stacks.max(1);

    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut uvs = Vec::new();
    let mut indices = Vec::new();

    for stack in 0..=stacks {
        let x = length * stack as f32 / stacks as f32;
        for segment in 0..=segments {
            let theta = segment as f32 * 2.0 * PI / segments as f32;
            let (sin, cos) = theta.sin_cos();
            positions.push([x, cos * radius, sin * radius]);
            normals.push([0.0, cos, sin]);
            uvs.push([segment as f32 / segments as f32, stack as f32 / stacks as f32]);
        }
    }

    for stack in 0..stacks {
        for segment in 0..segments {
            let current = stack * (segments + 1) + segment;
            let next = current + segments + 1;

            indices.extend_from_slice(&[current, current + 1, next]);
            indices.extend_from_slice(&[current + 1, next + 1, next]);
        }
    }

    for (x, nx) in [(0.0, -1.0), (length, 1.0)] {
        let center = positions.len() as u32;
        positions.push([x, 0.0, 0.0]);
        normals.push([nx, 0.0, 0.0]);
        uvs.push([0.5, 0.5]);

        for segment in 0..=segments {
            let theta = segment as f32 * 2.0 * PI / segments as f32;
            let (sin, cos) = theta.sin_cos();
            positions.push([x, cos * radius, sin * radius]);
            normals.push([nx, 0.0, 0.0]);
            uvs.push([0.5 + 0.5 * cos, 0.5 + 0.5 * sin]);
        }

        for segment in 0..segments {
            let a = center + 1 + segment;
            let b = a + 1;
            if nx < 0.0 {
                indices.extend_from_slice(&[center, b, a]);
            } else {
                indices.extend_from_slice(&[center, a, b]);
            }
        }
    }

    Geometry::from_parts(
        positions,
        Some(normals),
        Some(uvs),
        Some(indices),
        Some("cylinder".to_owned()),
    )
}

/// Generate a quad on the XY plane facing +Z.
///
/// Creates a quad centered at the origin with the given half-width and
/// half-height. UV coordinates go from (0,0) at top-left to (1,1) at
/// bottom-right.
pub fn generate_quad(half_width: f32, half_height: f32) -> Geometry {
    let positions = vec![
        [-half_width, -half_height, 0.0],
        [half_width, -half_height, 0.0],
        [half_width, half_height, 0.0],
        [-half_width, half_height, 0.0],
    ];
    let uvs = vec![[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

    Geometry::from_parts(
        positions,
        Some(vec![[0.0, 0.0, 1.0]; 4]),
        Some(uvs),
        Some(vec![0, 1, 2, 2, 3, 0]),
        Some("quad".to_owned()),
    )
}
