//! Math type aliases and helper functions.
//!
//! Geometry buffers store plain arrays; these helpers bridge them to
//! `nalgebra` for node transforms.

pub use nalgebra;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// 3x3 matrix (f32).
pub type Mat3 = nalgebra::Matrix3<f32>;

/// 4x4 matrix (f32).
pub type Mat4 = nalgebra::Matrix4<f32>;

/// Quaternion (f32). Stored as `[x, y, z, w]` in memory.
pub type Quat = nalgebra::Quaternion<f32>;

/// Compose `T * R * S` into one affine matrix.
///
/// The rotation is normalized first, so slightly drifted quaternions from
/// file formats are accepted.
pub fn mat4_from_scale_rotation_translation(
    scale: Vec3,
    rotation: Quat,
    translation: Vec3,
) -> Mat4 {
    let rotation = nalgebra::UnitQuaternion::new_normalize(rotation);
    Mat4::new_translation(&translation)
        * rotation.to_homogeneous()
        * Mat4::new_nonuniform_scaling(&scale)
}

/// Translation-only matrix.
pub fn mat4_from_translation(t: Vec3) -> Mat4 {
    Mat4::new_translation(&t)
}

/// Quaternion from glTF-order `[x, y, z, w]`.
pub fn quat_from_array(a: [f32; 4]) -> Quat {
    Quat::new(a[3], a[0], a[1], a[2])
}

/// Transform a point by an affine 4x4 matrix.
pub fn transform_point(m: &Mat4, p: [f32; 3]) -> [f32; 3] {
    let out = m.transform_point(&nalgebra::Point3::new(p[0], p[1], p[2]));
    [out.x, out.y, out.z]
}

/// Normal matrix (inverse transpose of the upper 3x3) of an affine transform.
///
/// Falls back to the plain upper 3x3 when the matrix is singular.
pub fn normal_matrix(m: &Mat4) -> Mat3 {
    let upper: Mat3 = m.fixed_view::<3, 3>(0, 0).into_owned();
    upper
        .try_inverse()
        .map(|inv| inv.transpose())
        .unwrap_or(upper)
}

/// Transform a normal by a normal matrix and renormalize it.
///
/// Zero-length results are returned as the zero vector.
pub fn transform_normal(n: &Mat3, v: [f32; 3]) -> [f32; 3] {
    let out = n * Vec3::new(v[0], v[1], v[2]);
    let len = out.norm();
    if len > 0.0 {
        [out.x / len, out.y / len, out.z / len]
    } else {
        [0.0, 0.0, 0.0]
    }
}
