//! Matrix builders and products
//!
//! Every function here is pure. Preconditions (non-degenerate frustum,
//! rotation+translation input to [`affine_inverse`], distinct look-at points)
//! are the caller's responsibility and are only checked in debug builds.

use nalgebra::RowVector4;

use super::{Mat4, Vec3};

/// Diagonal matrix with `scale` on the diagonal; `identity(1.0)` is the
/// multiplicative identity
pub fn identity(scale: f32) -> Mat4 {
    Mat4::from_diagonal_element(scale)
}

/// Standard 4x4 product `a * b`
/// Under row vectors the result applies `a` first, then `b`
pub fn multiply(a: &Mat4, b: &Mat4) -> Mat4 {
    a * b
}

/// Perspective projection mapping view-space `z` in `[near, far]` to depth `[0, 1]`
///
/// `fov` is the vertical field of view in radians and `aspect` is width / height.
/// The homogeneous `w` of the output equals the input `z`.
pub fn project(near: f32, far: f32, aspect: f32, fov: f32) -> Mat4 {
    debug_assert!(far > near && near > 0.0, "project: need far > near > 0");

    let vertical_scale = (fov * 0.5).tan();

    #[rustfmt::skip]
    let m = Mat4::new(
        1.0 / (aspect * vertical_scale), 0.0,                  0.0,                        0.0,
        0.0,                             1.0 / vertical_scale, 0.0,                        0.0,
        0.0,                             0.0,                  far / (far - near),         1.0,
        0.0,                             0.0,                  (far * near) / (near - far), 0.0,
    );
    m
}

/// Identity with `(x, y, z)` in the translation row
pub fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    let mut m = Mat4::identity();
    m[(3, 0)] = x;
    m[(3, 1)] = y;
    m[(3, 2)] = z;
    m
}

/// Rotation about the x axis (pitch)
pub fn rotate_x(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();

    #[rustfmt::skip]
    let m = Mat4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0,   c,   s, 0.0,
        0.0,  -s,   c, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );
    m
}

/// Rotation about the y axis (yaw)
pub fn rotate_y(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();

    #[rustfmt::skip]
    let m = Mat4::new(
          c, 0.0,  -s, 0.0,
        0.0, 1.0, 0.0, 0.0,
          s, 0.0,   c, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );
    m
}

/// Rotation about the z axis (roll)
pub fn rotate_z(angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();

    #[rustfmt::skip]
    let m = Mat4::new(
          c,   s, 0.0, 0.0,
         -s,   c, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );
    m
}

/// Euler rotation composed as `yaw * pitch * roll` (angles in radians)
pub fn rotate(pitch: f32, yaw: f32, roll: f32) -> Mat4 {
    multiply(&multiply(&rotate_y(yaw), &rotate_x(pitch)), &rotate_z(roll))
}

/// Camera-to-world basis looking from `eye` towards `target`
///
/// Rows are `right`, `up`, `forward` and finally `eye` itself. This is not a
/// view matrix: pass it through [`affine_inverse`] to get world-to-camera.
/// `target - eye` must be non-zero and not parallel to the world up axis.
pub fn look_at(eye: &Vec3, target: &Vec3) -> Mat4 {
    let world_up = Vec3::y();
    let forward = (target - eye).normalize();
    let right = world_up.cross(&forward).normalize();
    let up = forward.cross(&right);

    #[rustfmt::skip]
    let m = Mat4::new(
        right.x,   right.y,   right.z,   0.0,
        up.x,      up.y,      up.z,      0.0,
        forward.x, forward.y, forward.z, 0.0,
        eye.x,     eye.y,     eye.z,     1.0,
    );
    m
}

/// Inverse of a rotation + translation matrix
///
/// Transposes the upper-left 3x3 block and rebuilds the translation row as
/// `-t * R^T`. Any scale or shear in `m` silently yields a wrong result.
pub fn affine_inverse(m: &Mat4) -> Mat4 {
    let mut inv = Mat4::identity();

    for r in 0..3 {
        for c in 0..3 {
            inv[(r, c)] = m[(c, r)];
        }
    }

    // t * R^T, row vector times the transposed block
    for c in 0..3 {
        let mut acc = 0.0;
        for k in 0..3 {
            acc += m[(3, k)] * inv[(k, c)];
        }
        inv[(3, c)] = -acc;
    }

    inv
}

/// Transform a point (w = 1) and drop the resulting `w`
/// Correct for affine matrices, see [`project_point`] for projections
pub fn transform_point(m: &Mat4, p: &Vec3) -> Vec3 {
    let row = RowVector4::new(p.x, p.y, p.z, 1.0) * m;
    Vec3::new(row[0], row[1], row[2])
}

/// Transform a point (w = 1) and apply the perspective divide
pub fn project_point(m: &Mat4, p: &Vec3) -> Vec3 {
    let row = RowVector4::new(p.x, p.y, p.z, 1.0) * m;
    Vec3::new(row[0], row[1], row[2]) / row[3]
}

/// Flatten row by row into the 16 floats uploaded as a shader uniform
pub fn to_gl_array(m: &Mat4) -> [f32; 16] {
    let mut out = [0.0f32; 16];
    for r in 0..4 {
        for c in 0..4 {
            out[r * 4 + c] = m[(r, c)];
        }
    }
    out
}
