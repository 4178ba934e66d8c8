//! 3D transform math shared by the physics step and the renderer interface
//!
//! Vectors are `nalgebra` 3-vectors in single precision. Matrices are 4x4 and
//! follow the **row-vector convention** throughout this crate:
//! - a point `p` is transformed as `[p.x, p.y, p.z, 1] * M`
//! - translation occupies the last row of `M`
//! - `multiply(A, B)` is the plain product `A * B`, so `p * (A * B)` applies `A` first
//!
//! Flattening a matrix with [`to_gl_array`] walks the cells row by row, which is
//! the column-major layout a column-vector shader expects with `transpose = false`.
//!
//! Vector operations (`dot`, `cross`, `norm`, `normalize`, arithmetic) are the
//! ones `nalgebra::Vector3` already provides. `normalize` of a zero vector gives
//! NaN components; callers must pass non-zero input.

pub mod matrix;

use nalgebra::{Matrix4, Vector3};

pub type Vec3 = Vector3<f32>;
pub type Mat4 = Matrix4<f32>;

pub use matrix::{
    affine_inverse, identity, look_at, multiply, project, project_point, rotate, rotate_x,
    rotate_y, rotate_z, to_gl_array, transform_point, translate,
};
