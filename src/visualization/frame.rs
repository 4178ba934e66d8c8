//! Per-frame data handed to the renderer
//!
//! The renderer never sees simulation internals: it asks for a projection, a
//! view and a light matrix as 16 floats each (see [`to_gl_array`] for the
//! layout) and reads one [`BodyInstance`] per sphere.

use crate::configuration::config::{CameraConfig, LightConfig};
use crate::transform::{
    affine_inverse, look_at, multiply, project, rotate, to_gl_array, translate, Mat4, Vec3,
};

/// What the renderer draws for one body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyInstance {
    pub position: Vec3,
    pub radius: f32,
    pub color: Vec3,
}

/// Matrices and instances for one rendered frame
#[derive(Debug, Clone)]
pub struct FrameData {
    pub projection: [f32; 16],
    pub view: [f32; 16],
    pub light_view_projection: [f32; 16],
    pub bodies: Vec<BodyInstance>,
}

/// Viewer camera placed by a translation and an Euler rotation
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub rotation: Vec3, // pitch, yaw, roll in radians
    pub near: f32,
    pub far: f32,
    pub fov: f32, // vertical, radians
    pub aspect: f32, // fallback width / height
}

impl Camera {
    pub fn from_config(cfg: &CameraConfig) -> Self {
        Self {
            position: Vec3::from(cfg.position),
            rotation: Vec3::from(cfg.rotation.map(f32::to_radians)),
            near: cfg.near,
            far: cfg.far,
            fov: cfg.fov.to_radians(),
            aspect: cfg.aspect,
        }
    }

    /// `translate(position) * rotate(rotation)`
    pub fn model_matrix(&self) -> Mat4 {
        let t = translate(self.position.x, self.position.y, self.position.z);
        let r = rotate(self.rotation.x, self.rotation.y, self.rotation.z);
        multiply(&t, &r)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        project(self.near, self.far, aspect, self.fov)
    }

    /// World-to-camera transform, the affine inverse of [`Camera::model_matrix`]
    pub fn view(&self) -> Mat4 {
        affine_inverse(&self.model_matrix())
    }

    pub fn projection_matrix(&self, aspect: f32) -> [f32; 16] {
        to_gl_array(&self.projection(aspect))
    }

    pub fn view_matrix(&self) -> [f32; 16] {
        to_gl_array(&self.view())
    }
}

/// Spot-style light rendering the shadow depth map
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub target: Vec3,
    pub near: f32,
    pub far: f32,
    pub fov: f32, // radians
}

impl Light {
    pub fn from_config(cfg: &LightConfig) -> Self {
        Self {
            position: Vec3::from(cfg.position),
            target: Vec3::from(cfg.target),
            near: cfg.near,
            far: cfg.far,
            fov: cfg.fov.to_radians(),
        }
    }

    /// World-to-light transform
    ///
    /// The affine inverse is taken of the look-at basis alone, which is pure
    /// rotation + translation; the projection is composed afterwards.
    pub fn view(&self) -> Mat4 {
        affine_inverse(&look_at(&self.position, &self.target))
    }

    /// World to light clip space: `view` first, then a square projection
    pub fn view_projection_matrix(&self) -> Mat4 {
        multiply(&self.view(), &project(self.near, self.far, 1.0, self.fov))
    }

    pub fn view_projection(&self) -> [f32; 16] {
        to_gl_array(&self.view_projection_matrix())
    }
}
