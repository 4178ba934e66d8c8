//! CPU-side scene geometry rebuilt every frame
//!
//! The scene is the static room (the inside of the simulation box) followed by
//! one tessellated sphere per body. Vertices are `#[repr(C)]` + `Pod` so the
//! renderer can upload them as raw bytes.
//!
//! The triangle budget is fixed at [`MAX_TRIANGLES`]; a request that would
//! exceed it fails up front instead of growing the buffers.

use std::f32::consts::PI;

use bytemuck::{Pod, Zeroable};

use crate::error::{SimError, SimResult};
use crate::transform::Vec3;
use crate::visualization::frame::BodyInstance;

/// Capacity of the per-frame triangle scratch buffer
pub const MAX_TRIANGLES: usize = 1 << 20;

/// Six faces of two triangles each
pub const ROOM_TRIANGLES: usize = 12;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    fn new(position: Vec3, normal: Vec3, color: Vec3) -> Self {
        Self {
            position: position.into(),
            normal: normal.into(),
            color: color.into(),
        }
    }
}

/// Triangle list: `indices` holds three vertex indices per triangle
#[derive(Debug, Clone, Default)]
pub struct SceneGeometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl SceneGeometry {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }
}

/// Tessellation and room settings
#[derive(Debug, Clone, PartialEq)]
pub struct SceneBuilder {
    pub half_extent: f32, // room walls at +/- this value
    pub room_color: Vec3,
    pub segments: usize, // sphere slices around y, >= 3
    pub rings: usize, // sphere stacks from pole to pole, >= 2
}

impl SceneBuilder {
    pub fn new(half_extent: f32) -> Self {
        Self {
            half_extent,
            room_color: Vec3::new(0.8, 0.8, 0.8),
            segments: 24,
            rings: 12,
        }
    }

    /// Triangles emitted for one sphere
    pub fn sphere_triangles(&self) -> usize {
        self.segments * (2 * self.rings).saturating_sub(2)
    }

    /// Triangles emitted for a room holding `bodies` spheres
    pub fn triangle_count(&self, bodies: usize) -> usize {
        ROOM_TRIANGLES + bodies * self.sphere_triangles()
    }

    pub fn build(&self, bodies: &[BodyInstance]) -> SimResult<SceneGeometry> {
        let mut scene = SceneGeometry::default();
        self.build_into(bodies, &mut scene)?;
        Ok(scene)
    }

    /// Refill `scene` in place, keeping its allocations across frames
    pub fn build_into(&self, bodies: &[BodyInstance], scene: &mut SceneGeometry) -> SimResult<()> {
        if self.segments < 3 || self.rings < 2 {
            return Err(SimError::InvalidConfig(format!(
                "sphere tessellation needs segments >= 3 and rings >= 2, got {} x {}",
                self.segments, self.rings
            )));
        }

        let requested = self.triangle_count(bodies.len());
        if requested > MAX_TRIANGLES {
            return Err(SimError::SceneCapacity {
                requested,
                capacity: MAX_TRIANGLES,
            });
        }

        scene.clear();
        scene.indices.reserve(requested * 3);

        self.push_room(scene);
        for body in bodies {
            self.push_sphere(scene, body);
        }
        Ok(())
    }

    /// Inside of the box: one quad per face, normals pointing into the room
    fn push_room(&self, scene: &mut SceneGeometry) {
        let h = self.half_extent;
        let corners = [(-h, -h), (h, -h), (h, h), (-h, h)];

        for axis in 0..3 {
            let u = (axis + 1) % 3;
            let w = (axis + 2) % 3;

            for side in [-1.0f32, 1.0] {
                let mut normal = Vec3::zeros();
                normal[axis] = -side;

                let base = scene.vertices.len() as u32;
                for (cu, cw) in corners {
                    let mut p = Vec3::zeros();
                    p[axis] = side * h;
                    p[u] = cu;
                    p[w] = cw;
                    scene.vertices.push(Vertex::new(p, normal, self.room_color));
                }

                // corner order winds around +axis; flip it on the positive wall
                let quad: [u32; 6] = if side < 0.0 {
                    [0, 1, 2, 0, 2, 3]
                } else {
                    [0, 2, 1, 0, 3, 2]
                };
                scene.indices.extend(quad.iter().map(|i| base + i));
            }
        }
    }

    /// UV sphere, counter-clockwise seen from outside
    fn push_sphere(&self, scene: &mut SceneGeometry, body: &BodyInstance) {
        let base = scene.vertices.len() as u32;
        let stride = (self.segments + 1) as u32;

        for r in 0..=self.rings {
            let theta = PI * r as f32 / self.rings as f32;
            let (sin_t, cos_t) = theta.sin_cos();

            for s in 0..=self.segments {
                let phi = 2.0 * PI * s as f32 / self.segments as f32;
                let (sin_p, cos_p) = phi.sin_cos();

                let n = Vec3::new(sin_t * cos_p, cos_t, sin_t * sin_p);
                let p = body.position + n * body.radius;
                scene.vertices.push(Vertex::new(p, n, body.color));
            }
        }

        let rings = self.rings as u32;
        for r in 0..rings {
            for s in 0..self.segments as u32 {
                let a = base + r * stride + s;
                let b = a + stride;
                let c = b + 1;
                let d = a + 1;

                // the pole bands only have one non-degenerate triangle
                if r != 0 {
                    scene.indices.extend_from_slice(&[a, d, b]);
                }
                if r != rings - 1 {
                    scene.indices.extend_from_slice(&[d, c, b]);
                }
            }
        }
    }
}
