use std::time::Instant;

use crate::simulation::forces::{AccelSet, UniformGravity};
use crate::simulation::integrator::step;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::grid_bodies;
use crate::simulation::states::System;
use crate::visualization::frame::BodyInstance;
use crate::visualization::geometry::{SceneBuilder, SceneGeometry};

/// Helper to build a seeded grid System with `grid^3` bodies
/// The box grows with the grid so every body starts inside it
fn make_system(grid: usize, params: &Parameters) -> System {
    System::new(grid_bodies(params.seed, grid, 2.0 * params.radius + 0.4))
}

/// Helper to build parameters whose box fits a grid of `grid` bodies per edge
fn make_params(grid: usize) -> Parameters {
    let mut params = Parameters::default();
    params.box_half_extent = params.box_half_extent.max(grid as f32 * (params.radius + 0.2) + params.radius);
    params
}

/// Time `step` for growing body counts
/// Contacts are checked pairwise, so expect roughly quadratic growth
pub fn bench_step() {
    let grids = [2, 4, 6, 8, 10, 12];
    let steps = 20; // steps averaged per size

    for grid in grids {
        let params = make_params(grid);
        let mut sys = make_system(grid, &params);
        let forces = AccelSet::new().with(UniformGravity { g: params.gravity });

        // Warm-up
        step(&mut sys, &forces, &params);

        let t0 = Instant::now();
        for _ in 0..steps {
            step(&mut sys, &forces, &params);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {:5}, step = {:10.6} ms", sys.bodies.len(), per_step * 1000.0);
    }
}

/// Time the per-frame scene rebuild for growing body counts
/// Paste output directly into a spreadsheet to graph
pub fn bench_scene() {
    println!("N,triangles,build_ms");

    for grid in 2..=16 {
        let params = make_params(grid);
        let sys = make_system(grid, &params);
        let builder = SceneBuilder::new(params.box_half_extent);

        let instances: Vec<BodyInstance> = sys
            .bodies
            .iter()
            .map(|b| BodyInstance { position: b.x, radius: params.radius, color: b.color })
            .collect();

        let mut scene = SceneGeometry::default();
        let frames = 10;

        let t0 = Instant::now();
        for _ in 0..frames {
            if let Err(e) = builder.build_into(&instances, &mut scene) {
                println!("{},-,{}", instances.len(), e);
                return;
            }
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / frames as f64;

        println!("{},{},{:.6}", instances.len(), scene.triangle_count(), ms);
    }
}
