use sphsim::{ScenarioConfig, Scenario, SceneBuilder, SceneGeometry};
use sphsim::{bench_scene, bench_step};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file; relative names are looked up in `scenarios/`
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Override the number of frames to run
    #[arg(long)]
    frames: Option<usize>,

    /// Run the timing benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,

    /// Print every body position after the last frame
    #[arg(long)]
    dump: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let given = PathBuf::from(file_name);
    let config_path = if given.exists() {
        given
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let scenario_cfg = ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_step();
        bench_scene();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let aspect = scenario_cfg.camera.aspect;

    let mut scenario = Scenario::build_scenario(scenario_cfg)?;
    let frames = args.frames.unwrap_or(scenario.engine.frames);
    info!(
        "loaded {} bodies, dt = {}, {} substeps",
        scenario.system.bodies.len(),
        scenario.parameters.dt,
        scenario.parameters.substeps
    );

    scenario.warm_up();

    let builder = SceneBuilder::new(scenario.parameters.box_half_extent);
    let mut scene = SceneGeometry::default();

    for frame_idx in 0..frames {
        scenario.advance_frame();

        // stand-in for the renderer: consume the frame exactly as it would
        let frame = scenario.frame(aspect);
        builder.build_into(&frame.bodies, &mut scene)?;

        if frame_idx % 60 == 0 {
            info!(
                "frame {:5}: t = {:.3}, kinetic energy = {:.4}, triangles = {}",
                frame_idx,
                scenario.system.t,
                scenario.system.kinetic_energy(),
                scene.triangle_count()
            );
        }
    }

    info!("finished {} frames at t = {:.3}", frames, scenario.system.t);

    if args.dump {
        for (i, b) in scenario.system.bodies.iter().enumerate() {
            println!("{:3} {:+.6} {:+.6} {:+.6}", i, b.x.x, b.x.y, b.x.z);
        }
    }

    Ok(())
}
