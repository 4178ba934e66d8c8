pub mod transform;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use transform::{Mat4, Vec3};
pub use simulation::states::{Body, System};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::forces::{Acceleration, AccelSet, UniformGravity};
pub use simulation::integrator::{step, step_n};
pub use simulation::scenario::{grid_bodies, Scenario};

pub use configuration::config::{BodyConfig, CameraConfig, EngineConfig, LightConfig, ParametersConfig, ScenarioConfig};

pub use visualization::frame::{BodyInstance, Camera, FrameData, Light};
pub use visualization::geometry::{SceneBuilder, SceneGeometry, Vertex, MAX_TRIANGLES};

pub use benchmark::benchmark::{bench_scene, bench_step};

pub use error::{SimError, SimResult};
