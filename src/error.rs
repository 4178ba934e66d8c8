//! Error types for the simulation crate
//!
//! Only the non-numeric surface can fail: loading and validating scenarios,
//! and building scene geometry within its fixed capacity. Matrix math and the
//! physics step never return errors.

use thiserror::Error;

/// Errors raised while building or driving a scenario
#[derive(Debug, Error)]
pub enum SimError {
    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Scenario file is not valid YAML for `ScenarioConfig`
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Scenario values that cannot describe a valid scene
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Scene geometry would exceed the fixed triangle budget
    #[error("Scene needs {requested} triangles, capacity is {capacity}")]
    SceneCapacity { requested: usize, capacity: usize },
}

/// Result type for fallible simulation operations
pub type SimResult<T> = Result<T, SimError>;
