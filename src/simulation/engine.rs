//! High-level runtime engine settings
//!
//! Frame pacing used when driving a `Scenario`: the warm-up burst run once
//! at start, the number of steps per rendered frame, and how many frames the
//! CLI runs.

pub const DEFAULT_WARMUP_STEPS: usize = 1000;
pub const DEFAULT_STEPS_PER_FRAME: usize = 10;
pub const DEFAULT_FRAMES: usize = 600;

#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub warmup_steps: usize, // steps run once before the first frame
    pub steps_per_frame: usize, // steps between two rendered frames
    pub frames: usize, // frames run by the CLI driver
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            warmup_steps: DEFAULT_WARMUP_STEPS,
            steps_per_frame: DEFAULT_STEPS_PER_FRAME,
            frames: DEFAULT_FRAMES,
        }
    }
}
