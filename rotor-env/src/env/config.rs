//! Configuration of [`TaskEnv`](super::TaskEnv).
use crate::{ActionPolicy, TaskError};
use anyhow::Result;
use rotor_sim::SimConfig;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Default target position.
pub const DEFAULT_TARGET_POS: [f64; 3] = [0.0, 0.0, 10.0];

/// Configurations of [`TaskEnv`](super::TaskEnv).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskConfig {
    /// Initial conditions and runtime of the simulator.
    pub sim: SimConfig,

    /// Target position `(x, y, z)`. `None` means [`DEFAULT_TARGET_POS`].
    pub target_pos: Option<[f64; 3]>,

    /// Number of simulator ticks per decision step.
    pub action_repeat: usize,

    /// Lower bound of rotor speeds.
    pub action_low: f64,

    /// Upper bound of rotor speeds.
    pub action_high: f64,

    /// Handling of rotor speeds outside the bounds.
    pub action_policy: ActionPolicy,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            target_pos: None,
            action_repeat: 3,
            action_low: 425.0,
            action_high: 475.0,
            action_policy: ActionPolicy::PassThrough,
        }
    }
}

impl TaskConfig {
    /// Sets the initial pose of the quadrotor.
    pub fn init_pose(mut self, v: [f64; 6]) -> Self {
        self.sim = self.sim.init_pose(v);
        self
    }

    /// Sets the initial linear velocity.
    pub fn init_velocities(mut self, v: [f64; 3]) -> Self {
        self.sim = self.sim.init_velocities(v);
        self
    }

    /// Sets the initial angular velocity.
    pub fn init_angle_velocities(mut self, v: [f64; 3]) -> Self {
        self.sim = self.sim.init_angle_velocities(v);
        self
    }

    /// Sets the time limit of an episode.
    pub fn runtime(mut self, v: f64) -> Self {
        self.sim = self.sim.runtime(v);
        self
    }

    /// Sets the target position.
    pub fn target_pos(mut self, v: [f64; 3]) -> Self {
        self.target_pos = Some(v);
        self
    }

    /// Sets the number of simulator ticks per decision step.
    pub fn action_repeat(mut self, v: usize) -> Self {
        self.action_repeat = v;
        self
    }

    /// Sets the bounds of rotor speeds.
    pub fn action_bounds(mut self, low: f64, high: f64) -> Self {
        self.action_low = low;
        self.action_high = high;
        self
    }

    /// Sets the handling of out-of-range rotor speeds.
    pub fn action_policy(mut self, v: ActionPolicy) -> Self {
        self.action_policy = v;
        self
    }

    /// Checks the values that [`TaskEnv`](super::TaskEnv) relies on.
    pub fn check(&self) -> Result<(), TaskError> {
        if self.action_repeat == 0 {
            return Err(TaskError::InvalidActionRepeat(self.action_repeat));
        }
        let runtime = self.sim.runtime;
        if !runtime.is_finite() || runtime <= 0.0 {
            return Err(TaskError::InvalidRuntime(runtime));
        }
        let (low, high) = (self.action_low, self.action_high);
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(TaskError::InvalidActionBounds { low, high });
        }
        Ok(())
    }

    /// Constructs [`TaskConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`TaskConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
