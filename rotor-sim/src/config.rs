//! Configuration of [`PhysicsSim`](super::PhysicsSim).
use serde::{Deserialize, Serialize};

/// Initial conditions and episode length of [`PhysicsSim`](super::PhysicsSim).
///
/// Fields left as `None` fall back to the origin at rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Initial pose `(x, y, z, roll, pitch, yaw)`.
    pub init_pose: Option<[f64; 6]>,

    /// Initial linear velocity in the earth frame.
    pub init_velocities: Option<[f64; 3]>,

    /// Initial angular velocity of the three Euler angles in rad/s.
    pub init_angle_velocities: Option<[f64; 3]>,

    /// Time limit of an episode in seconds.
    pub runtime: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            init_pose: None,
            init_velocities: None,
            init_angle_velocities: None,
            runtime: 5.0,
        }
    }
}

impl SimConfig {
    /// Sets the initial pose.
    pub fn init_pose(mut self, v: [f64; 6]) -> Self {
        self.init_pose = Some(v);
        self
    }

    /// Sets the initial linear velocity.
    pub fn init_velocities(mut self, v: [f64; 3]) -> Self {
        self.init_velocities = Some(v);
        self
    }

    /// Sets the initial angular velocity.
    pub fn init_angle_velocities(mut self, v: [f64; 3]) -> Self {
        self.init_angle_velocities = Some(v);
        self
    }

    /// Sets the time limit of an episode.
    pub fn runtime(mut self, v: f64) -> Self {
        self.runtime = v;
        self
    }
}
