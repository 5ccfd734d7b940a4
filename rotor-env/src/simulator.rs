//! Interface to the physics simulator driven by [`TaskEnv`](crate::TaskEnv).
use rotor_sim::{PhysicsSim, SimConfig, POSE_DIM};

/// Position `(x, y, z)` followed by Euler angles `(roll, pitch, yaw)`.
pub type Pose = [f64; POSE_DIM];

/// A simulator advancing a quadrotor one tick at a time.
pub trait Simulator {
    /// Builds the simulator in the initial state described by `config`.
    fn build(config: &SimConfig) -> Self
    where
        Self: Sized;

    /// Advances one tick with the given rotor speeds and returns `true` if
    /// the episode is over.
    fn next_timestep(&mut self, rotor_speeds: &[f64; 4]) -> bool;

    /// Current pose.
    fn pose(&self) -> Pose;

    /// Restores the initial state.
    fn reset(&mut self);

    /// Simulated time since the last reset.
    fn time(&self) -> f64;
}

impl Simulator for PhysicsSim {
    fn build(config: &SimConfig) -> Self {
        PhysicsSim::new(config.clone())
    }

    fn next_timestep(&mut self, rotor_speeds: &[f64; 4]) -> bool {
        PhysicsSim::next_timestep(self, rotor_speeds)
    }

    fn pose(&self) -> Pose {
        PhysicsSim::pose(self)
    }

    fn reset(&mut self) {
        PhysicsSim::reset(self)
    }

    fn time(&self) -> f64 {
        PhysicsSim::time(self)
    }
}
