//! Quadrotor hover task for reinforcement learning.
//!
//! [`TaskEnv`] wraps a quadrotor [`Simulator`] and exposes it through the
//! [`Env`](rotor_core::Env) trait. One decision step of the agent repeats the
//! same rotor speeds for `action_repeat` simulator ticks. The observation is
//! the concatenation of the pose after each tick, and the reward is the sum
//! of a per-tick reward decaying with the distance to a target position.
//!
//! ```
//! use anyhow::Result;
//! use rotor_core::Env as _;
//! use rotor_env::{RotorAct, TaskConfig, TaskEnv};
//!
//! fn main() -> Result<()> {
//!     let config = TaskConfig::default();
//!     let mut env: TaskEnv = TaskEnv::build(&config, 0)?;
//!
//!     let obs = env.reset()?;
//!     assert_eq!(obs.len(), env.state_size());
//!
//!     let (step, _record) = env.step(&RotorAct::new([450.0; 4]))?;
//!     assert_eq!(step.obs.len(), 18);
//!     assert!(step.reward > 0.0);
//!     Ok(())
//! }
//! ```
mod act;
mod env;
mod error;
mod obs;
mod simulator;
pub use act::{ActionPolicy, RotorAct, ACTION_SIZE};
pub use env::{TaskConfig, TaskEnv, TaskInfo, DEFAULT_TARGET_POS};
pub use error::TaskError;
pub use obs::RotorObs;
pub use simulator::{Pose, Simulator};
pub use rotor_sim::{PhysicsSim, SimConfig, POSE_DIM};
