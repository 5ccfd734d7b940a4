//! Rigid-body simulator of a quadrotor.
//!
//! [`PhysicsSim`] integrates the translational and rotational dynamics of a
//! quadrotor driven by four rotor speeds. The pose is reported as
//! `(x, y, z, roll, pitch, yaw)`. An episode of the simulator ends when the
//! quadrotor leaves the flight volume (including touching the ground) or
//! when the simulated time exceeds the configured runtime.
//!
//! ```
//! use rotor_sim::{PhysicsSim, SimConfig};
//!
//! let mut sim = PhysicsSim::new(SimConfig::default());
//! let done = sim.next_timestep(&[450.0; 4]);
//! assert!(!done);
//! assert!(sim.pose()[2] > 0.0);
//! ```
mod config;
mod frame;
mod sim;

pub use config::SimConfig;
pub use frame::{body_to_earth_frame, earth_to_body_frame};
pub use sim::{PhysicsSim, POSE_DIM};
