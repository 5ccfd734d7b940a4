//! Quadrotor dynamics.
use crate::{body_to_earth_frame, earth_to_body_frame, SimConfig};
use log::trace;
use nalgebra::Vector3;
use std::f64::consts::TAU;

/// Number of scalars in a pose, `(x, y, z, roll, pitch, yaw)`.
pub const POSE_DIM: usize = 6;

const GRAVITY: f64 = -9.81;
const RHO: f64 = 1.2;
const MASS: f64 = 0.958;
const DT: f64 = 1.0 / 50.0;
const C_D: f64 = 0.3;
const L_TO_ROTOR: f64 = 0.4;
const PROPELLER_SIZE: f64 = 0.1;
const WIDTH: f64 = 0.51;
const LENGTH: f64 = 0.51;
const HEIGHT: f64 = 0.235;
const ENV_BOUNDS: f64 = 300.0;

/// Rigid-body simulator of a quadrotor.
///
/// Each call of [`PhysicsSim::next_timestep`] advances the simulation by
/// 1/50 s with the four rotor speeds held constant over the tick.
#[derive(Debug, Clone)]
pub struct PhysicsSim {
    config: SimConfig,

    dims: Vector3<f64>,
    areas: Vector3<f64>,
    moments_of_inertia: Vector3<f64>,
    lower_bounds: Vector3<f64>,
    upper_bounds: Vector3<f64>,

    time: f64,
    position: Vector3<f64>,
    angles: Vector3<f64>,
    v: Vector3<f64>,
    angular_v: Vector3<f64>,
    linear_accel: Vector3<f64>,
    angular_accels: Vector3<f64>,
    prop_wind_speed: [f64; 4],
    done: bool,
}

impl PhysicsSim {
    /// Builds a simulator in the initial state given by `config`.
    pub fn new(config: SimConfig) -> Self {
        let dims = Vector3::new(WIDTH, LENGTH, HEIGHT);
        let areas = Vector3::new(LENGTH * HEIGHT, WIDTH * HEIGHT, WIDTH * LENGTH);
        let moments_of_inertia = Vector3::new(
            MASS * (HEIGHT.powi(2) + WIDTH.powi(2)) / 12.0,
            MASS * (HEIGHT.powi(2) + LENGTH.powi(2)) / 12.0,
            MASS * (WIDTH.powi(2) + LENGTH.powi(2)) / 12.0,
        );

        let mut sim = Self {
            config,
            dims,
            areas,
            moments_of_inertia,
            lower_bounds: Vector3::new(-ENV_BOUNDS / 2.0, -ENV_BOUNDS / 2.0, 0.0),
            upper_bounds: Vector3::new(ENV_BOUNDS / 2.0, ENV_BOUNDS / 2.0, ENV_BOUNDS),
            time: 0.0,
            position: Vector3::zeros(),
            angles: Vector3::zeros(),
            v: Vector3::zeros(),
            angular_v: Vector3::zeros(),
            linear_accel: Vector3::zeros(),
            angular_accels: Vector3::zeros(),
            prop_wind_speed: [0.0; 4],
            done: false,
        };
        sim.reset();
        sim
    }

    /// Restores the initial conditions given at construction.
    pub fn reset(&mut self) {
        let pose = self.config.init_pose.unwrap_or([0.0; POSE_DIM]);
        self.time = 0.0;
        self.position = Vector3::new(pose[0], pose[1], pose[2]);
        self.angles = Vector3::new(pose[3], pose[4], pose[5]);
        self.v = self.config.init_velocities.unwrap_or_default().into();
        self.angular_v = self.config.init_angle_velocities.unwrap_or_default().into();
        self.linear_accel = Vector3::zeros();
        self.angular_accels = Vector3::zeros();
        self.prop_wind_speed = [0.0; 4];
        self.done = false;
    }

    /// Advances the simulation by one tick and returns `true` if the episode is over.
    ///
    /// The episode is over once the quadrotor reaches the boundary of the
    /// flight volume (the ground included) or the simulated time exceeds the
    /// runtime. The flag stays set until [`PhysicsSim::reset`].
    pub fn next_timestep(&mut self, rotor_speeds: &[f64; 4]) -> bool {
        self.calc_prop_wind_speed();
        let thrusts = self.propeller_thrusts(rotor_speeds);
        self.linear_accel = self.linear_forces(&thrusts) / MASS;

        let position = self.position + self.v * DT + 0.5 * self.linear_accel * DT.powi(2);
        self.v += self.linear_accel * DT;

        let moments = self.moments(&thrusts);
        self.angular_accels = moments.component_div(&self.moments_of_inertia);
        let angles = self.angles + self.angular_v * DT + 0.5 * self.angular_accels * DT.powi(2);
        self.angles = angles.map(|a| a.rem_euclid(TAU));
        self.angular_v += self.angular_accels * DT;

        for i in 0..3 {
            if position[i] <= self.lower_bounds[i] {
                self.position[i] = self.lower_bounds[i];
                self.done = true;
            } else if position[i] > self.upper_bounds[i] {
                self.position[i] = self.upper_bounds[i];
                self.done = true;
            } else {
                self.position[i] = position[i];
            }
        }

        self.time += DT;
        if self.time > self.config.runtime {
            self.done = true;
        }

        trace!(
            "t = {:.3}, pose = {:?}, thrusts = {:?}",
            self.time,
            self.pose(),
            thrusts
        );

        self.done
    }

    /// Current pose `(x, y, z, roll, pitch, yaw)`.
    pub fn pose(&self) -> [f64; POSE_DIM] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.angles.x,
            self.angles.y,
            self.angles.z,
        ]
    }

    /// Linear velocity in the earth frame.
    pub fn velocity(&self) -> Vector3<f64> {
        self.v
    }

    /// Angular velocity of the Euler angles.
    pub fn angular_velocity(&self) -> Vector3<f64> {
        self.angular_v
    }

    /// Linear acceleration of the last tick.
    pub fn linear_accel(&self) -> Vector3<f64> {
        self.linear_accel
    }

    /// Angular acceleration of the last tick.
    pub fn angular_accels(&self) -> Vector3<f64> {
        self.angular_accels
    }

    /// Simulated time since the last reset.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Time limit of an episode.
    pub fn runtime(&self) -> f64 {
        self.config.runtime
    }

    /// Whether the episode is over.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Length of a tick in seconds.
    pub fn dt(&self) -> f64 {
        DT
    }

    fn body_velocity(&self) -> Vector3<f64> {
        earth_to_body_frame(self.angles.x, self.angles.y, self.angles.z) * self.v
    }

    fn linear_drag(&self) -> Vector3<f64> {
        let v = self.body_velocity();
        0.5 * RHO * C_D * v.component_mul(&v.abs()).component_mul(&self.areas)
    }

    fn linear_forces(&self, thrusts: &[f64; 4]) -> Vector3<f64> {
        let gravity_force = Vector3::new(0.0, 0.0, MASS * GRAVITY);
        let thrust_body_force = Vector3::new(0.0, 0.0, thrusts.iter().sum::<f64>());
        let body_forces = thrust_body_force - self.linear_drag();
        body_to_earth_frame(self.angles.x, self.angles.y, self.angles.z) * body_forces
            + gravity_force
    }

    fn moments(&self, thrusts: &[f64; 4]) -> Vector3<f64> {
        let thrust_moment = Vector3::new(
            (thrusts[3] - thrusts[2]) * L_TO_ROTOR,
            (thrusts[1] - thrusts[0]) * L_TO_ROTOR,
            0.0,
        );
        let w = self.angular_v;
        let drag_moment = 0.5
            * RHO
            * C_D
            * w.component_mul(&w.abs())
                .component_mul(&self.areas)
                .component_mul(&self.dims)
                .component_mul(&self.dims);
        thrust_moment - drag_moment
    }

    // Airflow through each propeller disc along the body z axis.
    fn calc_prop_wind_speed(&mut self) {
        let vz = self.body_velocity().z;
        let pitch_rate = self.angular_v.y * L_TO_ROTOR;
        let roll_rate = self.angular_v.x * L_TO_ROTOR;
        self.prop_wind_speed = [
            vz + pitch_rate,
            vz - pitch_rate,
            vz + roll_rate,
            vz - roll_rate,
        ];
    }

    // Net thrust of each propeller from its advance ratio.
    fn propeller_thrusts(&self, rotor_speeds: &[f64; 4]) -> [f64; 4] {
        let d = PROPELLER_SIZE;
        let mut thrusts = [0.0; 4];
        for (i, thrust) in thrusts.iter_mut().enumerate() {
            let n = rotor_speeds[i];
            if n == 0.0 {
                continue;
            }
            let j = (self.prop_wind_speed[i] / n * d).max(0.0);
            let c_t = (0.12 - 0.07 * j - 0.1 * j.powi(2)).max(0.0);
            *thrust = c_t * RHO * n.powi(2) * d.powi(4);
        }
        thrusts
    }
}
