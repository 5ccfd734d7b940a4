//! The hover task.
mod config;
use crate::{ActionPolicy, Pose, RotorAct, RotorObs, Simulator, TaskError, ACTION_SIZE};
use anyhow::Result;
pub use config::{TaskConfig, DEFAULT_TARGET_POS};
use log::{debug, trace};
use rotor_core::{
    record::{Record, RecordValue},
    Env, Info, Step,
};
use rotor_sim::{PhysicsSim, POSE_DIM};

/// Information attached to every [`Step`] of [`TaskEnv`].
#[derive(Debug, Clone, PartialEq)]
pub struct TaskInfo {
    /// Decision steps since the last reset, this one included.
    pub steps: usize,

    /// Simulated time after the step.
    pub time: f64,

    /// Distance between the quadrotor and the target after the step.
    pub distance: f64,
}

impl Info for TaskInfo {}

/// Quadrotor environment rewarding proximity to a target position.
///
/// Every decision step holds the rotor speeds constant for `action_repeat`
/// simulator ticks. The reward of a tick is `1 / ((d + 1)^2 * action_repeat)`
/// where `d` is the distance to the target, so the reward of a decision
/// step lies in `(0, 1]` for any `action_repeat`.
pub struct TaskEnv<S: Simulator = PhysicsSim> {
    // Simulator
    sim: S,

    // Goal of the quadrotor, fixed for the lifetime of the environment.
    target_pos: [f64; 3],

    // Simulator ticks per decision step.
    action_repeat: usize,

    action_low: f64,
    action_high: f64,
    action_policy: ActionPolicy,

    // Decision steps since the last reset.
    steps: usize,
}

impl TaskEnv<PhysicsSim> {
    /// Builds the environment around [`PhysicsSim`].
    pub fn new(config: &TaskConfig) -> Result<Self, TaskError> {
        Self::with_simulator(config, PhysicsSim::new(config.sim.clone()))
    }
}

impl<S: Simulator> TaskEnv<S> {
    /// Builds the environment around the given simulator.
    ///
    /// The simulator is used as is; its initial conditions are not taken from
    /// `config.sim`.
    pub fn with_simulator(config: &TaskConfig, sim: S) -> Result<Self, TaskError> {
        config.check()?;

        Ok(Self {
            sim,
            target_pos: config.target_pos.unwrap_or(DEFAULT_TARGET_POS),
            action_repeat: config.action_repeat,
            action_low: config.action_low,
            action_high: config.action_high,
            action_policy: config.action_policy,
            steps: 0,
        })
    }

    /// Length of an observation, `6 * action_repeat`.
    pub fn state_size(&self) -> usize {
        POSE_DIM * self.action_repeat
    }

    /// Dimension of an action.
    pub fn action_size(&self) -> usize {
        ACTION_SIZE
    }

    /// Lower bound of rotor speeds.
    pub fn action_low(&self) -> f64 {
        self.action_low
    }

    /// Upper bound of rotor speeds.
    pub fn action_high(&self) -> f64 {
        self.action_high
    }

    /// Simulator ticks per decision step.
    pub fn action_repeat(&self) -> usize {
        self.action_repeat
    }

    /// Target position.
    pub fn target_pos(&self) -> [f64; 3] {
        self.target_pos
    }

    /// Decision steps since the last reset.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The wrapped simulator.
    pub fn sim(&self) -> &S {
        &self.sim
    }

    /// Euclidean distance between the current position and the target.
    pub fn distance_to_target(&self) -> f64 {
        let pose = self.sim.pose();
        self.target_pos
            .iter()
            .zip(pose.iter())
            .map(|(t, p)| (t - p).powi(2))
            .sum::<f64>()
            .sqrt()
    }

    /// Reward of the current pose of the simulator.
    pub fn get_reward(&self) -> f64 {
        let distance = self.distance_to_target();
        1.0 / ((distance + 1.0).powi(2) * self.action_repeat as f64)
    }

    /// Runs `action_repeat` ticks with the same rotor speeds.
    ///
    /// Returns the concatenated poses, the summed reward and the termination
    /// flag of the last tick. Earlier ticks reporting termination do not stop
    /// the loop.
    pub fn repeat_action(&mut self, rotor_speeds: &[f64; ACTION_SIZE]) -> (RotorObs, f64, bool) {
        self.steps += 1;

        let mut reward = 0.0;
        let mut done = false;
        let mut poses: Vec<Pose> = Vec::with_capacity(self.action_repeat);

        for _ in 0..self.action_repeat {
            done = self.sim.next_timestep(rotor_speeds);
            reward += self.get_reward();
            poses.push(self.sim.pose());
        }

        (RotorObs::from_poses(&poses), reward, done)
    }

    /// Resets the simulator and the step counter.
    ///
    /// The observation is the reset pose repeated `action_repeat` times.
    pub fn reset_task(&mut self) -> RotorObs {
        self.sim.reset();
        self.steps = 0;
        RotorObs::repeat(self.sim.pose(), self.action_repeat)
    }

    fn record(&self, reward: f64) -> Record {
        let pose = self.sim.pose();
        Record::from_slice(&[
            ("reward", RecordValue::Scalar(reward as _)),
            ("distance", RecordValue::Scalar(self.distance_to_target() as _)),
            ("steps", RecordValue::Scalar(self.steps as _)),
            ("time", RecordValue::Scalar(self.sim.time() as _)),
            ("x", RecordValue::Scalar(pose[0] as _)),
            ("y", RecordValue::Scalar(pose[1] as _)),
            ("z", RecordValue::Scalar(pose[2] as _)),
        ])
    }
}

impl<S: Simulator> Env for TaskEnv<S> {
    type Config = TaskConfig;
    type Obs = RotorObs;
    type Act = RotorAct;
    type Info = TaskInfo;

    /// Builds the environment. The simulator is deterministic, so `seed` is not used.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized,
    {
        debug!("Build TaskEnv with seed {}: {:?}", seed, config);
        Ok(Self::with_simulator(config, S::build(&config.sim))?)
    }

    fn step(&mut self, act: &Self::Act) -> Result<(Step<Self>, Record)>
    where
        Self: Sized,
    {
        let rotor_speeds = self
            .action_policy
            .apply(act, self.action_low, self.action_high)?;
        let (obs, reward, done) = self.repeat_action(&rotor_speeds);
        trace!(
            "step {}: reward = {}, done = {}, pose = {:?}",
            self.steps,
            reward,
            done,
            self.sim.pose()
        );

        let info = TaskInfo {
            steps: self.steps,
            time: self.sim.time(),
            distance: self.distance_to_target(),
        };
        let record = self.record(reward);
        Ok((Step::new(obs, *act, reward, done, info), record))
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        Ok(self.reset_task())
    }

    fn reset_with_index(&mut self, _ix: usize) -> Result<Self::Obs> {
        Ok(self.reset_task())
    }
}
