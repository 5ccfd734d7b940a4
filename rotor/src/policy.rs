//! Fixed policies for exercising the hover task.
use clap::ValueEnum;
use rotor_core::Policy;
use rotor_env::{RotorAct, RotorObs, Simulator, TaskEnv, ACTION_SIZE};

/// Policies selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyKind {
    /// Same speed on all rotors.
    Hover,

    /// Uniformly random speed on each rotor.
    Random,
}

/// Issues the same speed on every rotor at every step.
pub struct HoverPolicy {
    speed: f64,
}

impl HoverPolicy {
    /// Constant speed `speed`.
    pub fn new(speed: f64) -> Self {
        Self { speed }
    }

    /// Midpoint of the action bounds.
    pub fn midpoint(low: f64, high: f64) -> Self {
        Self::new(0.5 * (low + high))
    }
}

impl<S: Simulator> Policy<TaskEnv<S>> for HoverPolicy {
    fn sample(&mut self, _obs: &RotorObs) -> RotorAct {
        RotorAct::uniform(self.speed)
    }
}

/// Samples each rotor speed uniformly from `[low, high)`.
///
/// Draws from the thread-local generator of `fastrand`, seed it with
/// `fastrand::seed` for reproducible runs.
pub struct RandomPolicy {
    low: f64,
    high: f64,
}

impl RandomPolicy {
    /// Samples from `[low, high)`.
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }
}

impl<S: Simulator> Policy<TaskEnv<S>> for RandomPolicy {
    fn sample(&mut self, _obs: &RotorObs) -> RotorAct {
        let mut speeds = [0.0; ACTION_SIZE];
        for v in speeds.iter_mut() {
            *v = self.low + fastrand::f64() * (self.high - self.low);
        }
        RotorAct::new(speeds)
    }
}
