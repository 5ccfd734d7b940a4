//! Observation of [`TaskEnv`](crate::TaskEnv).
use crate::Pose;
use rotor_core::Obs;
use rotor_sim::POSE_DIM;

/// Poses after each simulator tick of a decision step, concatenated.
///
/// The length is `6 * action_repeat`.
#[derive(Debug, Clone, PartialEq)]
pub struct RotorObs {
    values: Vec<f64>,
}

impl RotorObs {
    /// Concatenates the given poses.
    pub fn from_poses(poses: &[Pose]) -> Self {
        Self {
            values: poses.iter().flatten().copied().collect(),
        }
    }

    /// Repeats a single pose `n` times.
    pub fn repeat(pose: Pose, n: usize) -> Self {
        Self::from_poses(&vec![pose; n])
    }

    /// Number of scalars.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the observation holds no poses.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Scalars of the observation.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Iterates over the poses in tick order.
    pub fn poses(&self) -> impl Iterator<Item = Pose> + '_ {
        self.values.chunks_exact(POSE_DIM).map(|c| {
            let mut pose = [0.0; POSE_DIM];
            pose.copy_from_slice(c);
            pose
        })
    }

    /// Pose after the last tick.
    pub fn last_pose(&self) -> Option<Pose> {
        self.poses().last()
    }
}

impl From<Vec<f64>> for RotorObs {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl From<RotorObs> for Vec<f64> {
    fn from(obs: RotorObs) -> Self {
        obs.values
    }
}

impl Obs for RotorObs {
    fn len(&self) -> usize {
        self.values.len()
    }
}
