//! Default implementation of the [`Evaluator`] trait.
//!
//! Runs a fixed number of episodes and calculates the average return.
use super::Evaluator;
use crate::{
    record::{NullRecorder, Record, Recorder},
    util, Env, Policy,
};
use anyhow::Result;
use log::debug;

/// Default limit of decision steps in an episode.
pub const DEFAULT_MAX_STEPS: usize = 10_000;

/// A default implementation of the [`Evaluator`] trait.
///
/// An episode ends when the environment reports `done` or after `max_steps`
/// decision steps, whichever comes first.
///
/// # Examples
///
/// ```ignore
/// let config = TaskConfig::default();
/// let mut evaluator = DefaultEvaluator::<TaskEnv>::new(&config, 42, 10)?.max_steps(500);
///
/// let record = evaluator.evaluate(&mut policy)?;
/// println!("Average return: {}", record.get_scalar("Episode return")?);
/// ```
pub struct DefaultEvaluator<E: Env> {
    /// The number of episodes to run during evaluation.
    n_episodes: usize,

    /// Upper limit of decision steps in an episode.
    max_steps: usize,

    /// The environment instance used for evaluation.
    env: E,
}

impl<E: Env> Evaluator<E> for DefaultEvaluator<E> {
    fn evaluate<P>(&mut self, policy: &mut P) -> Result<Record>
    where
        P: Policy<E>,
    {
        let returns = self.evaluate_with_recorder(policy, &mut NullRecorder::new())?;
        let n_episodes = returns.len().max(1) as f64;
        let mean = returns.iter().sum::<f64>() / n_episodes;
        Ok(Record::from_scalar("Episode return", mean as f32))
    }
}

impl<E: Env> DefaultEvaluator<E> {
    /// Constructs a new [`DefaultEvaluator`].
    ///
    /// * `config` - Configuration for the environment
    /// * `seed` - Random seed for environment initialization
    /// * `n_episodes` - Number of episodes to run during evaluation
    pub fn new(config: &E::Config, seed: i64, n_episodes: usize) -> Result<Self> {
        Ok(Self {
            n_episodes,
            max_steps: DEFAULT_MAX_STEPS,
            env: E::build(config, seed)?,
        })
    }

    /// Sets the upper limit of decision steps in an episode.
    pub fn max_steps(mut self, v: usize) -> Self {
        self.max_steps = v;
        self
    }

    /// Runs the episodes, writing a record of every decision step to `recorder`.
    ///
    /// Returns the return of each episode.
    pub fn evaluate_with_recorder<P, R>(
        &mut self,
        policy: &mut P,
        recorder: &mut R,
    ) -> Result<Vec<f64>>
    where
        P: Policy<E>,
        R: Recorder,
    {
        let returns = util::eval_with_recorder(
            &mut self.env,
            policy,
            self.n_episodes,
            self.max_steps,
            recorder,
        )?;
        for (ix, r) in returns.iter().enumerate() {
            debug!("Episode {}, return = {}", ix, r);
        }
        Ok(returns)
    }

    /// The environment under evaluation.
    pub fn env(&self) -> &E {
        &self.env
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        evaluator::test_env::{ConstPolicy, CountdownEnv},
        record::BufferedRecorder,
    };
    use test_log::test;

    #[test]
    fn test_average_return() -> Result<()> {
        let mut evaluator = DefaultEvaluator::<CountdownEnv>::new(&4, 0, 3)?;
        let record = evaluator.evaluate(&mut ConstPolicy(0.5))?;
        assert_eq!(record.get_scalar("Episode return")?, 2.0);
        Ok(())
    }

    #[test]
    fn test_max_steps_truncates_episode() -> Result<()> {
        let mut evaluator = DefaultEvaluator::<CountdownEnv>::new(&100, 0, 2)?.max_steps(5);
        let record = evaluator.evaluate(&mut ConstPolicy(1.0))?;
        assert_eq!(record.get_scalar("Episode return")?, 5.0);
        Ok(())
    }

    #[test]
    fn test_default_max_steps_stops_endless_episode() -> Result<()> {
        let mut evaluator = DefaultEvaluator::<CountdownEnv>::new(&usize::MAX, 0, 1)?;
        let mut recorder = BufferedRecorder::new();
        let returns = evaluator.evaluate_with_recorder(&mut ConstPolicy(1.0), &mut recorder)?;
        assert_eq!(returns, vec![DEFAULT_MAX_STEPS as f64]);
        assert_eq!(recorder.len(), DEFAULT_MAX_STEPS);
        assert_eq!(evaluator.env().t, DEFAULT_MAX_STEPS);
        Ok(())
    }
}
