//! Utilities for interaction of policies and environments.
use crate::{
    record::{RecordValue, Recorder},
    Env, Policy,
};
use anyhow::Result;
use log::{debug, trace};

/// Run episodes with a policy and recorder.
///
/// Every decision step writes the record returned by the environment,
/// extended with `reward`, `episode` and `step`, to `recorder`.
/// An episode ends when the environment reports `done` or after `max_steps`
/// decision steps. Episode `i` starts with [`Env::reset_with_index`]`(i)`.
/// Returns the return (sum of rewards) of each episode.
pub fn eval_with_recorder<E, P, R>(
    env: &mut E,
    policy: &mut P,
    n_episodes: usize,
    max_steps: usize,
    recorder: &mut R,
) -> Result<Vec<f64>>
where
    E: Env,
    P: Policy<E>,
    R: Recorder,
{
    let mut rs = Vec::with_capacity(n_episodes);

    for episode in 0..n_episodes {
        let mut prev_obs = env.reset_with_index(episode)?;
        let mut count_step = 0;
        let mut r_total = 0.0;

        while count_step < max_steps {
            let act = policy.sample(&prev_obs);
            let (step, mut record) = env.step(&act)?;
            r_total += step.reward;
            trace!("episode {}, step {}, reward {}", episode, count_step, step.reward);

            record.insert("reward", RecordValue::Scalar(step.reward as _));
            record.insert("episode", RecordValue::Scalar(episode as _));
            record.insert("step", RecordValue::Scalar(count_step as _));
            recorder.write(record);
            count_step += 1;

            if step.is_done() {
                break;
            }
            prev_obs = step.obs;
        }

        if count_step == max_steps {
            debug!("Episode {} truncated at {} steps", episode, max_steps);
        }
        rs.push(r_total);
    }

    Ok(rs)
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
    fn test_eval_with_recorder_writes_every_step() -> Result<()> {
        let mut env = CountdownEnv::build(&3, 0)?;
        let mut recorder = BufferedRecorder::new();
        let rs = eval_with_recorder(&mut env, &mut ConstPolicy(2.0), 2, 100, &mut recorder)?;

        assert_eq!(rs, vec![6.0, 6.0]);
        assert_eq!(recorder.len(), 6);

        let last = recorder.iter().last().unwrap();
        assert_eq!(last.get_scalar("episode")?, 1.0);
        assert_eq!(last.get_scalar("step")?, 2.0);
        assert_eq!(last.get_scalar("reward")?, 2.0);
        Ok(())
    }

    #[test]
    fn test_max_steps_bounds_an_endless_episode() -> Result<()> {
        let mut env = CountdownEnv::build(&usize::MAX, 0)?;
        let mut recorder = BufferedRecorder::new();
        let rs = eval_with_recorder(&mut env, &mut ConstPolicy(1.0), 3, 4, &mut recorder)?;

        assert_eq!(rs, vec![4.0, 4.0, 4.0]);
        assert_eq!(recorder.len(), 12);
        Ok(())
    }

    #[test]
    fn test_step_with_reset_stores_init_obs() -> Result<()> {
        use crate::evaluator::test_env::{CountAct, CountObs};

        let mut env = CountdownEnv::build(&2, 0)?;
        env.reset()?;
        let (step, _) = env.step_with_reset(&CountAct(1.0))?;
        assert!(!step.is_done());
        assert!(step.init_obs.is_none());

        let (step, _) = env.step_with_reset(&CountAct(1.0))?;
        assert!(step.is_done());
        assert_eq!(step.obs, CountObs(2));
        assert_eq!(step.init_obs, Some(CountObs(0)));
        assert_eq!(env.t, 0);
        Ok(())
    }
}
