//! Evaluate [`Policy`].
use crate::{record::Record, Env, Policy};
use anyhow::Result;
mod default_evaluator;
pub use default_evaluator::{DefaultEvaluator, DEFAULT_MAX_STEPS};

/// Evaluate [`Policy`].
pub trait Evaluator<E: Env> {
    /// Evaluate [`Policy`].
    ///
    /// The caller of this method needs to handle the internal state of `policy`.
    fn evaluate<P>(&mut self, policy: &mut P) -> Result<Record>
    where
        P: Policy<E>;
}

#[cfg(test)]
pub(crate) mod test_env {
    //! A countdown environment used in tests of this crate.
    use crate::{record::Record, Act, Env, Obs, Step};
    use anyhow::Result;

    #[derive(Clone, Debug, PartialEq)]
    pub struct CountObs(pub usize);

    impl Obs for CountObs {
        fn len(&self) -> usize {
            1
        }
    }

    #[derive(Clone, Debug)]
    pub struct CountAct(pub f64);

    impl Act for CountAct {
        fn len(&self) -> usize {
            1
        }
    }

    /// Terminates after `horizon` steps, rewarding each step with the action value.
    pub struct CountdownEnv {
        pub horizon: usize,
        pub t: usize,
    }

    impl Env for CountdownEnv {
        type Config = usize;
        type Obs = CountObs;
        type Act = CountAct;
        type Info = ();

        fn build(config: &Self::Config, _seed: i64) -> Result<Self> {
            Ok(Self {
                horizon: *config,
                t: 0,
            })
        }

        fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)> {
            self.t += 1;
            let is_done = self.t >= self.horizon;
            let step = Step::new(CountObs(self.t), a.clone(), a.0, is_done, ());
            Ok((step, Record::empty()))
        }

        fn reset(&mut self) -> Result<Self::Obs> {
            self.t = 0;
            Ok(CountObs(0))
        }

        fn reset_with_index(&mut self, _ix: usize) -> Result<Self::Obs> {
            self.reset()
        }
    }

    pub struct ConstPolicy(pub f64);

    impl crate::Policy<CountdownEnv> for ConstPolicy {
        fn sample(&mut self, _obs: &CountObs) -> CountAct {
            CountAct(self.0)
        }
    }
}
