#![warn(missing_docs)]
//! Environment abstractions shared by the rotor crates.
//!
//! An environment ([`Env`]) emits a [`Step`] object at every decision step,
//! together with a [`Record`](record::Record) holding metrics of that step.
//! A [`Policy`] maps observations to actions, and an
//! [`Evaluator`] runs a policy on an environment for a number of episodes.
pub mod error;
pub mod record;
pub mod util;

mod base;
pub use base::{Act, Env, Info, Obs, Policy, Step};

mod evaluator;
pub use evaluator::{DefaultEvaluator, Evaluator, DEFAULT_MAX_STEPS};
