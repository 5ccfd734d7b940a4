//! Errors of the task environment.
use thiserror::Error;

/// Errors of the task environment.
#[derive(Error, Debug, PartialEq)]
pub enum TaskError {
    /// The number of simulator ticks per decision step must be positive.
    #[error("action_repeat must be at least 1, got {0}")]
    InvalidActionRepeat(usize),

    /// The episode time limit must be finite and positive.
    #[error("runtime must be finite and positive, got {0}")]
    InvalidRuntime(f64),

    /// The action bounds are not an ordered pair of finite values.
    #[error("invalid action bounds [{low}, {high}]")]
    InvalidActionBounds {
        /// Lower bound.
        low: f64,
        /// Upper bound.
        high: f64,
    },

    /// A rotor speed lies outside the action bounds.
    #[error("rotor {rotor} speed {value} is outside [{low}, {high}]")]
    InvalidAction {
        /// Index of the rotor.
        rotor: usize,
        /// Requested speed.
        value: f64,
        /// Lower bound.
        low: f64,
        /// Upper bound.
        high: f64,
    },
}
