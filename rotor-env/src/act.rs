//! Action of [`TaskEnv`](crate::TaskEnv).
use crate::TaskError;
use log::debug;
use rotor_core::Act;
use serde::{Deserialize, Serialize};

/// Number of rotors, i.e. the dimension of an action.
pub const ACTION_SIZE: usize = 4;

/// Rotor speeds, one per rotor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotorAct {
    /// Speed of each rotor in revolutions per second.
    pub rotor_speeds: [f64; ACTION_SIZE],
}

impl RotorAct {
    /// Constructs an action.
    pub fn new(rotor_speeds: [f64; ACTION_SIZE]) -> Self {
        Self { rotor_speeds }
    }

    /// The same speed on every rotor.
    pub fn uniform(speed: f64) -> Self {
        Self::new([speed; ACTION_SIZE])
    }
}

impl Act for RotorAct {
    fn len(&self) -> usize {
        ACTION_SIZE
    }
}

impl From<[f64; ACTION_SIZE]> for RotorAct {
    fn from(rotor_speeds: [f64; ACTION_SIZE]) -> Self {
        Self { rotor_speeds }
    }
}

/// How actions outside `[action_low, action_high]` are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionPolicy {
    /// Forward actions to the simulator unmodified.
    #[default]
    PassThrough,

    /// Clamp each rotor speed into the bounds.
    Clamp,

    /// Refuse the step with [`TaskError::InvalidAction`].
    Reject,
}

impl ActionPolicy {
    /// Returns the rotor speeds to forward to the simulator.
    ///
    /// `low` and `high` are expected to be finite with `low <= high`, as
    /// enforced by [`TaskConfig::check`](crate::TaskConfig::check). A NaN rotor
    /// speed is rejected under both `Clamp` and `Reject`.
    pub fn apply(
        &self,
        act: &RotorAct,
        low: f64,
        high: f64,
    ) -> Result<[f64; ACTION_SIZE], TaskError> {
        match self {
            Self::PassThrough => Ok(act.rotor_speeds),
            Self::Clamp => {
                if let Some(rotor) = act.rotor_speeds.iter().position(|v| v.is_nan()) {
                    return Err(TaskError::InvalidAction {
                        rotor,
                        value: act.rotor_speeds[rotor],
                        low,
                        high,
                    });
                }
                // f64::clamp panics on unordered bounds
                let clamped = act.rotor_speeds.map(|v| v.max(low).min(high));
                if clamped != act.rotor_speeds {
                    debug!("Clamped rotor speeds {:?} to {:?}", act.rotor_speeds, clamped);
                }
                Ok(clamped)
            }
            Self::Reject => {
                // NaN fails the range check as well
                match act
                    .rotor_speeds
                    .iter()
                    .position(|v| !(low..=high).contains(v))
                {
                    Some(rotor) => Err(TaskError::InvalidAction {
                        rotor,
                        value: act.rotor_speeds[rotor],
                        low,
                        high,
                    }),
                    None => Ok(act.rotor_speeds),
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pass_through_keeps_out_of_range() {
        let act = RotorAct::new([0.0, 450.0, 900.0, -1.0]);
        assert_eq!(
            ActionPolicy::PassThrough.apply(&act, 425.0, 475.0),
            Ok(act.rotor_speeds)
        );
    }

    #[test]
    fn test_clamp() {
        let act = RotorAct::new([0.0, 450.0, 900.0, 475.0]);
        assert_eq!(
            ActionPolicy::Clamp.apply(&act, 425.0, 475.0),
            Ok([425.0, 450.0, 475.0, 475.0])
        );
    }

    #[test]
    fn test_clamp_rejects_nan() {
        let act = RotorAct::new([450.0, f64::NAN, 450.0, 450.0]);
        let err = ActionPolicy::Clamp.apply(&act, 425.0, 475.0).unwrap_err();
        assert!(matches!(
            err,
            TaskError::InvalidAction { rotor: 1, value, .. } if value.is_nan()
        ));
    }

    #[test]
    fn test_clamp_does_not_panic_on_unordered_bounds() {
        let act = RotorAct::uniform(450.0);
        assert!(ActionPolicy::Clamp.apply(&act, 475.0, 425.0).is_ok());
        assert!(ActionPolicy::Clamp.apply(&act, f64::NAN, 475.0).is_ok());
    }

    #[test]
    fn test_reject_reports_first_offending_rotor() {
        let act = RotorAct::new([450.0, 425.0, 480.0, 0.0]);
        assert_eq!(
            ActionPolicy::Reject.apply(&act, 425.0, 475.0),
            Err(TaskError::InvalidAction {
                rotor: 2,
                value: 480.0,
                low: 425.0,
                high: 475.0
            })
        );
        assert!(ActionPolicy::Reject
            .apply(&RotorAct::uniform(f64::NAN), 425.0, 475.0)
            .is_err());
        assert!(ActionPolicy::Reject
            .apply(&RotorAct::uniform(475.0), 425.0, 475.0)
            .is_ok());
    }

    #[test]
    fn test_serde_names() {
        let policy: ActionPolicy = serde_yaml::from_str("reject").unwrap();
        assert_eq!(policy, ActionPolicy::Reject);
        let yaml = serde_yaml::to_string(&ActionPolicy::PassThrough).unwrap();
        assert_eq!(yaml.trim_start_matches("---").trim(), "pass_through");
    }
}
