use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{SetupError, SetupResult};

///
/// Everything needed to instantiate a model: its configuration object, the
/// model itself, the tokenizer and the directory the weights live in.
///
/// The first three are framework objects, so they stay generic.
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ModelSetup<C, M, T> {
    pub config: C,
    pub model: M,
    pub tokenizer: T,
    pub model_path: PathBuf,
}

/// Batch size, number of epochs and the warm-up share of training steps.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunSetup {
    pub batch_size: usize,
    pub epochs: usize,
    pub warmup_perc: f64,
}

impl RunSetup {
    pub fn validate(&self) -> SetupResult<()> {
        if self.batch_size == 0 {
            return Err(SetupError::invalid("batch_size", "must be positive"));
        }
        if self.epochs == 0 {
            return Err(SetupError::invalid("epochs", "must be positive"));
        }
        if !(0.0..=1.0).contains(&self.warmup_perc) {
            return Err(SetupError::invalid(
                "warmup_perc",
                format!("{} is outside [0, 1]", self.warmup_perc),
            ));
        }
        Ok(())
    }

    /// Number of learning-rate warm-up steps out of `total_steps`.
    pub fn warmup_steps(&self, total_steps: usize) -> usize {
        (total_steps as f64 * self.warmup_perc).floor() as usize
    }
}

///
/// AdamW-style optimizer hyperparameters
///
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OptSetup {
    pub learning_rate: f64,
    pub epsilon: f64,
    pub betas: (f64, f64),
    pub weight_decay: f64,
}

impl OptSetup {
    pub fn validate(&self) -> SetupResult<()> {
        positive("learning_rate", self.learning_rate)?;
        positive("epsilon", self.epsilon)?;

        let (beta1, beta2) = self.betas;
        for beta in [beta1, beta2] {
            if !(0.0..1.0).contains(&beta) {
                return Err(SetupError::invalid(
                    "betas",
                    format!("{} is outside [0, 1)", beta),
                ));
            }
        }

        non_negative("weight_decay", self.weight_decay)
    }
}

/// Early stopping: give up after `rounds` evaluations without an improvement above `tolerance`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StopSetup {
    pub rounds: usize,
    pub tolerance: f64,
}

impl StopSetup {
    pub fn validate(&self) -> SetupResult<()> {
        if self.rounds == 0 {
            return Err(SetupError::invalid("rounds", "must be positive"));
        }
        non_negative("tolerance", self.tolerance)
    }
}

fn positive(field: &'static str, value: f64) -> SetupResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SetupError::invalid(
            field,
            format!("{} is not a positive finite number", value),
        ))
    }
}

fn non_negative(field: &'static str, value: f64) -> SetupResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SetupError::invalid(
            field,
            format!("{} is not a non-negative finite number", value),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn run_setup() -> RunSetup {
        RunSetup {
            batch_size: 32,
            epochs: 10,
            warmup_perc: 0.1,
        }
    }

    fn adamw() -> OptSetup {
        OptSetup {
            learning_rate: 2e-5,
            epsilon: 1e-8,
            betas: (0.9, 0.999),
            weight_decay: 0.01,
        }
    }

    #[fixture]
    fn opt_setup() -> OptSetup {
        adamw()
    }

    #[rstest]
    fn test_model_setup_holds_framework_objects() {
        let setup = ModelSetup {
            config: "bert-config",
            model: 42_u8,
            tokenizer: vec!["ATG", "CTG"],
            model_path: PathBuf::from("models/uberta"),
        };
        assert_eq!(setup.tokenizer.len(), 2);
        assert_eq!(setup.model_path, PathBuf::from("models/uberta"));
    }

    #[rstest]
    fn test_valid_run_setup(run_setup: RunSetup) {
        assert_eq!(run_setup.validate(), Ok(()));
    }

    #[rstest]
    #[case(1000, 100)]
    #[case(15, 1)]
    #[case(0, 0)]
    fn test_warmup_steps(run_setup: RunSetup, #[case] total: usize, #[case] expected: usize) {
        assert_eq!(run_setup.warmup_steps(total), expected);
    }

    #[rstest]
    #[case(RunSetup { batch_size: 0, epochs: 1, warmup_perc: 0.0 }, "batch_size")]
    #[case(RunSetup { batch_size: 8, epochs: 0, warmup_perc: 0.0 }, "epochs")]
    #[case(RunSetup { batch_size: 8, epochs: 1, warmup_perc: 1.5 }, "warmup_perc")]
    #[case(RunSetup { batch_size: 8, epochs: 1, warmup_perc: f64::NAN }, "warmup_perc")]
    fn test_invalid_run_setup(#[case] setup: RunSetup, #[case] bad_field: &str) {
        let Err(SetupError::InvalidField { field, .. }) = setup.validate() else {
            panic!("expected {} to be rejected", bad_field);
        };
        assert_eq!(field, bad_field);
    }

    #[rstest]
    fn test_valid_opt_setup(opt_setup: OptSetup) {
        assert_eq!(opt_setup.validate(), Ok(()));
    }

    #[rstest]
    #[case(OptSetup { learning_rate: 0.0, ..adamw() }, "learning_rate")]
    #[case(OptSetup { epsilon: -1e-8, ..adamw() }, "epsilon")]
    #[case(OptSetup { betas: (0.9, 1.0), ..adamw() }, "betas")]
    #[case(OptSetup { betas: (-0.1, 0.999), ..adamw() }, "betas")]
    #[case(OptSetup { weight_decay: f64::INFINITY, ..adamw() }, "weight_decay")]
    fn test_invalid_opt_setup(#[case] setup: OptSetup, #[case] bad_field: &str) {
        let Err(SetupError::InvalidField { field, .. }) = setup.validate() else {
            panic!("expected {} to be rejected", bad_field);
        };
        assert_eq!(field, bad_field);
    }

    #[rstest]
    fn test_stop_setup() {
        let setup = StopSetup {
            rounds: 3,
            tolerance: 0.0,
        };
        assert_eq!(setup.validate(), Ok(()));

        let setup = StopSetup {
            rounds: 0,
            tolerance: 0.01,
        };
        assert!(setup.validate().is_err());

        let setup = StopSetup {
            rounds: 3,
            tolerance: -0.01,
        };
        assert!(setup.validate().is_err());
    }
}
