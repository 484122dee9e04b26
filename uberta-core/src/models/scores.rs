use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

///
/// Binary classification metrics from one evaluation pass
///
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scores {
    pub acc: f64,
    pub roc_auc: f64,
    pub f1: f64,
    pub prec: f64,
    pub rec: f64,
}

impl Scores {
    pub const FIELDS: [&'static str; 5] = ["acc", "roc_auc", "f1", "prec", "rec"];

    /// Metric values in the order of [`Scores::FIELDS`].
    pub fn values(&self) -> [f64; 5] {
        [self.acc, self.roc_auc, self.f1, self.prec, self.rec]
    }
}

impl Display for Scores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in Self::FIELDS.iter().zip(self.values()).enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={:.4}", name, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_field_order() {
        assert_eq!(Scores::FIELDS, ["acc", "roc_auc", "f1", "prec", "rec"]);
    }

    #[rstest]
    fn test_values_follow_field_order() {
        let scores = Scores {
            acc: 0.9,
            roc_auc: 0.95,
            f1: 0.8,
            prec: 0.75,
            rec: 0.5,
        };
        assert_eq!(scores.values(), [0.9, 0.95, 0.8, 0.75, 0.5]);
        assert_eq!(
            scores.to_string(),
            "acc=0.9000 roc_auc=0.9500 f1=0.8000 prec=0.7500 rec=0.5000"
        );
    }
}
