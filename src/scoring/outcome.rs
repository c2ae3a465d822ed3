use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_SUCCEED_THRESHOLD: f64 = 60.0;
pub const DEFAULT_AT_RISK_THRESHOLD: f64 = 40.0;

/// Survival outcome bucket.
///
/// Variants are declared from least to most successful so the derived `Ord`
/// ranks outcomes by how well the brand is expected to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Fail,
    AtRisk,
    Succeed,
}

/// Score cutoffs used to classify an outcome. Each cutoff is inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub succeed: f64,
    pub at_risk: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            succeed: DEFAULT_SUCCEED_THRESHOLD,
            at_risk: DEFAULT_AT_RISK_THRESHOLD,
        }
    }
}

impl Outcome {
    /// Bucket a score: `>= succeed` succeeds, `>= at_risk` is at risk, anything lower fails.
    pub fn classify(score: f64, thresholds: &Thresholds) -> Self {
        if score >= thresholds.succeed {
            Outcome::Succeed
        } else if score >= thresholds.at_risk {
            Outcome::AtRisk
        } else {
            Outcome::Fail
        }
    }

    /// Human-facing verdict shown in tables
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Succeed => "Likely to Succeed",
            Outcome::AtRisk => "At Risk - Monitor Closely",
            Outcome::Fail => "Likely to Fail",
        }
    }

    /// Stable machine-readable name (TSV, logs)
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Succeed => "succeed",
            Outcome::AtRisk => "at_risk",
            Outcome::Fail => "fail",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_belong_to_higher_bucket() {
        let t = Thresholds::default();
        assert_eq!(Outcome::classify(60.0, &t), Outcome::Succeed);
        assert_eq!(Outcome::classify(59.9, &t), Outcome::AtRisk);
        assert_eq!(Outcome::classify(40.0, &t), Outcome::AtRisk);
        assert_eq!(Outcome::classify(39.9, &t), Outcome::Fail);
    }

    #[test]
    fn test_extreme_scores() {
        let t = Thresholds::default();
        assert_eq!(Outcome::classify(110.0, &t), Outcome::Succeed);
        assert_eq!(Outcome::classify(-50.0, &t), Outcome::Fail);
    }

    #[test]
    fn test_classification_is_monotonic() {
        let t = Thresholds::default();
        // Walk scores in 0.1 steps; the outcome must never get worse as the score rises
        let mut previous = Outcome::classify(-20.0, &t);
        for step in -199..=1200 {
            let score = step as f64 / 10.0;
            let current = Outcome::classify(score, &t);
            assert!(current >= previous, "outcome dropped at score {}", score);
            previous = current;
        }
    }

    #[test]
    fn test_custom_thresholds() {
        let t = Thresholds {
            succeed: 80.0,
            at_risk: 50.0,
        };
        assert_eq!(Outcome::classify(79.9, &t), Outcome::AtRisk);
        assert_eq!(Outcome::classify(80.0, &t), Outcome::Succeed);
        assert_eq!(Outcome::classify(49.9, &t), Outcome::Fail);
    }

    #[test]
    fn test_ordering() {
        assert!(Outcome::Fail < Outcome::AtRisk);
        assert!(Outcome::AtRisk < Outcome::Succeed);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Outcome::AtRisk).unwrap(), "\"at_risk\"");
        assert_eq!(Outcome::AtRisk.as_str(), "at_risk");
    }
}
