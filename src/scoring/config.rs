use serde::{Deserialize, Serialize};

use super::brand::BrandStrength;
use super::outcome::{Thresholds, DEFAULT_AT_RISK_THRESHOLD, DEFAULT_SUCCEED_THRESHOLD};

pub const DEFAULT_SKU_PENALTY: f64 = 0.5;
pub const DEFAULT_FAILURE_PENALTY: f64 = 20.0;
pub const DEFAULT_BURN_WEIGHT: f64 = 2.0;
pub const DEFAULT_BURN_CAP: f64 = 20.0;

/// Survival scoring configuration.
///
/// Every field is optional; a missing field falls back to the built-in value.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   strength_bonus: { weak: 0, average: 0, strong: 10, celebrity: 20 }
///   sku_penalty: 0.5
///   failure_penalty: 20
///   burn_weight: 2
///   burn_cap: 20
///   succeed_threshold: 60
///   at_risk_threshold: 40
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Points added per brand strength tier
    #[serde(default)]
    pub strength_bonus: Option<StrengthBonus>,

    /// Points removed per SKU (default: 0.5)
    #[serde(default)]
    pub sku_penalty: Option<f64>,

    /// Points removed when an operational failure is simulated (default: 20)
    #[serde(default)]
    pub failure_penalty: Option<f64>,

    /// Multiplier applied to burn risk (default: 2)
    #[serde(default)]
    pub burn_weight: Option<f64>,

    /// Largest penalty burn risk may apply (default: 20)
    #[serde(default)]
    pub burn_cap: Option<f64>,

    /// Minimum score classified as Succeed (default: 60)
    #[serde(default)]
    pub succeed_threshold: Option<f64>,

    /// Minimum score classified as AtRisk (default: 40)
    #[serde(default)]
    pub at_risk_threshold: Option<f64>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            strength_bonus: Some(StrengthBonus::default()),
            sku_penalty: Some(DEFAULT_SKU_PENALTY),
            failure_penalty: Some(DEFAULT_FAILURE_PENALTY),
            burn_weight: Some(DEFAULT_BURN_WEIGHT),
            burn_cap: Some(DEFAULT_BURN_CAP),
            succeed_threshold: Some(DEFAULT_SUCCEED_THRESHOLD),
            at_risk_threshold: Some(DEFAULT_AT_RISK_THRESHOLD),
        }
    }
}

impl ScoringConfig {
    /// Outcome cutoffs with defaults filled in
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            succeed: self.succeed_threshold.unwrap_or(DEFAULT_SUCCEED_THRESHOLD),
            at_risk: self.at_risk_threshold.unwrap_or(DEFAULT_AT_RISK_THRESHOLD),
        }
    }

    /// Strength bonus table with defaults filled in
    pub fn strength_table(&self) -> StrengthBonus {
        self.strength_bonus.clone().unwrap_or_default()
    }
}

/// Bonus points per brand strength tier.
///
/// The canonical table is Weak 0, Average 0, Strong 10, Celebrity 20.
/// Missing tiers in a partial YAML table take their canonical value.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StrengthBonus {
    pub weak: f64,
    pub average: f64,
    pub strong: f64,
    pub celebrity: f64,
}

impl Default for StrengthBonus {
    fn default() -> Self {
        Self {
            weak: 0.0,
            average: 0.0,
            strong: 10.0,
            celebrity: 20.0,
        }
    }
}

impl StrengthBonus {
    pub fn bonus_for(&self, strength: BrandStrength) -> f64 {
        match strength {
            BrandStrength::Weak => self.weak,
            BrandStrength::Average => self.average,
            BrandStrength::Strong => self.strong,
            BrandStrength::Celebrity => self.celebrity,
        }
    }
}
