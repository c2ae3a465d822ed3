use serde::Serialize;

use super::brand::{BrandParameters, BurnInputs};
use super::config::{
    ScoringConfig, DEFAULT_BURN_CAP, DEFAULT_BURN_WEIGHT, DEFAULT_FAILURE_PENALTY,
    DEFAULT_SKU_PENALTY,
};
use super::factors::{burn_risk, round_to_tenth, Factor};
use super::outcome::Outcome;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorContribution {
    pub label: String,       // e.g. "Brand strength", "SKU count"
    pub description: String, // e.g. "Strong -> +10", "10 SKUs x -0.5"
    pub before: f64,         // Score before this factor
    pub after: f64,          // Score after this factor
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub base_score: f64,
    pub factors: Vec<FactorContribution>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: f64,
    pub outcome: Outcome,
    pub breakdown: ScoreBreakdown,
}

/// Compute the survival score for one brand.
///
/// The score starts at the gross margin, then adds the strength bonus and
/// subtracts the SKU, operational failure and burn penalties in that order.
/// The final score is rounded to one decimal and classified against the
/// configured thresholds.
pub fn compute_survival_score(
    params: &BrandParameters,
    burn: Option<&BurnInputs>,
    config: &ScoringConfig,
) -> ScoreResult {
    let base_score = params.gross_margin_pct;
    let mut score = base_score;
    let mut factors = Vec::new();

    for factor in survival_factors(params, burn, config) {
        let before = score;
        score = factor.apply(score);
        factors.push(FactorContribution {
            label: factor.label().to_string(),
            description: factor.describe(),
            before,
            after: score,
        });
    }

    let score = round_to_tenth(score);
    ScoreResult {
        score,
        outcome: Outcome::classify(score, &config.thresholds()),
        breakdown: ScoreBreakdown {
            base_score,
            factors,
        },
    }
}

/// Compute the survival score with the built-in scoring table.
pub fn compute_survival_score_default(
    params: &BrandParameters,
    burn: Option<&BurnInputs>,
) -> ScoreResult {
    compute_survival_score(params, burn, &ScoringConfig::default())
}

fn survival_factors(
    params: &BrandParameters,
    burn: Option<&BurnInputs>,
    config: &ScoringConfig,
) -> Vec<Factor> {
    let mut factors = vec![
        Factor::Strength {
            tier: params.brand_strength,
            bonus: config.strength_table().bonus_for(params.brand_strength),
        },
        Factor::Skus {
            count: params.sku_count,
            per_sku: config.sku_penalty.unwrap_or(DEFAULT_SKU_PENALTY),
        },
    ];

    if params.simulate_operational_failure {
        factors.push(Factor::OperationalFailure(
            config.failure_penalty.unwrap_or(DEFAULT_FAILURE_PENALTY),
        ));
    }

    if let Some(burn) = burn {
        factors.push(Factor::BurnRisk {
            risk: burn_risk(burn),
            weight: config.burn_weight.unwrap_or(DEFAULT_BURN_WEIGHT),
            cap: config.burn_cap.unwrap_or(DEFAULT_BURN_CAP),
        });
    }

    factors
}
