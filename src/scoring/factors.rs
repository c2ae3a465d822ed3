use super::brand::{BrandStrength, BurnInputs};

/// A single adjustment applied on top of the gross margin base.
#[derive(Debug, Clone, PartialEq)]
pub enum Factor {
    Strength { tier: BrandStrength, bonus: f64 },
    Skus { count: u32, per_sku: f64 },
    OperationalFailure(f64),
    BurnRisk { risk: f64, weight: f64, cap: f64 },
}

impl Factor {
    /// Signed change this factor makes to the score
    pub fn delta(&self) -> f64 {
        match self {
            Factor::Strength { bonus, .. } => *bonus,
            Factor::Skus { count, per_sku } => -(f64::from(*count) * per_sku),
            Factor::OperationalFailure(penalty) => -penalty,
            Factor::BurnRisk { risk, weight, cap } => -(weight * risk).min(*cap),
        }
    }

    pub fn apply(&self, score: f64) -> f64 {
        score + self.delta()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Factor::Strength { .. } => "Brand strength",
            Factor::Skus { .. } => "SKU count",
            Factor::OperationalFailure(_) => "Operational failure",
            Factor::BurnRisk { .. } => "Burn risk",
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Factor::Strength { tier, bonus } => format!("{} -> {:+}", tier, bonus),
            Factor::Skus { count, per_sku } => format!("{} SKUs x -{}", count, per_sku),
            Factor::OperationalFailure(penalty) => format!("simulated -> -{}", penalty),
            Factor::BurnRisk { risk, weight, cap } => {
                format!("risk {:.2} x {} (cap {})", risk, weight, cap)
            }
        }
    }
}

/// Normalized burn risk: burn in millions scaled by how many runways fit in a year.
///
/// Runway is clamped to at least one month, so a zero or negative runway
/// never divides by zero.
pub fn burn_risk(burn: &BurnInputs) -> f64 {
    (burn.cash_burn_k / 1000.0) * (12.0 / burn.runway_months.max(1.0))
}

/// Round to one decimal place, halves toward positive infinity.
///
/// The score is first snapped to a millionth of a tenth, so float noise
/// (0.15 stored as 0.1499..., 20.15 as 20.150000000000002) never moves a
/// value across the halfway point. Shifting a score by a whole number of
/// tenths shifts the rounded score by exactly that amount, for either sign.
pub fn round_to_tenth(score: f64) -> f64 {
    let tenths = (score * 10.0 * 1e6).round() / 1e6;
    (tenths + 0.5).floor() / 10.0
}
