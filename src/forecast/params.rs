use serde::{Deserialize, Serialize};

/// Inputs for the unit-economics forecast.
///
/// All fields are independent scalars. Money values are in a single currency;
/// the market size is in millions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FinancialParameters {
    pub total_addressable_market_m: f64,
    pub customer_acquisition_cost: f64,
    pub conversion_rate_pct: f64,
    pub monthly_churn_rate_pct: f64,
    #[serde(default)]
    pub include_optimism_bias: bool,
    pub fixed_monthly_burn: f64,
    pub variable_burn_per_customer: f64,
    pub distribution_points: u32,
    pub avg_price: f64,
    /// Reported alongside the forecast; it does not enter the formulas
    #[serde(default)]
    pub slotting_fee: f64,
}

impl Default for FinancialParameters {
    fn default() -> Self {
        Self {
            total_addressable_market_m: 100.0,
            customer_acquisition_cost: 50.0,
            conversion_rate_pct: 2.0,
            monthly_churn_rate_pct: 5.0,
            include_optimism_bias: false,
            fixed_monthly_burn: 50_000.0,
            variable_burn_per_customer: 5.0,
            distribution_points: 100,
            avg_price: 30.0,
            slotting_fee: 0.0,
        }
    }
}
