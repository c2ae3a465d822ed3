use serde::Serialize;

use super::params::FinancialParameters;

/// Multiplier applied to forecasted customers when optimism bias is enabled.
pub const OPTIMISM_BIAS: f64 = 1.2;

/// Weeks per month used to derive weekly sales.
const WEEKS_PER_MONTH: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Breakeven {
    /// Revenue covers total burn (a zero surplus counts)
    Surplus,
    Shortfall,
}

impl Breakeven {
    pub fn message(&self) -> &'static str {
        match self {
            Breakeven::Surplus => "Revenue covers monthly burn",
            Breakeven::Shortfall => "Revenue falls short of monthly burn",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    pub forecasted_customers: f64,
    pub forecasted_revenue: f64,
    pub revenue_per_distribution_point: f64,
    pub weekly_sales_per_point: f64,
    pub total_monthly_burn: f64,
    pub breakeven_surplus: f64,
    pub slotting_fee: f64,
}

impl ForecastResult {
    pub fn breakeven(&self) -> Breakeven {
        if self.breakeven_surplus >= 0.0 {
            Breakeven::Surplus
        } else {
            Breakeven::Shortfall
        }
    }
}

/// Forecast customers, revenue and burn from the financial inputs.
///
/// Zero distribution points yield zero per-point figures, and a zero
/// acquisition cost yields zero potential customers, instead of dividing by zero.
pub fn compute_forecast(params: &FinancialParameters) -> ForecastResult {
    let potential_customers = if params.customer_acquisition_cost > 0.0 {
        (params.total_addressable_market_m * 1000.0 / params.customer_acquisition_cost)
            * (params.conversion_rate_pct / 100.0)
    } else {
        0.0
    };

    let churn_adjustment = potential_customers * (params.monthly_churn_rate_pct / 100.0);
    let mut forecasted_customers = potential_customers - churn_adjustment;
    if params.include_optimism_bias {
        forecasted_customers *= OPTIMISM_BIAS;
    }

    let forecasted_revenue = forecasted_customers * params.avg_price;

    let (revenue_per_distribution_point, weekly_sales_per_point) = if params.distribution_points > 0
    {
        let points = f64::from(params.distribution_points);
        (
            forecasted_revenue / points,
            (forecasted_revenue / WEEKS_PER_MONTH) / points,
        )
    } else {
        (0.0, 0.0)
    };

    let total_monthly_burn =
        params.fixed_monthly_burn + forecasted_customers * params.variable_burn_per_customer;

    ForecastResult {
        forecasted_customers,
        forecasted_revenue,
        revenue_per_distribution_point,
        weekly_sales_per_point,
        total_monthly_burn,
        breakeven_surplus: forecasted_revenue - total_monthly_burn,
        slotting_fee: params.slotting_fee,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_params() -> FinancialParameters {
        FinancialParameters {
            total_addressable_market_m: 100.0,
            customer_acquisition_cost: 50.0,
            conversion_rate_pct: 10.0,
            monthly_churn_rate_pct: 10.0,
            include_optimism_bias: false,
            fixed_monthly_burn: 10_000.0,
            variable_burn_per_customer: 2.0,
            distribution_points: 10,
            avg_price: 20.0,
            slotting_fee: 500.0,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_forecast_pipeline() {
        // potential = 100*1000/50 * 0.1 = 200; churn 20 -> 180 customers
        let result = compute_forecast(&sample_params());
        assert!(approx(result.forecasted_customers, 180.0));
        assert!(approx(result.forecasted_revenue, 3600.0));
        assert!(approx(result.revenue_per_distribution_point, 360.0));
        assert!(approx(result.weekly_sales_per_point, 90.0));
        assert!(approx(result.total_monthly_burn, 10_360.0));
        assert!(approx(result.breakeven_surplus, -6760.0));
        assert_eq!(result.breakeven(), Breakeven::Shortfall);
        assert_eq!(result.slotting_fee, 500.0);
    }

    #[test]
    fn test_optimism_bias_scales_customers() {
        let mut params = sample_params();
        let plain = compute_forecast(&params);
        params.include_optimism_bias = true;
        let biased = compute_forecast(&params);
        assert!(approx(biased.forecasted_customers, plain.forecasted_customers * 1.2));
        assert!(approx(biased.forecasted_customers, 216.0));
        assert!(approx(biased.forecasted_revenue, 4320.0));
    }

    #[test]
    fn test_zero_distribution_points_guarded() {
        let mut params = sample_params();
        params.distribution_points = 0;
        let result = compute_forecast(&params);
        assert_eq!(result.revenue_per_distribution_point, 0.0);
        assert_eq!(result.weekly_sales_per_point, 0.0);
        // Other figures are unaffected
        assert!(approx(result.forecasted_revenue, 3600.0));
    }

    #[test]
    fn test_zero_cac_guarded() {
        let mut params = sample_params();
        params.customer_acquisition_cost = 0.0;
        let result = compute_forecast(&params);
        assert_eq!(result.forecasted_customers, 0.0);
        assert!(result.forecasted_revenue.is_finite());
        assert!(approx(result.breakeven_surplus, -10_000.0));
    }

    #[test]
    fn test_surplus_when_revenue_covers_burn() {
        let mut params = sample_params();
        params.avg_price = 100.0;
        params.fixed_monthly_burn = 1_000.0;
        let result = compute_forecast(&params);
        // revenue 18000, burn 1000 + 360
        assert!(approx(result.breakeven_surplus, 16_640.0));
        assert_eq!(result.breakeven(), Breakeven::Surplus);
    }

    #[test]
    fn test_exact_breakeven_counts_as_surplus() {
        let params = FinancialParameters {
            total_addressable_market_m: 0.0,
            fixed_monthly_burn: 0.0,
            ..sample_params()
        };
        let result = compute_forecast(&params);
        assert_eq!(result.breakeven_surplus, 0.0);
        assert_eq!(result.breakeven(), Breakeven::Surplus);
    }

    #[test]
    fn test_full_churn_leaves_no_customers() {
        let mut params = sample_params();
        params.monthly_churn_rate_pct = 100.0;
        let result = compute_forecast(&params);
        assert!(approx(result.forecasted_customers, 0.0));
    }
}
