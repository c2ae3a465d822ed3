pub mod engine;
pub mod params;

pub use engine::{compute_forecast, Breakeven, ForecastResult, OPTIMISM_BIAS};
pub use params::FinancialParameters;
