pub mod brand;
pub mod config;
pub mod engine;
pub mod factors;
pub mod outcome;
pub mod validation;

pub use brand::{BrandParameters, BrandStrength, BurnInputs, SalesChannel, MARGIN_RANGE, SKU_RANGE};
pub use config::*;
pub use engine::{
    compute_survival_score, compute_survival_score_default, FactorContribution, ScoreBreakdown,
    ScoreResult,
};
pub use outcome::{Outcome, Thresholds};
pub use validation::validate_scoring;
