use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Accepted gross margin at launch, in percent
pub const MARGIN_RANGE: RangeInclusive<f64> = 10.0..=90.0;
/// Accepted number of SKUs
pub const SKU_RANGE: RangeInclusive<u32> = 1..=50;

/// Primary sales channel of a brand.
///
/// Carried through to output for context; it has no effect on the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum SalesChannel {
    #[default]
    #[serde(rename = "DTC", alias = "dtc")]
    Dtc,
    #[serde(alias = "retail")]
    Retail,
    #[serde(alias = "amazon")]
    Amazon,
    #[serde(alias = "hybrid")]
    Hybrid,
}

impl fmt::Display for SalesChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SalesChannel::Dtc => "DTC",
            SalesChannel::Retail => "Retail",
            SalesChannel::Amazon => "Amazon",
            SalesChannel::Hybrid => "Hybrid",
        };
        f.write_str(s)
    }
}

/// How well-known the brand is at launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum BrandStrength {
    #[default]
    #[serde(alias = "weak")]
    Weak,
    #[serde(alias = "average")]
    Average,
    #[serde(alias = "strong")]
    Strong,
    #[serde(alias = "celebrity")]
    Celebrity,
}

impl fmt::Display for BrandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BrandStrength::Weak => "Weak",
            BrandStrength::Average => "Average",
            BrandStrength::Strong => "Strong",
            BrandStrength::Celebrity => "Celebrity",
        };
        f.write_str(s)
    }
}

/// Inputs for a single survival score evaluation.
///
/// Ranges (gross margin 10-90, SKU count 1-50) are enforced by whoever builds
/// the value: the CLI argument parsers or scenario validation. The engine
/// trusts them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BrandParameters {
    /// Gross margin at launch, in percent
    pub gross_margin_pct: f64,

    #[serde(default)]
    pub sales_channel: SalesChannel,

    #[serde(default)]
    pub brand_strength: BrandStrength,

    pub sku_count: u32,

    #[serde(default)]
    pub simulate_operational_failure: bool,
}

impl Default for BrandParameters {
    fn default() -> Self {
        Self {
            gross_margin_pct: 45.0,
            sales_channel: SalesChannel::Dtc,
            brand_strength: BrandStrength::Weak,
            sku_count: 10,
            simulate_operational_failure: false,
        }
    }
}

/// Optional cash burn inputs that penalize the survival score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BurnInputs {
    /// Monthly cash burn in thousands
    pub cash_burn_k: f64,
    pub runway_months: f64,
}
