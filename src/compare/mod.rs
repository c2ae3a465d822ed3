//! Multi-brand comparison: score several brands side by side and tally outcomes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::scoring::{
    compute_survival_score, BrandParameters, BrandStrength, Outcome, SalesChannel, ScoreResult,
    ScoringConfig,
};

/// Most brands the comparison dashboard accepts at once.
pub const MAX_BRANDS: usize = 5;

/// A brand to compare, with an optional display label.
///
/// In YAML the label sits alongside the brand fields:
/// `{ label: Acme, gross_margin_pct: 60, sku_count: 4 }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BrandRecord", into = "BrandRecord")]
pub struct NamedBrand {
    pub label: Option<String>,
    pub params: BrandParameters,
}

/// Flat on-disk form of a `NamedBrand`
#[derive(Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct BrandRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    gross_margin_pct: f64,
    #[serde(default)]
    sales_channel: SalesChannel,
    #[serde(default)]
    brand_strength: BrandStrength,
    sku_count: u32,
    #[serde(default)]
    simulate_operational_failure: bool,
}

impl From<BrandRecord> for NamedBrand {
    fn from(record: BrandRecord) -> Self {
        Self {
            label: record.label,
            params: BrandParameters {
                gross_margin_pct: record.gross_margin_pct,
                sales_channel: record.sales_channel,
                brand_strength: record.brand_strength,
                sku_count: record.sku_count,
                simulate_operational_failure: record.simulate_operational_failure,
            },
        }
    }
}

impl From<NamedBrand> for BrandRecord {
    fn from(named: NamedBrand) -> Self {
        Self {
            label: named.label,
            gross_margin_pct: named.params.gross_margin_pct,
            sales_channel: named.params.sales_channel,
            brand_strength: named.params.brand_strength,
            sku_count: named.params.sku_count,
            simulate_operational_failure: named.params.simulate_operational_failure,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandScore {
    pub brand_label: String,
    pub result: ScoreResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub results: Vec<BrandScore>,
    pub outcome_counts: BTreeMap<Outcome, usize>,
}

/// Score each brand independently, keeping input order.
///
/// Unlabelled brands are named by position: "Brand 1", "Brand 2", ...
pub fn compare_brands(brands: &[NamedBrand], config: &ScoringConfig) -> Vec<BrandScore> {
    brands
        .iter()
        .enumerate()
        .map(|(i, brand)| BrandScore {
            brand_label: brand
                .label
                .clone()
                .unwrap_or_else(|| format!("Brand {}", i + 1)),
            result: compute_survival_score(&brand.params, None, config),
        })
        .collect()
}

/// Count how many times each outcome occurs. Absent outcomes have no entry.
pub fn group_and_count<I>(outcomes: I) -> BTreeMap<Outcome, usize>
where
    I: IntoIterator<Item = Outcome>,
{
    let mut counts = BTreeMap::new();
    for outcome in outcomes {
        *counts.entry(outcome).or_insert(0) += 1;
    }
    counts
}

/// Score all brands and tally their outcomes.
pub fn run_comparison(brands: &[NamedBrand], config: &ScoringConfig) -> Comparison {
    let results = compare_brands(brands, config);
    let outcome_counts = group_and_count(results.iter().map(|b| b.result.outcome));
    Comparison {
        results,
        outcome_counts,
    }
}
