//! Dashboard modules and the dispatch table that routes a scenario to one of them.

pub mod scenario;

pub use scenario::{load_scenario, validate_scenario, Scenario};

use anyhow::{anyhow, bail, Result};
use serde::Serialize;
use std::fmt;

use crate::compare::{run_comparison, Comparison};
use crate::forecast::{compute_forecast, ForecastResult};
use crate::scoring::{compute_survival_score, ScoreResult, ScoringConfig};

/// Output of a single module run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "module", rename_all = "snake_case")]
pub enum Report {
    Survival(ScoreResult),
    Forecast(ForecastResult),
    Comparison(Comparison),
}

pub type Handler = fn(&Scenario, &ScoringConfig) -> Result<Report>;

/// One entry in the dispatch table.
#[derive(Clone, Copy)]
pub struct Module {
    /// Short name used on the command line and in scenario files
    pub key: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub handler: Handler,
}

impl fmt::Debug for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Module")
            .field("key", &self.key)
            .field("title", &self.title)
            .finish()
    }
}

pub static MODULES: [Module; 3] = [
    Module {
        key: "survival",
        title: "CPG Investment Analyzer",
        summary: "Survival score and outcome for a single brand",
        handler: run_survival,
    },
    Module {
        key: "forecast",
        title: "Customer Forecast",
        summary: "Customers, revenue, burn and breakeven from unit economics",
        handler: run_forecast,
    },
    Module {
        key: "compare",
        title: "Multi-Brand Comparison",
        summary: "Survival scores for several brands with an outcome distribution",
        handler: run_compare,
    },
];

/// Look up a module by key or title, ignoring case.
pub fn find_module(name: &str) -> Option<&'static Module> {
    let name = name.trim();
    MODULES
        .iter()
        .find(|m| m.key.eq_ignore_ascii_case(name) || m.title.eq_ignore_ascii_case(name))
}

/// Pick the module to run: an explicit name wins, then the scenario's own
/// `module` field, then the only module whose inputs are present.
pub fn resolve_module(explicit: Option<&str>, scenario: &Scenario) -> Result<&'static Module> {
    if let Some(name) = explicit.or(scenario.module.as_deref()) {
        return find_module(name).ok_or_else(|| {
            anyhow!(
                "Unknown module '{}'. Available modules: {}",
                name,
                module_keys()
            )
        });
    }

    match scenario.available_modules().as_slice() {
        [key] => find_module(key).ok_or_else(|| anyhow!("Unknown module '{}'", key)),
        [] => bail!("Scenario has no inputs. Add a brand, financials or brands section."),
        keys => bail!(
            "Scenario has inputs for several modules ({}). Pick one with --module.",
            keys.join(", ")
        ),
    }
}

/// Run a module against a scenario.
pub fn dispatch(module: &Module, scenario: &Scenario, config: &ScoringConfig) -> Result<Report> {
    tracing::debug!(module = module.key, "dispatching scenario");
    (module.handler)(scenario, config)
}

fn module_keys() -> String {
    MODULES.iter().map(|m| m.key).collect::<Vec<_>>().join(", ")
}

fn run_survival(scenario: &Scenario, config: &ScoringConfig) -> Result<Report> {
    let brand = scenario
        .brand
        .as_ref()
        .ok_or_else(|| anyhow!("The survival module needs a `brand` section"))?;
    Ok(Report::Survival(compute_survival_score(
        brand,
        scenario.burn.as_ref(),
        config,
    )))
}

fn run_forecast(scenario: &Scenario, _config: &ScoringConfig) -> Result<Report> {
    let financials = scenario
        .financials
        .as_ref()
        .ok_or_else(|| anyhow!("The forecast module needs a `financials` section"))?;
    Ok(Report::Forecast(compute_forecast(financials)))
}

fn run_compare(scenario: &Scenario, config: &ScoringConfig) -> Result<Report> {
    let brands = scenario
        .brands
        .as_deref()
        .ok_or_else(|| anyhow!("The compare module needs a `brands` list"))?;
    Ok(Report::Comparison(run_comparison(brands, config)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::NamedBrand;
    use crate::forecast::FinancialParameters;
    use crate::scoring::{BrandParameters, Outcome};

    #[test]
    fn test_find_module_by_key_and_title() {
        assert_eq!(find_module("survival").map(|m| m.key), Some("survival"));
        assert_eq!(find_module("FORECAST").map(|m| m.key), Some("forecast"));
        assert_eq!(
            find_module("cpg investment analyzer").map(|m| m.key),
            Some("survival")
        );
        assert_eq!(
            find_module("Multi-Brand Comparison").map(|m| m.key),
            Some("compare")
        );
        assert!(find_module("irr").is_none());
    }

    #[test]
    fn test_module_keys_unique() {
        let mut keys: Vec<&str> = MODULES.iter().map(|m| m.key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), MODULES.len());
    }

    #[test]
    fn test_dispatch_survival() {
        let scenario = Scenario {
            brand: Some(BrandParameters::default()),
            ..Scenario::default()
        };
        let module = resolve_module(None, &scenario).unwrap();
        let report = dispatch(module, &scenario, &ScoringConfig::default()).unwrap();
        match report {
            Report::Survival(result) => {
                // 45 + 0 - 5 = 40
                assert_eq!(result.score, 40.0);
                assert_eq!(result.outcome, Outcome::AtRisk);
            }
            other => panic!("unexpected report: {:?}", other),
        }
    }

    #[test]
    fn test_dispatch_forecast() {
        let scenario = Scenario {
            financials: Some(FinancialParameters::default()),
            ..Scenario::default()
        };
        let module = find_module("forecast").unwrap();
        let report = dispatch(module, &scenario, &ScoringConfig::default()).unwrap();
        assert!(matches!(report, Report::Forecast(_)));
    }

    #[test]
    fn test_dispatch_compare() {
        let scenario = Scenario {
            brands: Some(vec![
                NamedBrand {
                    label: None,
                    params: BrandParameters::default(),
                },
                NamedBrand {
                    label: Some("Zing".to_string()),
                    params: BrandParameters::default(),
                },
            ]),
            ..Scenario::default()
        };
        let module = find_module("compare").unwrap();
        match dispatch(module, &scenario, &ScoringConfig::default()).unwrap() {
            Report::Comparison(comparison) => {
                assert_eq!(comparison.results.len(), 2);
                assert_eq!(comparison.results[1].brand_label, "Zing");
            }
            other => panic!("unexpected report: {:?}", other),
        }
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let scenario = Scenario::default();
        let module = find_module("forecast").unwrap();
        let err = dispatch(module, &scenario, &ScoringConfig::default()).unwrap_err();
        assert!(err.to_string().contains("financials"));
    }

    #[test]
    fn test_explicit_module_overrides_scenario() {
        let scenario = Scenario {
            module: Some("compare".to_string()),
            brand: Some(BrandParameters::default()),
            ..Scenario::default()
        };
        assert_eq!(resolve_module(Some("survival"), &scenario).unwrap().key, "survival");
        assert_eq!(resolve_module(None, &scenario).unwrap().key, "compare");
    }

    #[test]
    fn test_unknown_module_lists_available() {
        let err = resolve_module(Some("irr"), &Scenario::default()).unwrap_err();
        assert!(err.to_string().contains("survival, forecast, compare"));
    }

    #[test]
    fn test_ambiguous_scenario() {
        let scenario = Scenario {
            brand: Some(BrandParameters::default()),
            financials: Some(FinancialParameters::default()),
            ..Scenario::default()
        };
        let err = resolve_module(None, &scenario).unwrap_err();
        assert!(err.to_string().contains("--module"));
    }

    #[test]
    fn test_empty_scenario() {
        let err = resolve_module(None, &Scenario::default()).unwrap_err();
        assert!(err.to_string().contains("no inputs"));
    }

    #[test]
    fn test_report_json_is_tagged() {
        let scenario = Scenario {
            brand: Some(BrandParameters::default()),
            ..Scenario::default()
        };
        let report = dispatch(&MODULES[0], &scenario, &ScoringConfig::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["module"], "survival");
        assert_eq!(json["outcome"], "at_risk");
        assert_eq!(json["score"], 40.0);
    }
}
