use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::compare::{NamedBrand, MAX_BRANDS};
use crate::forecast::FinancialParameters;
use crate::scoring::{BrandParameters, BurnInputs, MARGIN_RANGE, SKU_RANGE};

/// Inputs for one or more dashboard modules, read from a YAML file.
///
/// Example YAML:
/// ```yaml
/// module: compare
/// brands:
///   - { label: "Acme", gross_margin_pct: 60, brand_strength: Celebrity, sku_count: 4 }
///   - { gross_margin_pct: 35, sku_count: 20, simulate_operational_failure: true }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Module key or title to run; inferred from the sections present when absent
    #[serde(default)]
    pub module: Option<String>,

    #[serde(default)]
    pub brand: Option<BrandParameters>,

    #[serde(default)]
    pub burn: Option<BurnInputs>,

    #[serde(default)]
    pub financials: Option<FinancialParameters>,

    #[serde(default)]
    pub brands: Option<Vec<NamedBrand>>,
}

impl Scenario {
    /// Module keys whose input sections are present in this scenario
    pub fn available_modules(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        if self.brand.is_some() {
            keys.push("survival");
        }
        if self.financials.is_some() {
            keys.push("forecast");
        }
        if self.brands.is_some() {
            keys.push("compare");
        }
        keys
    }
}

/// Load a scenario from a YAML file
pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario file at {}", path.display()))?;

    let scenario: Scenario = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse scenario: invalid YAML in {}", path.display()))?;

    Ok(scenario)
}

/// Check every input range in a scenario.
/// Returns all validation errors at once (not just the first).
pub fn validate_scenario(scenario: &Scenario) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref brand) = scenario.brand {
        validate_brand("brand", brand, &mut errors);
    }

    if let Some(ref burn) = scenario.burn {
        check_non_negative("burn.cash_burn_k", burn.cash_burn_k, &mut errors);
        check_non_negative("burn.runway_months", burn.runway_months, &mut errors);
    }

    if let Some(ref financials) = scenario.financials {
        validate_financials(financials, &mut errors);
    }

    if let Some(ref brands) = scenario.brands {
        if brands.is_empty() || brands.len() > MAX_BRANDS {
            errors.push(format!(
                "brands: expected between 1 and {} brands, found {}",
                MAX_BRANDS,
                brands.len()
            ));
        }
        for (i, named) in brands.iter().enumerate() {
            validate_brand(&format!("brands[{}]", i), &named.params, &mut errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_brand(prefix: &str, brand: &BrandParameters, errors: &mut Vec<String>) {
    if !MARGIN_RANGE.contains(&brand.gross_margin_pct) {
        errors.push(format!(
            "{}.gross_margin_pct: {} is outside {}-{}",
            prefix,
            brand.gross_margin_pct,
            MARGIN_RANGE.start(),
            MARGIN_RANGE.end()
        ));
    }
    if !SKU_RANGE.contains(&brand.sku_count) {
        errors.push(format!(
            "{}.sku_count: {} is outside {}-{}",
            prefix,
            brand.sku_count,
            SKU_RANGE.start(),
            SKU_RANGE.end()
        ));
    }
}

fn validate_financials(params: &FinancialParameters, errors: &mut Vec<String>) {
    let amounts = [
        ("total_addressable_market_m", params.total_addressable_market_m),
        ("customer_acquisition_cost", params.customer_acquisition_cost),
        ("fixed_monthly_burn", params.fixed_monthly_burn),
        ("variable_burn_per_customer", params.variable_burn_per_customer),
        ("avg_price", params.avg_price),
        ("slotting_fee", params.slotting_fee),
    ];
    for (name, value) in amounts {
        check_non_negative(&format!("financials.{}", name), value, errors);
    }

    let percentages = [
        ("conversion_rate_pct", params.conversion_rate_pct),
        ("monthly_churn_rate_pct", params.monthly_churn_rate_pct),
    ];
    for (name, value) in percentages {
        if !(0.0..=100.0).contains(&value) {
            errors.push(format!("financials.{}: {} is outside 0-100", name, value));
        }
    }
}

fn check_non_negative(field: &str, value: f64, errors: &mut Vec<String>) {
    if !value.is_finite() {
        errors.push(format!("{}: must be a finite number", field));
    } else if value < 0.0 {
        errors.push(format!("{}: must be non-negative", field));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::BrandStrength;
    use std::env;

    #[test]
    fn test_parse_full_scenario() {
        let yaml = r#"
module: survival
brand:
  gross_margin_pct: 45
  brand_strength: Strong
  sku_count: 10
burn:
  cash_burn_k: 250
  runway_months: 6
"#;
        let scenario: Scenario = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(scenario.module.as_deref(), Some("survival"));
        assert_eq!(
            scenario.brand.as_ref().map(|b| b.brand_strength),
            Some(BrandStrength::Strong)
        );
        assert_eq!(scenario.burn.map(|b| b.runway_months), Some(6.0));
        assert!(scenario.financials.is_none());
        assert_eq!(scenario.available_modules(), vec!["survival"]);
    }

    #[test]
    fn test_parse_brand_list() {
        let yaml = r#"
brands:
  - label: Acme
    gross_margin_pct: 60
    brand_strength: Celebrity
    sku_count: 4
  - gross_margin_pct: 35
    sku_count: 20
    simulate_operational_failure: true
"#;
        let scenario: Scenario = serde_saphyr::from_str(yaml).unwrap();
        let brands = scenario.brands.as_ref().unwrap();
        assert_eq!(brands.len(), 2);
        assert_eq!(brands[0].label.as_deref(), Some("Acme"));
        assert!(brands[1].label.is_none());
        assert!(brands[1].params.simulate_operational_failure);
        assert_eq!(scenario.available_modules(), vec!["compare"]);
    }

    #[test]
    fn test_bundled_scenarios_are_valid() {
        for yaml in [
            include_str!("../../scenarios/brands.yaml"),
            include_str!("../../scenarios/launch.yaml"),
        ] {
            let scenario: Scenario = serde_saphyr::from_str(yaml).unwrap();
            assert!(validate_scenario(&scenario).is_ok());
        }
    }

    #[test]
    fn test_unknown_section_rejected() {
        let yaml = "brandz: []";
        let result: Result<Scenario, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_valid_scenario() {
        let scenario = Scenario {
            brand: Some(BrandParameters::default()),
            financials: Some(FinancialParameters::default()),
            ..Scenario::default()
        };
        assert!(validate_scenario(&scenario).is_ok());
    }

    #[test]
    fn test_margin_out_of_range() {
        let scenario = Scenario {
            brand: Some(BrandParameters {
                gross_margin_pct: 95.0,
                ..BrandParameters::default()
            }),
            ..Scenario::default()
        };
        let errors = validate_scenario(&scenario).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("brand.gross_margin_pct"));
    }

    #[test]
    fn test_too_many_brands() {
        let brands = (0..6)
            .map(|_| NamedBrand {
                label: None,
                params: BrandParameters::default(),
            })
            .collect();
        let scenario = Scenario {
            brands: Some(brands),
            ..Scenario::default()
        };
        let errors = validate_scenario(&scenario).unwrap_err();
        assert!(errors[0].contains("between 1 and 5"));
    }

    #[test]
    fn test_collects_all_errors() {
        let scenario = Scenario {
            brand: Some(BrandParameters {
                gross_margin_pct: 5.0, // Error 1
                sku_count: 0,          // Error 2
                ..BrandParameters::default()
            }),
            burn: Some(BurnInputs {
                cash_burn_k: -1.0, // Error 3
                runway_months: 6.0,
            }),
            financials: Some(FinancialParameters {
                conversion_rate_pct: 120.0, // Error 4
                ..FinancialParameters::default()
            }),
            brands: Some(vec![NamedBrand {
                label: None,
                params: BrandParameters {
                    sku_count: 51, // Error 5
                    ..BrandParameters::default()
                },
            }]),
            ..Scenario::default()
        };
        let errors = validate_scenario(&scenario).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.iter().any(|e| e.starts_with("brands[0].sku_count")));
    }

    #[test]
    fn test_load_scenario_from_file() {
        let path = env::temp_dir().join("reality-check-test-scenario.yaml");
        fs::write(
            &path,
            "brand:\n  gross_margin_pct: 50\n  sku_count: 3\n",
        )
        .unwrap();

        let scenario = load_scenario(&path).unwrap();
        assert_eq!(scenario.brand.map(|b| b.sku_count), Some(3));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_missing_scenario_fails() {
        let path = env::temp_dir().join("reality-check-no-such-scenario.yaml");
        let err = load_scenario(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to read scenario file"));
    }
}
