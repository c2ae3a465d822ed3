use super::config::ScoringConfig;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let non_negative = [
        ("sku_penalty", config.sku_penalty),
        ("failure_penalty", config.failure_penalty),
        ("burn_weight", config.burn_weight),
        ("burn_cap", config.burn_cap),
    ];
    for (name, value) in non_negative {
        if let Some(v) = value {
            if !v.is_finite() {
                errors.push(format!("scoring.{}: must be a finite number", name));
            } else if v < 0.0 {
                errors.push(format!("scoring.{}: must be non-negative", name));
            }
        }
    }

    if let Some(ref table) = config.strength_bonus {
        let tiers = [
            ("weak", table.weak),
            ("average", table.average),
            ("strong", table.strong),
            ("celebrity", table.celebrity),
        ];
        for (tier, bonus) in tiers {
            if !bonus.is_finite() {
                errors.push(format!(
                    "scoring.strength_bonus.{}: must be a finite number",
                    tier
                ));
            }
        }
    }

    let thresholds = [
        ("succeed_threshold", config.succeed_threshold),
        ("at_risk_threshold", config.at_risk_threshold),
    ];
    let mut thresholds_finite = true;
    for (name, value) in thresholds {
        if let Some(v) = value {
            if !v.is_finite() {
                errors.push(format!("scoring.{}: must be a finite number", name));
                thresholds_finite = false;
            }
        }
    }

    // Compare effective values so a single override is checked against the other default
    if thresholds_finite {
        let effective = config.thresholds();
        if effective.at_risk > effective.succeed {
            errors.push(format!(
                "scoring.at_risk_threshold: {} must not exceed succeed_threshold {}",
                effective.at_risk, effective.succeed
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
