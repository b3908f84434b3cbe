use std::collections::HashSet;

use super::config::{IndicatorConfig, ScoringConfig};
use super::indicator::Indicator;

/// Allowed drift of a weight total from exactly 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    // Pillar weights
    let pillars = [
        ("environmental", config.pillars.environmental),
        ("social", config.pillars.social),
        ("governance", config.pillars.governance),
    ];
    for (name, weight) in pillars {
        check_weight(&format!("scoring.pillars.{}", name), weight, &mut errors);
    }
    check_sum(
        "scoring.pillars",
        pillars.iter().map(|(_, w)| *w).sum(),
        &mut errors,
    );

    // Indicator weights and ceilings, per pillar
    validate_pillar("environmental", &config.environmental.entries(), &mut errors);
    validate_pillar("social", &config.social.entries(), &mut errors);
    validate_pillar("governance", &config.governance.entries(), &mut errors);

    validate_bands(config, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_pillar(
    pillar: &str,
    entries: &[(Indicator, &IndicatorConfig)],
    errors: &mut Vec<String>,
) {
    for (indicator, cfg) in entries {
        let path = format!("scoring.{}.{}", pillar, indicator.config_key());
        check_weight(&format!("{}.weight", path), cfg.weight, errors);

        match cfg.ceiling {
            Some(ceiling) if !ceiling.is_finite() || ceiling <= 0.0 => {
                errors.push(format!(
                    "{}.ceiling: must be a positive number, got {}",
                    path, ceiling
                ));
            }
            None if indicator.shape().needs_ceiling() => {
                errors.push(format!("{}.ceiling: required for a scaled indicator", path));
            }
            _ => {}
        }
    }

    let sum = entries.iter().map(|(_, cfg)| cfg.weight).sum();
    check_sum(&format!("scoring.{}", pillar), sum, errors);
}

fn validate_bands(config: &ScoringConfig, errors: &mut Vec<String>) {
    let bands = &config.bands;
    if bands.is_empty() {
        errors.push("scoring.bands: at least one band is required".to_string());
        return;
    }

    let mut seen = HashSet::new();
    for (i, threshold) in bands.iter().enumerate() {
        if !threshold.min.is_finite() || !(0.0..=100.0).contains(&threshold.min) {
            errors.push(format!(
                "scoring.bands[{}].min: must be within 0-100, got {}",
                i, threshold.min
            ));
        }
        if !seen.insert(threshold.band) {
            errors.push(format!(
                "scoring.bands[{}].band: '{}' appears more than once",
                i, threshold.band
            ));
        }
        if i > 0 && threshold.min >= bands[i - 1].min {
            errors.push(format!(
                "scoring.bands[{}].min: thresholds must be strictly descending ({} after {})",
                i,
                threshold.min,
                bands[i - 1].min
            ));
        }
    }

    if let Some(last) = bands.last() {
        if last.min != 0.0 {
            errors.push(format!(
                "scoring.bands[{}].min: last threshold must be 0 so every score gets a band",
                bands.len() - 1
            ));
        }
    }
}

fn check_weight(path: &str, weight: f64, errors: &mut Vec<String>) {
    if !weight.is_finite() || weight < 0.0 {
        errors.push(format!("{}: must be non-negative, got {}", path, weight));
    }
}

fn check_sum(path: &str, sum: f64, errors: &mut Vec<String>) {
    if !sum.is_finite() || (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        errors.push(format!("{}: weights must sum to 1.0, got {:.4}", path, sum));
    }
}
