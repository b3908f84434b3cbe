use serde::Serialize;
use tracing::{debug, trace, warn};

use super::aggregate::PillarScore;
use super::config::ScoringConfig;
use super::indicator::Pillar;
use super::normalize::{normalize_environmental, normalize_governance, normalize_social};
use super::rate::{composite_score, rate, Band};
use super::validation::validate_scoring;
use crate::error::{ConfigError, DisclosureError, InvalidInputError};
use crate::inputs::{
    validate_inputs, Disclosure, EnvironmentalInputs, GovernanceInputs, SectionCompletion,
    SocialInputs,
};

/// Result of one scoring run. A fresh value per call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EsgScores {
    pub environmental: f64,
    pub social: f64,
    pub governance: f64,
    pub composite: f64,
    pub band: Band,
    /// Per-pillar, per-indicator audit trail.
    pub breakdown: Vec<PillarScore>,
}

impl EsgScores {
    pub fn pillar(&self, pillar: Pillar) -> f64 {
        match pillar {
            Pillar::Environmental => self.environmental,
            Pillar::Social => self.social,
            Pillar::Governance => self.governance,
        }
    }
}

/// Turns disclosures into scores under one fixed configuration.
///
/// Holds nothing but its validated config, so a single engine can be
/// shared freely across threads.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl Default for ScoringEngine {
    /// Engine with the built-in policy table.
    fn default() -> Self {
        Self {
            config: ScoringConfig::default(),
        }
    }
}

impl ScoringEngine {
    /// Build an engine, checking weights, ceilings and bands once up front.
    ///
    /// Scaled indicators whose override left out `ceiling` get the built-in
    /// benchmark first.
    pub fn new(mut config: ScoringConfig) -> Result<Self, ConfigError> {
        config.fill_default_ceilings();
        validate_scoring(&config).map_err(ConfigError)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Validate, normalize, aggregate and rate.
    ///
    /// Fails before any scoring work if an input is out of its domain.
    pub fn compute_scores(
        &self,
        environmental: &EnvironmentalInputs,
        social: &SocialInputs,
        governance: &GovernanceInputs,
    ) -> Result<EsgScores, InvalidInputError> {
        let inputs = validate_inputs(environmental, social, governance)?;

        let env = PillarScore::from_indicators(
            Pillar::Environmental,
            normalize_environmental(&inputs, &self.config.environmental),
        );
        let soc = PillarScore::from_indicators(
            Pillar::Social,
            normalize_social(&inputs, &self.config.social),
        );
        let gov = PillarScore::from_indicators(
            Pillar::Governance,
            normalize_governance(&inputs, &self.config.governance),
        );

        for pillar in [&env, &soc, &gov] {
            for indicator in &pillar.indicators {
                trace!(
                    pillar = pillar.pillar.key(),
                    indicator = indicator.indicator.config_key(),
                    score = indicator.score,
                    weight = indicator.weight,
                    "normalized indicator"
                );
            }
            debug!(pillar = pillar.pillar.key(), score = pillar.score, "pillar score");
        }

        let composite = composite_score(env.score, soc.score, gov.score, &self.config.pillars);
        let band = rate(composite, &self.config.bands);
        debug!(composite, %band, "composite rating");

        Ok(EsgScores {
            environmental: env.score,
            social: soc.score,
            governance: gov.score,
            composite,
            band,
            breakdown: vec![env, soc, gov],
        })
    }

    /// Score a whole disclosure and report which sections look filled in.
    ///
    /// Input validation always runs first, so an out-of-domain value is
    /// reported by name even when its section would also count as empty.
    /// With `strict`, an empty section is an error instead of a warning.
    pub fn score_disclosure(
        &self,
        disclosure: &Disclosure,
        strict: bool,
    ) -> Result<(EsgScores, SectionCompletion), DisclosureError> {
        let scores = self.compute_scores(
            &disclosure.environmental,
            &disclosure.social,
            &disclosure.governance,
        )?;

        let completion = SectionCompletion::from_inputs(
            &disclosure.environmental,
            &disclosure.social,
            &disclosure.governance,
        );
        let missing = completion.missing();
        if !missing.is_empty() {
            if strict {
                return Err(DisclosureError::Incomplete(missing));
            }
            warn!(sections = %missing.join(", "), "disclosure sections look empty");
        }
        Ok((scores, completion))
    }
}

/// Score a disclosure with the built-in policy table.
pub fn compute_scores(
    environmental: &EnvironmentalInputs,
    social: &SocialInputs,
    governance: &GovernanceInputs,
) -> Result<EsgScores, InvalidInputError> {
    ScoringEngine::default().compute_scores(environmental, social, governance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidReason;
    use crate::scoring::{BandThreshold, PillarWeights};

    fn worst_case() -> (EnvironmentalInputs, SocialInputs, GovernanceInputs) {
        (
            EnvironmentalInputs {
                climate_risk_level: "high".to_string(),
                ..Default::default()
            },
            SocialInputs {
                gender_diversity_percentage: 0.0,
                ..Default::default()
            },
            GovernanceInputs::default(),
        )
    }

    fn best_case() -> (EnvironmentalInputs, SocialInputs, GovernanceInputs) {
        (
            EnvironmentalInputs {
                renewable_energy_percentage: 100.0,
                water_stress_area: false,
                climate_risk_level: "low".to_string(),
                ..Default::default()
            },
            SocialInputs {
                total_employees: 250,
                gender_diversity_percentage: 100.0,
                training_hours_per_employee: 40.0,
                supply_chain_labour_policy: true,
                community_initiatives: "STEM outreach".to_string(),
                ..Default::default()
            },
            GovernanceInputs {
                board_size: 8,
                independent_directors_percentage: 100.0,
                board_diversity_percentage: 100.0,
                anti_corruption_policy: true,
                whistleblower_policy: true,
                compliance_violations: 0,
                tax_transparency: true,
            },
        )
    }

    #[test]
    fn test_zero_false_high_risk_boundary() {
        let (env, social, gov) = worst_case();
        let scores = compute_scores(&env, &social, &gov).unwrap();

        // Lower-is-better indicators at zero score 100, everything else 0
        // E: 0.15 + 0.15 + 0.10 + 0.10 (water) + 0.05 (no stress) + 0.10 + 0.05 = 0.70
        assert!((scores.environmental - 70.0).abs() < 1e-9);
        // S: health & safety 0.20 + data privacy 0.15
        assert!((scores.social - 35.0).abs() < 1e-9);
        // G: compliance violations 0.15
        assert!((scores.governance - 15.0).abs() < 1e-9);
        // 0.4 * 70 + 0.3 * 35 + 0.3 * 15
        assert!((scores.composite - 43.0).abs() < 1e-9);
        assert_eq!(scores.band, Band::Developing);
    }

    #[test]
    fn test_best_case_is_leading() {
        let (env, social, gov) = best_case();
        let scores = compute_scores(&env, &social, &gov).unwrap();
        assert!((scores.composite - 100.0).abs() < 1e-9);
        assert!(scores.composite <= 100.0);
        assert_eq!(scores.band, Band::Leading);
    }

    #[test]
    fn test_negative_input_returns_no_scores() {
        let (mut env, social, gov) = best_case();
        env.scope1_emissions = -1.0;
        let err = compute_scores(&env, &social, &gov).unwrap_err();
        assert_eq!(err.field, "environmental.scope1Emissions");
        assert_eq!(err.reason, InvalidReason::Negative);
    }

    #[test]
    fn test_deterministic() {
        let (env, social, gov) = best_case();
        let engine = ScoringEngine::default();
        let first = engine.compute_scores(&env, &social, &gov).unwrap();
        let second = engine.compute_scores(&env, &social, &gov).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.composite.to_bits(), second.composite.to_bits());
    }

    #[test]
    fn test_breakdown_matches_pillars() {
        let (env, social, gov) = worst_case();
        let scores = compute_scores(&env, &social, &gov).unwrap();
        assert_eq!(scores.breakdown.len(), 3);
        for pillar in &scores.breakdown {
            assert_eq!(pillar.score, scores.pillar(pillar.pillar));
            for indicator in &pillar.indicators {
                assert_eq!(indicator.indicator.pillar(), pillar.pillar);
            }
        }
        let indicator_count: usize = scores.breakdown.iter().map(|p| p.indicators.len()).sum();
        assert_eq!(indicator_count, 21);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = ScoringConfig {
            pillars: PillarWeights {
                environmental: 1.0,
                social: 1.0,
                governance: 1.0,
            },
            ..Default::default()
        };
        let err = ScoringEngine::new(config).unwrap_err();
        assert_eq!(err.0.len(), 1);
    }

    #[test]
    fn test_custom_config_changes_rating() {
        let config = ScoringConfig {
            bands: vec![
                BandThreshold { min: 40.0, band: Band::Leading },
                BandThreshold { min: 0.0, band: Band::Lagging },
            ],
            ..Default::default()
        };
        let engine = ScoringEngine::new(config).unwrap();
        let (env, social, gov) = worst_case();
        let scores = engine.compute_scores(&env, &social, &gov).unwrap();
        assert_eq!(scores.band, Band::Leading);
    }

    #[test]
    fn test_invalid_value_reported_before_empty_section() {
        // A negative count is the only social data, so the section also looks empty
        let (environmental, _, governance) = best_case();
        let social = SocialInputs {
            gender_diversity_percentage: 0.0,
            data_privacy_incidents: -2,
            ..Default::default()
        };
        let disclosure = Disclosure {
            context: Default::default(),
            environmental,
            social,
            governance,
        };
        let err = ScoringEngine::default()
            .score_disclosure(&disclosure, true)
            .unwrap_err();
        match err {
            DisclosureError::Invalid(e) => {
                assert_eq!(e.field, "social.dataPrivacyIncidents");
                assert_eq!(e.reason, InvalidReason::Negative);
            }
            other => panic!("expected an invalid input error, got {:?}", other),
        }
    }

    #[test]
    fn test_strict_rejects_empty_section() {
        let (environmental, _, governance) = best_case();
        let disclosure = Disclosure {
            context: Default::default(),
            environmental,
            social: SocialInputs::default(),
            governance,
        };
        let engine = ScoringEngine::default();
        let err = engine.score_disclosure(&disclosure, true).unwrap_err();
        assert_eq!(err, DisclosureError::Incomplete(vec!["social"]));

        let (scores, completion) = engine.score_disclosure(&disclosure, false).unwrap();
        assert!(!completion.social);
        assert!(completion.environmental);
        assert_eq!(scores.breakdown.len(), 3);
    }

    #[test]
    fn test_override_without_ceiling_keeps_default_benchmark() {
        let yaml = r#"
social:
  training_hours: { weight: 0.2 }
"#;
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.social.training_hours.ceiling, None);

        let engine = ScoringEngine::new(config).unwrap();
        assert_eq!(engine.config().social.training_hours.ceiling, Some(40.0));
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScoringEngine>();
    }
}
