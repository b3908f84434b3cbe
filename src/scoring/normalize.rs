//! Maps raw indicators onto the common 0-100 goodness scale.
//!
//! 100 is best-in-class, 0 worst-in-class. Every indicator-specific
//! mapping lives here so the aggregator only ever sees plain scores.

use serde::Serialize;

use super::config::{EnvironmentalConfig, GovernanceConfig, IndicatorConfig, SocialConfig};
use super::indicator::{Indicator, Shape};
use crate::inputs::{ClimateRiskLevel, ValidatedInputs};

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Scores are kept to nine decimal places so that a mean which is exactly
/// on a band threshold compares as exactly on it.
const SCORE_PRECISION: f64 = 1e9;

/// One normalized indicator, ready for aggregation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorScore {
    pub indicator: Indicator,
    pub score: f64,
    pub weight: f64,
}

/// Clamp to [0, 100] and round off float noise; NaN collapses to the
/// worst score.
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        return MIN_SCORE;
    }
    let clamped = score.clamp(MIN_SCORE, MAX_SCORE);
    (clamped * SCORE_PRECISION).round() / SCORE_PRECISION
}

/// `min(100, 100 * value / ceiling)`. A percentage uses a ceiling of 100.
pub fn higher_is_better(value: f64, ceiling: f64) -> f64 {
    clamp_score(MAX_SCORE * value / ceiling)
}

/// `max(0, 100 - 100 * value / ceiling)`. Zero means no measured impact
/// and scores 100; anything at or past the ceiling scores 0.
pub fn lower_is_better(value: f64, ceiling: f64) -> f64 {
    clamp_score(MAX_SCORE - MAX_SCORE * value / ceiling)
}

pub fn bonus_flag(present: bool) -> f64 {
    if present {
        MAX_SCORE
    } else {
        MIN_SCORE
    }
}

pub fn penalty_flag(present: bool) -> f64 {
    MAX_SCORE - bonus_flag(present)
}

pub fn climate_risk_score(level: ClimateRiskLevel) -> f64 {
    match level {
        ClimateRiskLevel::Low => 100.0,
        ClimateRiskLevel::Medium => 50.0,
        ClimateRiskLevel::High => 0.0,
    }
}

/// Free text is not scored numerically; only whether anything was reported.
pub fn community_engagement_score(initiatives: &str) -> f64 {
    bonus_flag(!initiatives.trim().is_empty())
}

/// A raw value paired with the mapping that scores it.
#[derive(Debug, Clone, Copy)]
enum Measure<'a> {
    Percentage(f64),
    Higher(f64),
    Lower(f64),
    Bonus(bool),
    Penalty(bool),
    Risk(ClimateRiskLevel),
    Presence(&'a str),
}

impl Measure<'_> {
    fn shape(&self) -> Shape {
        match self {
            Measure::Percentage(_) => Shape::Percentage,
            Measure::Higher(_) => Shape::HigherIsBetter,
            Measure::Lower(_) => Shape::LowerIsBetter,
            Measure::Bonus(_) => Shape::BonusFlag,
            Measure::Penalty(_) => Shape::PenaltyFlag,
            Measure::Risk(_) => Shape::Ordinal,
            Measure::Presence(_) => Shape::Presence,
        }
    }

    fn score(self, ceiling: Option<f64>) -> f64 {
        // Ceilings are checked once when the engine is built.
        let ceiling = ceiling.unwrap_or(MAX_SCORE);
        match self {
            Measure::Percentage(v) => higher_is_better(v, MAX_SCORE),
            Measure::Higher(v) => higher_is_better(v, ceiling),
            Measure::Lower(v) => lower_is_better(v, ceiling),
            Measure::Bonus(b) => bonus_flag(b),
            Measure::Penalty(b) => penalty_flag(b),
            Measure::Risk(level) => climate_risk_score(level),
            Measure::Presence(text) => community_engagement_score(text),
        }
    }
}

type Row<'a> = (Indicator, &'a IndicatorConfig, Measure<'a>);

fn score_rows(rows: &[Row<'_>]) -> Vec<IndicatorScore> {
    rows.iter()
        .map(|&(indicator, config, measure)| IndicatorScore {
            indicator,
            score: measure.score(config.ceiling),
            weight: config.weight,
        })
        .collect()
}

fn environmental_rows<'a>(
    inputs: &ValidatedInputs<'a>,
    config: &'a EnvironmentalConfig,
) -> [Row<'a>; 9] {
    let env = inputs.environmental;
    [
        (Indicator::Scope1Emissions, &config.scope1_emissions, Measure::Lower(env.scope1_emissions)),
        (Indicator::Scope2Emissions, &config.scope2_emissions, Measure::Lower(env.scope2_emissions)),
        (Indicator::Scope3Emissions, &config.scope3_emissions, Measure::Lower(env.scope3_emissions)),
        (
            Indicator::RenewableEnergy,
            &config.renewable_energy,
            Measure::Percentage(env.renewable_energy_percentage),
        ),
        (Indicator::WaterConsumption, &config.water_consumption, Measure::Lower(env.water_consumption)),
        (Indicator::WaterStress, &config.water_stress, Measure::Penalty(env.water_stress_area)),
        (Indicator::HazardousWaste, &config.hazardous_waste, Measure::Lower(env.hazardous_waste)),
        (Indicator::ElectronicWaste, &config.electronic_waste, Measure::Lower(env.electronic_waste)),
        (Indicator::ClimateRisk, &config.climate_risk, Measure::Risk(inputs.climate_risk)),
    ]
}

fn social_rows<'a>(inputs: &ValidatedInputs<'a>, config: &'a SocialConfig) -> [Row<'a>; 6] {
    let social = inputs.social;
    [
        (
            Indicator::GenderDiversity,
            &config.gender_diversity,
            Measure::Percentage(social.gender_diversity_percentage),
        ),
        (
            Indicator::TrainingHours,
            &config.training_hours,
            Measure::Higher(social.training_hours_per_employee),
        ),
        (
            Indicator::HealthSafetyIncidents,
            &config.health_safety_incidents,
            Measure::Lower(social.health_safety_incidents as f64),
        ),
        (
            Indicator::SupplyChainPolicy,
            &config.supply_chain_policy,
            Measure::Bonus(social.supply_chain_labour_policy),
        ),
        (
            Indicator::DataPrivacyIncidents,
            &config.data_privacy_incidents,
            Measure::Lower(social.data_privacy_incidents as f64),
        ),
        (
            Indicator::CommunityEngagement,
            &config.community_engagement,
            Measure::Presence(&social.community_initiatives),
        ),
    ]
}

fn governance_rows<'a>(inputs: &ValidatedInputs<'a>, config: &'a GovernanceConfig) -> [Row<'a>; 6] {
    let gov = inputs.governance;
    [
        (
            Indicator::IndependentDirectors,
            &config.independent_directors,
            Measure::Percentage(gov.independent_directors_percentage),
        ),
        (
            Indicator::BoardDiversity,
            &config.board_diversity,
            Measure::Percentage(gov.board_diversity_percentage),
        ),
        (
            Indicator::AntiCorruptionPolicy,
            &config.anti_corruption_policy,
            Measure::Bonus(gov.anti_corruption_policy),
        ),
        (
            Indicator::WhistleblowerPolicy,
            &config.whistleblower_policy,
            Measure::Bonus(gov.whistleblower_policy),
        ),
        (
            Indicator::ComplianceViolations,
            &config.compliance_violations,
            Measure::Lower(gov.compliance_violations as f64),
        ),
        (Indicator::TaxTransparency, &config.tax_transparency, Measure::Bonus(gov.tax_transparency)),
    ]
}

pub fn normalize_environmental(
    inputs: &ValidatedInputs<'_>,
    config: &EnvironmentalConfig,
) -> Vec<IndicatorScore> {
    score_rows(&environmental_rows(inputs, config))
}

pub fn normalize_social(inputs: &ValidatedInputs<'_>, config: &SocialConfig) -> Vec<IndicatorScore> {
    score_rows(&social_rows(inputs, config))
}

pub fn normalize_governance(
    inputs: &ValidatedInputs<'_>,
    config: &GovernanceConfig,
) -> Vec<IndicatorScore> {
    score_rows(&governance_rows(inputs, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{validate_inputs, EnvironmentalInputs, GovernanceInputs, SocialInputs};
    use crate::scoring::ScoringConfig;

    fn score_of(scores: &[IndicatorScore], indicator: Indicator) -> f64 {
        scores
            .iter()
            .find(|s| s.indicator == indicator)
            .map(|s| s.score)
            .unwrap()
    }

    #[test]
    fn test_higher_is_better_scales_and_saturates() {
        assert_eq!(higher_is_better(0.0, 40.0), 0.0);
        assert_eq!(higher_is_better(20.0, 40.0), 50.0);
        assert_eq!(higher_is_better(40.0, 40.0), 100.0);
        assert_eq!(higher_is_better(80.0, 40.0), 100.0);
    }

    #[test]
    fn test_percentage_is_identity() {
        assert_eq!(higher_is_better(37.5, MAX_SCORE), 37.5);
        assert_eq!(higher_is_better(100.0, MAX_SCORE), 100.0);
    }

    #[test]
    fn test_lower_is_better_inverts_and_floors() {
        assert_eq!(lower_is_better(0.0, 10.0), 100.0);
        assert_eq!(lower_is_better(2.5, 10.0), 75.0);
        assert_eq!(lower_is_better(10.0, 10.0), 0.0);
        assert_eq!(lower_is_better(1e12, 10.0), 0.0);
    }

    #[test]
    fn test_flags() {
        assert_eq!(bonus_flag(true), 100.0);
        assert_eq!(bonus_flag(false), 0.0);
        assert_eq!(penalty_flag(true), 0.0);
        assert_eq!(penalty_flag(false), 100.0);
    }

    #[test]
    fn test_climate_risk_ordinal_table() {
        assert_eq!(climate_risk_score(ClimateRiskLevel::Low), 100.0);
        assert_eq!(climate_risk_score(ClimateRiskLevel::Medium), 50.0);
        assert_eq!(climate_risk_score(ClimateRiskLevel::High), 0.0);
    }

    #[test]
    fn test_community_engagement_presence_only() {
        assert_eq!(community_engagement_score(""), 0.0);
        assert_eq!(community_engagement_score("   "), 0.0);
        assert_eq!(community_engagement_score("Mentoring programme"), 100.0);
    }

    #[test]
    fn test_clamp_score_nan() {
        assert_eq!(clamp_score(f64::NAN), 0.0);
        assert_eq!(clamp_score(f64::INFINITY), 100.0);
        assert_eq!(clamp_score(-3.0), 0.0);
    }

    #[test]
    fn test_clamp_score_rounds_off_float_noise() {
        assert_eq!(clamp_score(79.99999999999999), 80.0);
        assert_eq!(clamp_score(81.59999999999998), 81.6);
        assert_eq!(clamp_score(0.1 + 0.2), 0.3);
        // Real differences survive
        assert_eq!(clamp_score(79.999), 79.999);
    }

    #[test]
    fn test_rows_match_indicator_shapes() {
        let env = EnvironmentalInputs::default();
        let social = SocialInputs::default();
        let gov = GovernanceInputs::default();
        let inputs = validate_inputs(&env, &social, &gov).unwrap();
        let config = ScoringConfig::default();

        let mut rows: Vec<Row<'_>> = Vec::new();
        rows.extend(environmental_rows(&inputs, &config.environmental));
        rows.extend(social_rows(&inputs, &config.social));
        rows.extend(governance_rows(&inputs, &config.governance));
        assert_eq!(rows.len(), 21);
        for (indicator, _, measure) in rows {
            assert_eq!(measure.shape(), indicator.shape(), "{:?}", indicator);
        }
    }

    #[test]
    fn test_rows_use_their_own_config_entry() {
        let env = EnvironmentalInputs::default();
        let social = SocialInputs::default();
        let gov = GovernanceInputs::default();
        let inputs = validate_inputs(&env, &social, &gov).unwrap();
        let config = ScoringConfig::default();

        let rows = social_rows(&inputs, &config.social);
        for ((indicator, cfg, _), (expected, expected_cfg)) in
            rows.iter().zip(config.social.entries())
        {
            assert_eq!(*indicator, expected);
            assert_eq!(*cfg, expected_cfg);
        }
    }

    #[test]
    fn test_normalize_environmental_uses_ceilings() {
        let env = EnvironmentalInputs {
            scope1_emissions: 2_500.0,
            renewable_energy_percentage: 40.0,
            water_stress_area: true,
            climate_risk_level: "medium".to_string(),
            ..Default::default()
        };
        let social = SocialInputs::default();
        let gov = GovernanceInputs::default();
        let inputs = validate_inputs(&env, &social, &gov).unwrap();
        let config = ScoringConfig::default();

        let scores = normalize_environmental(&inputs, &config.environmental);
        assert_eq!(scores.len(), 9);
        assert_eq!(score_of(&scores, Indicator::Scope1Emissions), 75.0);
        assert_eq!(score_of(&scores, Indicator::Scope2Emissions), 100.0);
        assert_eq!(score_of(&scores, Indicator::RenewableEnergy), 40.0);
        assert_eq!(score_of(&scores, Indicator::WaterStress), 0.0);
        assert_eq!(score_of(&scores, Indicator::ClimateRisk), 50.0);
    }

    #[test]
    fn test_normalize_social_counts_and_text() {
        let env = EnvironmentalInputs::default();
        let social = SocialInputs {
            gender_diversity_percentage: 45.0,
            training_hours_per_employee: 10.0,
            health_safety_incidents: 5,
            data_privacy_incidents: 20,
            supply_chain_labour_policy: true,
            community_initiatives: "Beach clean-ups".to_string(),
            ..Default::default()
        };
        let gov = GovernanceInputs::default();
        let inputs = validate_inputs(&env, &social, &gov).unwrap();
        let config = ScoringConfig::default();

        let scores = normalize_social(&inputs, &config.social);
        assert_eq!(score_of(&scores, Indicator::GenderDiversity), 45.0);
        assert_eq!(score_of(&scores, Indicator::TrainingHours), 25.0);
        assert_eq!(score_of(&scores, Indicator::HealthSafetyIncidents), 75.0);
        assert_eq!(score_of(&scores, Indicator::DataPrivacyIncidents), 0.0);
        assert_eq!(score_of(&scores, Indicator::SupplyChainPolicy), 100.0);
        assert_eq!(score_of(&scores, Indicator::CommunityEngagement), 100.0);
    }

    #[test]
    fn test_normalize_governance_carries_weights() {
        let env = EnvironmentalInputs::default();
        let social = SocialInputs::default();
        let gov = GovernanceInputs {
            independent_directors_percentage: 60.0,
            compliance_violations: 1,
            tax_transparency: true,
            ..Default::default()
        };
        let inputs = validate_inputs(&env, &social, &gov).unwrap();
        let config = ScoringConfig::default();

        let scores = normalize_governance(&inputs, &config.governance);
        assert_eq!(score_of(&scores, Indicator::IndependentDirectors), 60.0);
        assert_eq!(score_of(&scores, Indicator::ComplianceViolations), 90.0);
        assert_eq!(score_of(&scores, Indicator::TaxTransparency), 100.0);
        let total_weight: f64 = scores.iter().map(|s| s.weight).sum();
        assert!((total_weight - 1.0).abs() < 1e-9);
    }
}
