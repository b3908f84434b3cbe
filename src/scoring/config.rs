use serde::{Deserialize, Serialize};

use super::indicator::Indicator;
use super::rate::Band;

/// Main scoring configuration.
///
/// The single table of policy choices: pillar weights, per-indicator
/// weights and benchmark ceilings, and band thresholds. Everything the
/// engine needs to turn a disclosure into a rating lives here, so policy
/// can be tuned without touching the algorithm.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   pillars: { environmental: 0.5, social: 0.25, governance: 0.25 }
///   social:
///     training_hours: { weight: 0.2, ceiling: 60 }
///   bands:
///     - { min: 75, band: leading }
///     - { min: 55, band: advancing }
///     - { min: 35, band: developing }
///     - { min: 0, band: lagging }
/// ```
///
/// Sections left out keep their built-in defaults.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    #[serde(default)]
    pub pillars: PillarWeights,

    #[serde(default)]
    pub environmental: EnvironmentalConfig,

    #[serde(default)]
    pub social: SocialConfig,

    #[serde(default)]
    pub governance: GovernanceConfig,

    /// Thresholds evaluated top-down, first match wins.
    #[serde(default = "default_bands")]
    pub bands: Vec<BandThreshold>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            pillars: PillarWeights::default(),
            environmental: EnvironmentalConfig::default(),
            social: SocialConfig::default(),
            governance: GovernanceConfig::default(),
            bands: default_bands(),
        }
    }
}

impl ScoringConfig {
    /// Give every indicator override that left out `ceiling` the built-in
    /// benchmark, so `{ weight: 0.3 }` only changes the weight.
    pub fn fill_default_ceilings(&mut self) {
        let defaults = ScoringConfig::default();
        fill_ceilings(self.environmental.entries_mut(), defaults.environmental.entries());
        fill_ceilings(self.social.entries_mut(), defaults.social.entries());
        fill_ceilings(self.governance.entries_mut(), defaults.governance.entries());
    }
}

fn fill_ceilings<'a, 'b>(
    configured: impl IntoIterator<Item = (Indicator, &'a mut IndicatorConfig)>,
    defaults: impl IntoIterator<Item = (Indicator, &'b IndicatorConfig)>,
) {
    for ((_, cfg), (_, default)) in configured.into_iter().zip(defaults) {
        if cfg.ceiling.is_none() {
            cfg.ceiling = default.ceiling;
        }
    }
}

fn default_bands() -> Vec<BandThreshold> {
    vec![
        BandThreshold { min: 80.0, band: Band::Leading },
        BandThreshold { min: 60.0, band: Band::Advancing },
        BandThreshold { min: 40.0, band: Band::Developing },
        BandThreshold { min: 0.0, band: Band::Lagging },
    ]
}

/// Composite weights per pillar. Must sum to 1.0.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PillarWeights {
    pub environmental: f64,
    pub social: f64,
    pub governance: f64,
}

impl Default for PillarWeights {
    fn default() -> Self {
        Self {
            environmental: 0.4,
            social: 0.3,
            governance: 0.3,
        }
    }
}

/// Weight and benchmark for one indicator.
///
/// `ceiling` is the raw value at which a scaled indicator saturates
/// (100 for higher-is-better, 0 for lower-is-better). Percentages, flags
/// and categories ignore it.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct IndicatorConfig {
    pub weight: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ceiling: Option<f64>,
}

impl IndicatorConfig {
    pub const fn weighted(weight: f64) -> Self {
        Self { weight, ceiling: None }
    }

    pub const fn scaled(weight: f64, ceiling: f64) -> Self {
        Self {
            weight,
            ceiling: Some(ceiling),
        }
    }
}

/// Ordered band threshold: scores `>= min` fall into `band`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BandThreshold {
    pub min: f64,
    pub band: Band,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct EnvironmentalConfig {
    /// tCO2e
    pub scope1_emissions: IndicatorConfig,
    /// tCO2e
    pub scope2_emissions: IndicatorConfig,
    /// tCO2e
    pub scope3_emissions: IndicatorConfig,
    pub renewable_energy: IndicatorConfig,
    /// m3
    pub water_consumption: IndicatorConfig,
    pub water_stress: IndicatorConfig,
    /// tonnes
    pub hazardous_waste: IndicatorConfig,
    /// tonnes
    pub electronic_waste: IndicatorConfig,
    pub climate_risk: IndicatorConfig,
}

impl Default for EnvironmentalConfig {
    fn default() -> Self {
        Self {
            scope1_emissions: IndicatorConfig::scaled(0.15, 10_000.0),
            scope2_emissions: IndicatorConfig::scaled(0.15, 10_000.0),
            scope3_emissions: IndicatorConfig::scaled(0.10, 50_000.0),
            renewable_energy: IndicatorConfig::weighted(0.15),
            water_consumption: IndicatorConfig::scaled(0.10, 100_000.0),
            water_stress: IndicatorConfig::weighted(0.05),
            hazardous_waste: IndicatorConfig::scaled(0.10, 500.0),
            electronic_waste: IndicatorConfig::scaled(0.05, 100.0),
            climate_risk: IndicatorConfig::weighted(0.15),
        }
    }
}

impl EnvironmentalConfig {
    pub fn entries(&self) -> [(Indicator, &IndicatorConfig); 9] {
        [
            (Indicator::Scope1Emissions, &self.scope1_emissions),
            (Indicator::Scope2Emissions, &self.scope2_emissions),
            (Indicator::Scope3Emissions, &self.scope3_emissions),
            (Indicator::RenewableEnergy, &self.renewable_energy),
            (Indicator::WaterConsumption, &self.water_consumption),
            (Indicator::WaterStress, &self.water_stress),
            (Indicator::HazardousWaste, &self.hazardous_waste),
            (Indicator::ElectronicWaste, &self.electronic_waste),
            (Indicator::ClimateRisk, &self.climate_risk),
        ]
    }

    pub fn entries_mut(&mut self) -> [(Indicator, &mut IndicatorConfig); 9] {
        [
            (Indicator::Scope1Emissions, &mut self.scope1_emissions),
            (Indicator::Scope2Emissions, &mut self.scope2_emissions),
            (Indicator::Scope3Emissions, &mut self.scope3_emissions),
            (Indicator::RenewableEnergy, &mut self.renewable_energy),
            (Indicator::WaterConsumption, &mut self.water_consumption),
            (Indicator::WaterStress, &mut self.water_stress),
            (Indicator::HazardousWaste, &mut self.hazardous_waste),
            (Indicator::ElectronicWaste, &mut self.electronic_waste),
            (Indicator::ClimateRisk, &mut self.climate_risk),
        ]
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct SocialConfig {
    pub gender_diversity: IndicatorConfig,
    /// hours per employee per year
    pub training_hours: IndicatorConfig,
    pub health_safety_incidents: IndicatorConfig,
    pub supply_chain_policy: IndicatorConfig,
    pub data_privacy_incidents: IndicatorConfig,
    pub community_engagement: IndicatorConfig,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            gender_diversity: IndicatorConfig::weighted(0.20),
            training_hours: IndicatorConfig::scaled(0.20, 40.0),
            health_safety_incidents: IndicatorConfig::scaled(0.20, 20.0),
            supply_chain_policy: IndicatorConfig::weighted(0.15),
            data_privacy_incidents: IndicatorConfig::scaled(0.15, 10.0),
            community_engagement: IndicatorConfig::weighted(0.10),
        }
    }
}

impl SocialConfig {
    pub fn entries(&self) -> [(Indicator, &IndicatorConfig); 6] {
        [
            (Indicator::GenderDiversity, &self.gender_diversity),
            (Indicator::TrainingHours, &self.training_hours),
            (Indicator::HealthSafetyIncidents, &self.health_safety_incidents),
            (Indicator::SupplyChainPolicy, &self.supply_chain_policy),
            (Indicator::DataPrivacyIncidents, &self.data_privacy_incidents),
            (Indicator::CommunityEngagement, &self.community_engagement),
        ]
    }

    pub fn entries_mut(&mut self) -> [(Indicator, &mut IndicatorConfig); 6] {
        [
            (Indicator::GenderDiversity, &mut self.gender_diversity),
            (Indicator::TrainingHours, &mut self.training_hours),
            (Indicator::HealthSafetyIncidents, &mut self.health_safety_incidents),
            (Indicator::SupplyChainPolicy, &mut self.supply_chain_policy),
            (Indicator::DataPrivacyIncidents, &mut self.data_privacy_incidents),
            (Indicator::CommunityEngagement, &mut self.community_engagement),
        ]
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct GovernanceConfig {
    pub independent_directors: IndicatorConfig,
    pub board_diversity: IndicatorConfig,
    pub anti_corruption_policy: IndicatorConfig,
    pub whistleblower_policy: IndicatorConfig,
    pub compliance_violations: IndicatorConfig,
    pub tax_transparency: IndicatorConfig,
}

impl Default for GovernanceConfig {
    fn default() -> Self {
        Self {
            independent_directors: IndicatorConfig::weighted(0.20),
            board_diversity: IndicatorConfig::weighted(0.15),
            anti_corruption_policy: IndicatorConfig::weighted(0.20),
            whistleblower_policy: IndicatorConfig::weighted(0.15),
            compliance_violations: IndicatorConfig::scaled(0.15, 10.0),
            tax_transparency: IndicatorConfig::weighted(0.15),
        }
    }
}

impl GovernanceConfig {
    pub fn entries(&self) -> [(Indicator, &IndicatorConfig); 6] {
        [
            (Indicator::IndependentDirectors, &self.independent_directors),
            (Indicator::BoardDiversity, &self.board_diversity),
            (Indicator::AntiCorruptionPolicy, &self.anti_corruption_policy),
            (Indicator::WhistleblowerPolicy, &self.whistleblower_policy),
            (Indicator::ComplianceViolations, &self.compliance_violations),
            (Indicator::TaxTransparency, &self.tax_transparency),
        ]
    }

    pub fn entries_mut(&mut self) -> [(Indicator, &mut IndicatorConfig); 6] {
        [
            (Indicator::IndependentDirectors, &mut self.independent_directors),
            (Indicator::BoardDiversity, &mut self.board_diversity),
            (Indicator::AntiCorruptionPolicy, &mut self.anti_corruption_policy),
            (Indicator::WhistleblowerPolicy, &mut self.whistleblower_policy),
            (Indicator::ComplianceViolations, &mut self.compliance_violations),
            (Indicator::TaxTransparency, &mut self.tax_transparency),
        ]
    }
}
