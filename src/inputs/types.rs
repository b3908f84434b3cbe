use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InvalidReason;

/// Environmental disclosure as submitted.
///
/// Zero is a real reading ("no measured impact"), not a missing value.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnvironmentalInputs {
    /// Direct emissions, tCO2e
    pub scope1_emissions: f64,
    /// Purchased energy emissions, tCO2e
    pub scope2_emissions: f64,
    /// Value chain emissions, tCO2e
    pub scope3_emissions: f64,
    pub renewable_energy_percentage: f64,
    /// Cubic metres
    pub water_consumption: f64,
    pub water_stress_area: bool,
    /// Tonnes
    pub hazardous_waste: f64,
    /// Tonnes
    pub electronic_waste: f64,
    /// Raw category text: "low", "medium" or "high"
    pub climate_risk_level: String,
}

impl Default for EnvironmentalInputs {
    fn default() -> Self {
        Self {
            scope1_emissions: 0.0,
            scope2_emissions: 0.0,
            scope3_emissions: 0.0,
            renewable_energy_percentage: 0.0,
            water_consumption: 0.0,
            water_stress_area: false,
            hazardous_waste: 0.0,
            electronic_waste: 0.0,
            climate_risk_level: ClimateRiskLevel::Low.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialInputs {
    pub total_employees: i64,
    pub gender_diversity_percentage: f64,
    pub training_hours_per_employee: f64,
    pub health_safety_incidents: i64,
    pub supply_chain_labour_policy: bool,
    pub data_privacy_incidents: i64,
    /// Free text; only its presence is scored.
    pub community_initiatives: String,
}

impl Default for SocialInputs {
    fn default() -> Self {
        Self {
            total_employees: 0,
            gender_diversity_percentage: 50.0,
            training_hours_per_employee: 0.0,
            health_safety_incidents: 0,
            supply_chain_labour_policy: false,
            data_privacy_incidents: 0,
            community_initiatives: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GovernanceInputs {
    pub board_size: i64,
    pub independent_directors_percentage: f64,
    pub board_diversity_percentage: f64,
    pub anti_corruption_policy: bool,
    pub whistleblower_policy: bool,
    pub compliance_violations: i64,
    pub tax_transparency: bool,
}

/// Physical and transition climate risk exposure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClimateRiskLevel {
    Low,
    Medium,
    High,
}

impl ClimateRiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClimateRiskLevel::Low => "low",
            ClimateRiskLevel::Medium => "medium",
            ClimateRiskLevel::High => "high",
        }
    }
}

impl fmt::Display for ClimateRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClimateRiskLevel {
    type Err = InvalidReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(ClimateRiskLevel::Low),
            "medium" => Ok(ClimateRiskLevel::Medium),
            "high" => Ok(ClimateRiskLevel::High),
            _ => Err(InvalidReason::UnrecognizedCategory(s.to_string())),
        }
    }
}

/// Who is reporting, and for when. Shown in report headers, never scored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportContext {
    pub organization_name: String,
    pub reporting_year: i32,
    pub industry: String,
    pub country: String,
    pub reporting_framework: String,
}

impl Default for ReportContext {
    fn default() -> Self {
        Self {
            organization_name: String::new(),
            reporting_year: chrono::Local::now().year(),
            industry: String::new(),
            country: String::new(),
            reporting_framework: "General ESG".to_string(),
        }
    }
}

/// A full disclosure document: context plus the three pillar sections.
///
/// Example YAML:
/// ```yaml
/// context:
///   organizationName: Acme Corp
///   reportingYear: 2025
/// environmental:
///   scope1Emissions: 1200
///   renewableEnergyPercentage: 35
///   climateRiskLevel: medium
/// social:
///   totalEmployees: 420
///   trainingHoursPerEmployee: 18
/// governance:
///   boardSize: 9
///   antiCorruptionPolicy: true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Disclosure {
    pub context: ReportContext,
    pub environmental: EnvironmentalInputs,
    pub social: SocialInputs,
    pub governance: GovernanceInputs,
}
