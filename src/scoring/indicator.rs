use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level scoring category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pillar {
    Environmental,
    Social,
    Governance,
}

impl Pillar {
    pub const ALL: [Pillar; 3] = [Pillar::Environmental, Pillar::Social, Pillar::Governance];

    pub fn key(&self) -> &'static str {
        match self {
            Pillar::Environmental => "environmental",
            Pillar::Social => "social",
            Pillar::Governance => "governance",
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Pillar::Environmental => "Environmental",
            Pillar::Social => "Social",
            Pillar::Governance => "Governance",
        };
        f.write_str(label)
    }
}

/// How a raw indicator maps onto the 0-100 goodness scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Already on 0-100; identity.
    Percentage,
    /// `min(100, 100 * value / ceiling)`
    HigherIsBetter,
    /// `max(0, 100 - 100 * value / ceiling)`
    LowerIsBetter,
    /// true -> 100, false -> 0
    BonusFlag,
    /// true -> 0, false -> 100
    PenaltyFlag,
    /// low -> 100, medium -> 50, high -> 0
    Ordinal,
    /// non-empty text -> 100, empty -> 0
    Presence,
}

impl Shape {
    /// Whether normalization divides by a configured ceiling.
    pub fn needs_ceiling(&self) -> bool {
        matches!(self, Shape::HigherIsBetter | Shape::LowerIsBetter)
    }
}

/// One scored disclosure metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    Scope1Emissions,
    Scope2Emissions,
    Scope3Emissions,
    RenewableEnergy,
    WaterConsumption,
    WaterStress,
    HazardousWaste,
    ElectronicWaste,
    ClimateRisk,
    GenderDiversity,
    TrainingHours,
    HealthSafetyIncidents,
    SupplyChainPolicy,
    DataPrivacyIncidents,
    CommunityEngagement,
    IndependentDirectors,
    BoardDiversity,
    AntiCorruptionPolicy,
    WhistleblowerPolicy,
    ComplianceViolations,
    TaxTransparency,
}

impl Indicator {
    pub fn pillar(&self) -> Pillar {
        use Indicator::*;
        match self {
            Scope1Emissions | Scope2Emissions | Scope3Emissions | RenewableEnergy
            | WaterConsumption | WaterStress | HazardousWaste | ElectronicWaste | ClimateRisk => {
                Pillar::Environmental
            }
            GenderDiversity | TrainingHours | HealthSafetyIncidents | SupplyChainPolicy
            | DataPrivacyIncidents | CommunityEngagement => Pillar::Social,
            IndependentDirectors | BoardDiversity | AntiCorruptionPolicy | WhistleblowerPolicy
            | ComplianceViolations | TaxTransparency => Pillar::Governance,
        }
    }

    pub fn shape(&self) -> Shape {
        use Indicator::*;
        match self {
            RenewableEnergy | GenderDiversity | IndependentDirectors | BoardDiversity => {
                Shape::Percentage
            }
            TrainingHours => Shape::HigherIsBetter,
            Scope1Emissions | Scope2Emissions | Scope3Emissions | WaterConsumption
            | HazardousWaste | ElectronicWaste | HealthSafetyIncidents | DataPrivacyIncidents
            | ComplianceViolations => Shape::LowerIsBetter,
            SupplyChainPolicy | AntiCorruptionPolicy | WhistleblowerPolicy | TaxTransparency => {
                Shape::BonusFlag
            }
            WaterStress => Shape::PenaltyFlag,
            ClimateRisk => Shape::Ordinal,
            CommunityEngagement => Shape::Presence,
        }
    }

    /// Key used in the scoring config file.
    pub fn config_key(&self) -> &'static str {
        use Indicator::*;
        match self {
            Scope1Emissions => "scope1_emissions",
            Scope2Emissions => "scope2_emissions",
            Scope3Emissions => "scope3_emissions",
            RenewableEnergy => "renewable_energy",
            WaterConsumption => "water_consumption",
            WaterStress => "water_stress",
            HazardousWaste => "hazardous_waste",
            ElectronicWaste => "electronic_waste",
            ClimateRisk => "climate_risk",
            GenderDiversity => "gender_diversity",
            TrainingHours => "training_hours",
            HealthSafetyIncidents => "health_safety_incidents",
            SupplyChainPolicy => "supply_chain_policy",
            DataPrivacyIncidents => "data_privacy_incidents",
            CommunityEngagement => "community_engagement",
            IndependentDirectors => "independent_directors",
            BoardDiversity => "board_diversity",
            AntiCorruptionPolicy => "anti_corruption_policy",
            WhistleblowerPolicy => "whistleblower_policy",
            ComplianceViolations => "compliance_violations",
            TaxTransparency => "tax_transparency",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Indicator::*;
        let label = match self {
            Scope1Emissions => "Scope 1 emissions",
            Scope2Emissions => "Scope 2 emissions",
            Scope3Emissions => "Scope 3 emissions",
            RenewableEnergy => "Renewable energy",
            WaterConsumption => "Water consumption",
            WaterStress => "Water stress area",
            HazardousWaste => "Hazardous waste",
            ElectronicWaste => "Electronic waste",
            ClimateRisk => "Climate risk",
            GenderDiversity => "Gender diversity",
            TrainingHours => "Training hours",
            HealthSafetyIncidents => "Health & safety incidents",
            SupplyChainPolicy => "Supply chain labour policy",
            DataPrivacyIncidents => "Data privacy incidents",
            CommunityEngagement => "Community engagement",
            IndependentDirectors => "Independent directors",
            BoardDiversity => "Board diversity",
            AntiCorruptionPolicy => "Anti-corruption policy",
            WhistleblowerPolicy => "Whistleblower policy",
            ComplianceViolations => "Compliance violations",
            TaxTransparency => "Tax transparency",
        };
        f.write_str(label)
    }
}
