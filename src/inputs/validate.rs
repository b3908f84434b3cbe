use super::types::{ClimateRiskLevel, EnvironmentalInputs, GovernanceInputs, SocialInputs};
use crate::error::{InvalidInputError, InvalidReason};

/// Disclosure inputs that passed validation, with categories parsed.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedInputs<'a> {
    pub environmental: &'a EnvironmentalInputs,
    pub social: &'a SocialInputs,
    pub governance: &'a GovernanceInputs,
    pub climate_risk: ClimateRiskLevel,
}

/// Check every field against its declared domain.
///
/// Fails on the first violation, in declaration order. Zero is always
/// accepted; it is a meaningful reading, not a missing one.
pub fn validate_inputs<'a>(
    environmental: &'a EnvironmentalInputs,
    social: &'a SocialInputs,
    governance: &'a GovernanceInputs,
) -> Result<ValidatedInputs<'a>, InvalidInputError> {
    let env = environmental;
    non_negative("environmental.scope1Emissions", env.scope1_emissions)?;
    non_negative("environmental.scope2Emissions", env.scope2_emissions)?;
    non_negative("environmental.scope3Emissions", env.scope3_emissions)?;
    percentage(
        "environmental.renewableEnergyPercentage",
        env.renewable_energy_percentage,
    )?;
    non_negative("environmental.waterConsumption", env.water_consumption)?;
    non_negative("environmental.hazardousWaste", env.hazardous_waste)?;
    non_negative("environmental.electronicWaste", env.electronic_waste)?;
    let climate_risk = env
        .climate_risk_level
        .parse::<ClimateRiskLevel>()
        .map_err(|reason| InvalidInputError::new("environmental.climateRiskLevel", reason))?;

    count("social.totalEmployees", social.total_employees)?;
    percentage(
        "social.genderDiversityPercentage",
        social.gender_diversity_percentage,
    )?;
    non_negative(
        "social.trainingHoursPerEmployee",
        social.training_hours_per_employee,
    )?;
    count("social.healthSafetyIncidents", social.health_safety_incidents)?;
    count("social.dataPrivacyIncidents", social.data_privacy_incidents)?;

    count("governance.boardSize", governance.board_size)?;
    percentage(
        "governance.independentDirectorsPercentage",
        governance.independent_directors_percentage,
    )?;
    percentage(
        "governance.boardDiversityPercentage",
        governance.board_diversity_percentage,
    )?;
    count("governance.complianceViolations", governance.compliance_violations)?;

    Ok(ValidatedInputs {
        environmental,
        social,
        governance,
        climate_risk,
    })
}

fn finite(field: &'static str, value: f64) -> Result<(), InvalidInputError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InvalidInputError::new(field, InvalidReason::NotFinite))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), InvalidInputError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(InvalidInputError::new(field, InvalidReason::Negative));
    }
    Ok(())
}

fn percentage(field: &'static str, value: f64) -> Result<(), InvalidInputError> {
    finite(field, value)?;
    if !(0.0..=100.0).contains(&value) {
        return Err(InvalidInputError::new(field, InvalidReason::OutOfPercentRange));
    }
    Ok(())
}

fn count(field: &'static str, value: i64) -> Result<(), InvalidInputError> {
    if value < 0 {
        Err(InvalidInputError::new(field, InvalidReason::Negative))
    } else {
        Ok(())
    }
}
