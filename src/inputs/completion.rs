use serde::Serialize;

use super::types::{EnvironmentalInputs, GovernanceInputs, SocialInputs};

/// Which disclosure sections look filled in.
///
/// This is a form-level heuristic, separate from scoring: an all-zero
/// section is still scored, it just probably was never entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionCompletion {
    pub environmental: bool,
    pub social: bool,
    pub governance: bool,
}

impl SectionCompletion {
    pub fn from_inputs(
        environmental: &EnvironmentalInputs,
        social: &SocialInputs,
        governance: &GovernanceInputs,
    ) -> Self {
        let env = environmental;
        Self {
            environmental: env.scope1_emissions > 0.0
                || env.scope2_emissions > 0.0
                || env.scope3_emissions > 0.0
                || env.renewable_energy_percentage > 0.0
                || env.water_consumption > 0.0,
            social: social.total_employees > 0 || social.training_hours_per_employee > 0.0,
            governance: governance.board_size > 0
                || governance.independent_directors_percentage > 0.0
                || governance.anti_corruption_policy
                || governance.whistleblower_policy,
        }
    }

    pub fn all_complete(&self) -> bool {
        self.environmental && self.social && self.governance
    }

    /// Names of the sections that still look empty.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.environmental {
            missing.push("environmental");
        }
        if !self.social {
            missing.push("social");
        }
        if !self.governance {
            missing.push("governance");
        }
        missing
    }
}
