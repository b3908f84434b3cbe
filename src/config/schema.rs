use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Scoring policy overrides; built-in table when absent
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}

impl Config {
    /// The scoring table in force: the file's, or the built-in one.
    pub fn effective_scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_default()
    }
}
