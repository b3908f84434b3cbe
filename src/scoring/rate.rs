use serde::{Deserialize, Serialize};
use std::fmt;

use super::config::{BandThreshold, PillarWeights};
use super::normalize::clamp_score;

/// Qualitative rating derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Leading,
    Advancing,
    Developing,
    Lagging,
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Band::Leading => "Leading",
            Band::Advancing => "Advancing",
            Band::Developing => "Developing",
            Band::Lagging => "Lagging",
        };
        f.write_str(label)
    }
}

/// Weighted mean of the three pillar scores, clamped to [0, 100].
pub fn composite_score(
    environmental: f64,
    social: f64,
    governance: f64,
    weights: &PillarWeights,
) -> f64 {
    let total = weights.environmental + weights.social + weights.governance;
    if total <= 0.0 {
        return 0.0;
    }
    let weighted = environmental * weights.environmental
        + social * weights.social
        + governance * weights.governance;
    clamp_score(weighted / total)
}

/// Band lookup, top-down, first `score >= min` wins.
///
/// Thresholds are validated to descend and end at 0, so every score in
/// [0, 100] matches. Should a table somehow not cover the score, the last
/// band is the answer.
pub fn rate(score: f64, bands: &[BandThreshold]) -> Band {
    bands
        .iter()
        .find(|threshold| score >= threshold.min)
        .or(bands.last())
        .map(|threshold| threshold.band)
        .unwrap_or(Band::Lagging)
}
