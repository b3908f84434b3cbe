use serde::Serialize;

use super::indicator::Pillar;
use super::normalize::{clamp_score, IndicatorScore};

/// One pillar's score together with the indicators that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PillarScore {
    pub pillar: Pillar,
    pub score: f64,
    pub indicators: Vec<IndicatorScore>,
}

impl PillarScore {
    pub fn from_indicators(pillar: Pillar, indicators: Vec<IndicatorScore>) -> Self {
        let score = weighted_mean(&indicators);
        Self {
            pillar,
            score,
            indicators,
        }
    }

    /// Points this indicator adds to the pillar score.
    pub fn contribution(&self, indicator: &IndicatorScore) -> f64 {
        let total: f64 = self.indicators.iter().map(|i| i.weight).sum();
        if total > 0.0 {
            indicator.score * indicator.weight / total
        } else {
            0.0
        }
    }
}

/// Weighted arithmetic mean of normalized scores, clamped to [0, 100].
///
/// Every indicator takes part; a zero or `false` input is already a score,
/// never a reason to drop the indicator. Dividing by the weight total keeps
/// the result a true mean even when configured weights drift from 1.0 by
/// floating point error.
pub fn weighted_mean(scores: &[IndicatorScore]) -> f64 {
    let (weighted, total) = scores
        .iter()
        .fold((0.0, 0.0), |(sum, weights), s| (sum + s.score * s.weight, weights + s.weight));
    if total > 0.0 {
        clamp_score(weighted / total)
    } else {
        0.0
    }
}
