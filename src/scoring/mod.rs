pub mod aggregate;
pub mod config;
pub mod engine;
pub mod indicator;
pub mod normalize;
pub mod rate;
pub mod validation;

pub use aggregate::{weighted_mean, PillarScore};
pub use config::*;
pub use engine::{compute_scores, EsgScores, ScoringEngine};
pub use indicator::{Indicator, Pillar, Shape};
pub use normalize::IndicatorScore;
pub use rate::{composite_score, rate, Band};
pub use validation::validate_scoring;
