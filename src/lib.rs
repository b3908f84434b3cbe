//! ESG composite scoring.
//!
//! Raw Environmental, Social and Governance disclosures go in; normalized
//! pillar scores, a weighted composite and a rating band come out. The
//! engine is a pure function of its inputs and its configuration table.
//!
//! ```no_run
//! use esg_score::inputs::{EnvironmentalInputs, GovernanceInputs, SocialInputs};
//! use esg_score::scoring::compute_scores;
//!
//! let scores = compute_scores(
//!     &EnvironmentalInputs::default(),
//!     &SocialInputs::default(),
//!     &GovernanceInputs::default(),
//! )?;
//! println!("{:.1} ({})", scores.composite, scores.band);
//! # Ok::<(), esg_score::InvalidInputError>(())
//! ```

pub mod config;
pub mod error;
pub mod inputs;
pub mod output;
pub mod scoring;

pub use error::{ConfigError, DisclosureError, InvalidInputError, InvalidReason};
