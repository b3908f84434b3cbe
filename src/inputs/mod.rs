pub mod completion;
pub mod load;
pub mod types;
pub mod validate;

pub use completion::SectionCompletion;
pub use load::{load_disclosure, parse_disclosure};
pub use types::{
    ClimateRiskLevel, Disclosure, EnvironmentalInputs, GovernanceInputs, ReportContext,
    SocialInputs,
};
pub use validate::{validate_inputs, ValidatedInputs};
