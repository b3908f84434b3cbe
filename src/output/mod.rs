pub mod formatter;

pub use formatter::{
    format_band, format_breakdown, format_json, format_report, format_score,
    format_scoring_config, format_tsv, should_use_colors, ScoredReport,
};
