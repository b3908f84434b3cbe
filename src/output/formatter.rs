use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;

use crate::inputs::{ReportContext, SectionCompletion};
use crate::scoring::{Band, EsgScores, IndicatorConfig, Indicator, Pillar, ScoringConfig};

/// A scored disclosure, as written by `--format json`.
#[derive(Debug, Serialize)]
pub struct ScoredReport<'a> {
    pub context: &'a ReportContext,
    pub completion: SectionCompletion,
    pub scores: &'a EsgScores,
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a 0-100 score with one decimal ("72.5")
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// Band label, colored by how good it is
pub fn format_band(band: Band, use_colors: bool) -> String {
    let label = band.to_string();
    if !use_colors {
        return label;
    }
    match band {
        Band::Leading => label.green().bold().to_string(),
        Band::Advancing => label.cyan().bold().to_string(),
        Band::Developing => label.yellow().bold().to_string(),
        Band::Lagging => label.red().bold().to_string(),
    }
}

fn format_header(context: &ReportContext) -> String {
    let name = if context.organization_name.trim().is_empty() {
        "(unnamed organization)"
    } else {
        context.organization_name.as_str()
    };
    let mut header = format!("{} - {} {}", name, context.reporting_framework, context.reporting_year);
    let location: Vec<&str> = [context.industry.as_str(), context.country.as_str()]
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .collect();
    if !location.is_empty() {
        header.push_str(&format!(" ({})", location.join(", ")));
    }
    header
}

/// Format the headline result: pillar scores, composite and band
///
/// Column layout: label padded to 15, score right-aligned in 6
pub fn format_report(context: &ReportContext, scores: &EsgScores, use_colors: bool) -> String {
    let header = format_header(context);
    let mut lines = Vec::new();
    if use_colors {
        lines.push(header.bold().to_string());
    } else {
        lines.push(header);
    }

    for pillar in Pillar::ALL {
        let label = format!("{:<15}", pillar.to_string());
        let score = format!("{:>6}", format_score(scores.pillar(pillar)));
        if use_colors {
            lines.push(format!("  {}{}", label.dimmed(), score));
        } else {
            lines.push(format!("  {}{}", label, score));
        }
    }

    let composite = format!("{:>6}", format_score(scores.composite));
    let band = format_band(scores.band, use_colors);
    if use_colors {
        lines.push(format!("  {:<15}{}  {}", "Composite", composite.bold(), band));
    } else {
        lines.push(format!("  {:<15}{}  {}", "Composite", composite, band));
    }

    lines.join("\n")
}

/// Format the per-indicator audit trail (for verbose mode)
///
/// One line per indicator: normalized score, weight, and the points it
/// contributes to its pillar.
pub fn format_breakdown(scores: &EsgScores, use_colors: bool) -> String {
    let mut lines = Vec::new();
    for pillar in &scores.breakdown {
        let title = format!("{} ({})", pillar.pillar, format_score(pillar.score));
        if use_colors {
            lines.push(title.bold().to_string());
        } else {
            lines.push(title);
        }
        for indicator in &pillar.indicators {
            let contribution = pillar.contribution(indicator);
            let line = format!(
                "  {:<28}{:>6}  x{:<5}{:>8}",
                indicator.indicator.to_string(),
                format_score(indicator.score),
                indicator.weight,
                format!("+{:.1}", contribution)
            );
            if use_colors && indicator.score <= 0.0 {
                lines.push(line.dimmed().to_string());
            } else {
                lines.push(line);
            }
        }
    }
    lines.join("\n")
}

/// Format as one tab-separated line for scripting
/// Columns: composite, band, environmental, social, governance, organization (no headers, no colors)
pub fn format_tsv(context: &ReportContext, scores: &EsgScores) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        format_score(scores.composite),
        scores.band,
        format_score(scores.environmental),
        format_score(scores.social),
        format_score(scores.governance),
        context.organization_name
    )
}

/// Pretty JSON of the full result, breakdown included
pub fn format_json(report: &ScoredReport<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

fn format_indicator_policy(indicator: Indicator, cfg: &IndicatorConfig) -> String {
    let shape = format!("{:?}", indicator.shape());
    let ceiling = match cfg.ceiling {
        Some(c) if indicator.shape().needs_ceiling() => format!("ceiling {}", c),
        _ => String::new(),
    };
    format!(
        "    {:<28}{:>6}  {:<15}{}",
        indicator.to_string(),
        format!("{:.2}", cfg.weight),
        shape,
        ceiling
    )
    .trim_end()
    .to_string()
}

/// Format the scoring policy table (for `check`)
pub fn format_scoring_config(config: &ScoringConfig) -> String {
    let mut lines = vec!["Pillar weights:".to_string()];
    lines.push(format!(
        "    Environmental {:.2}  Social {:.2}  Governance {:.2}",
        config.pillars.environmental, config.pillars.social, config.pillars.governance
    ));

    let sections: [(Pillar, Vec<(Indicator, &IndicatorConfig)>); 3] = [
        (Pillar::Environmental, config.environmental.entries().to_vec()),
        (Pillar::Social, config.social.entries().to_vec()),
        (Pillar::Governance, config.governance.entries().to_vec()),
    ];
    for (pillar, entries) in sections {
        lines.push(format!("{} indicators:", pillar));
        for (indicator, cfg) in entries {
            lines.push(format_indicator_policy(indicator, cfg));
        }
    }

    lines.push("Bands:".to_string());
    for threshold in &config.bands {
        lines.push(format!("    >= {:<6}{}", threshold.min, threshold.band));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{EnvironmentalInputs, GovernanceInputs, SocialInputs};
    use crate::scoring::compute_scores;

    fn sample() -> (ReportContext, EsgScores) {
        let context = ReportContext {
            organization_name: "Acme Corp".to_string(),
            reporting_year: 2025,
            industry: "Manufacturing".to_string(),
            country: String::new(),
            reporting_framework: "GRI".to_string(),
        };
        let env = EnvironmentalInputs {
            climate_risk_level: "high".to_string(),
            ..Default::default()
        };
        let social = SocialInputs {
            gender_diversity_percentage: 0.0,
            ..Default::default()
        };
        let scores = compute_scores(&env, &social, &GovernanceInputs::default()).unwrap();
        (context, scores)
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(43.0), "43.0");
        assert_eq!(format_score(99.96), "100.0");
        assert_eq!(format_score(0.0), "0.0");
    }

    #[test]
    fn test_format_band_plain() {
        assert_eq!(format_band(Band::Lagging, false), "Lagging");
    }

    #[test]
    fn test_format_report_plain() {
        let (context, scores) = sample();
        let result = format_report(&context, &scores, false);
        assert!(result.starts_with("Acme Corp - GRI 2025 (Manufacturing)"));
        assert!(result.contains("Environmental    70.0"));
        assert!(result.contains("Social           35.0"));
        assert!(result.contains("Governance       15.0"));
        assert!(result.contains("Composite        43.0  Developing"));
    }

    #[test]
    fn test_format_report_unnamed() {
        let (mut context, scores) = sample();
        context.organization_name = "  ".to_string();
        context.industry = String::new();
        let result = format_report(&context, &scores, false);
        assert!(result.starts_with("(unnamed organization) - GRI 2025\n"));
    }

    #[test]
    fn test_format_breakdown_lists_every_indicator() {
        let (_, scores) = sample();
        let result = format_breakdown(&scores, false);
        assert!(result.contains("Environmental (70.0)"));
        assert!(result.contains("Scope 1 emissions"));
        assert!(result.contains("Tax transparency"));
        assert!(result.contains("+15.0"));
        // 3 pillar titles + 21 indicators
        assert_eq!(result.lines().count(), 24);
    }

    #[test]
    fn test_format_tsv() {
        let (context, scores) = sample();
        assert_eq!(
            format_tsv(&context, &scores),
            "43.0\tDeveloping\t70.0\t35.0\t15.0\tAcme Corp"
        );
    }

    #[test]
    fn test_format_json_contains_breakdown() {
        let (context, scores) = sample();
        let report = ScoredReport {
            context: &context,
            completion: SectionCompletion {
                environmental: false,
                social: false,
                governance: false,
            },
            scores: &scores,
        };
        let json = format_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["scores"]["band"], "developing");
        assert_eq!(value["context"]["organizationName"], "Acme Corp");
        assert_eq!(value["scores"]["breakdown"][0]["pillar"], "environmental");
        assert_eq!(
            value["scores"]["breakdown"][0]["indicators"][0]["indicator"],
            "scope1_emissions"
        );
    }

    #[test]
    fn test_format_scoring_config() {
        let result = format_scoring_config(&ScoringConfig::default());
        assert!(result.contains("Environmental 0.40  Social 0.30  Governance 0.30"));
        assert!(result.contains("ceiling 40"));
        assert!(result.contains(">= 80    Leading"));
        assert!(result.contains(">= 0     Lagging"));
    }
}
