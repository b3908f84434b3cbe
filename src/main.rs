use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use esg_score::output::ScoredReport;
use esg_score::DisclosureError;
use esg_score::scoring::ScoringEngine;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INVALID_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;
const EXIT_IO: i32 = 5;

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum Format {
    /// Human-readable summary
    #[default]
    Table,
    /// Full result with per-indicator breakdown
    Json,
    /// One tab-separated line
    Tsv,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a disclosure file (default if no subcommand, reading stdin)
    Score {
        /// YAML or JSON disclosure; `-` reads stdin
        #[arg(default_value = "-")]
        disclosure: String,

        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,

        /// Refuse to score when a disclosure section looks empty
        #[arg(long)]
        strict: bool,
    },
    /// Validate the scoring configuration and print the policy table
    Check,
    /// Write the built-in scoring table to the config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "esg-score")]
#[command(about = "ESG composite scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging and the per-indicator breakdown
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/esg-score/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load and validate the scoring config, exiting on any problem.
fn load_engine(config_path: Option<PathBuf>) -> ScoringEngine {
    let config = match esg_score::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    match ScoringEngine::new(config.effective_scoring()) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Scoring config errors:");
            for error in e.0 {
                eprintln!("  - {}", error);
            }
            std::process::exit(EXIT_CONFIG);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Score {
        disclosure: "-".to_string(),
        format: Format::Table,
        strict: false,
    });
    let start_time = Instant::now();
    let config_path = cli.config.map(PathBuf::from);

    match command {
        Commands::Init { force } => {
            let path = match config_path {
                Some(p) => p,
                None => match esg_score::config::get_config_path() {
                    Ok(p) => p,
                    Err(e) => {
                        eprintln!("Config error: {:#}", e);
                        std::process::exit(EXIT_CONFIG);
                    }
                },
            };
            if let Err(e) = esg_score::config::write_default_config(&path, force) {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
            println!("Wrote default scoring config to {}", path.display());
        }
        Commands::Check => {
            let engine = load_engine(config_path);
            println!("{}", esg_score::output::format_scoring_config(engine.config()));
            println!();
            println!("Scoring config OK");
        }
        Commands::Score {
            disclosure,
            format,
            strict,
        } => {
            let engine = load_engine(config_path);
            let disclosure = match esg_score::inputs::load_disclosure(&disclosure) {
                Ok(d) => d,
                Err(e) => {
                    eprintln!("Disclosure error: {:#}", e);
                    std::process::exit(EXIT_IO);
                }
            };

            let (scores, completion) = match engine.score_disclosure(&disclosure, strict) {
                Ok(result) => result,
                Err(DisclosureError::Incomplete(missing)) => {
                    eprintln!("Incomplete disclosure: no data entered for {}", missing.join(", "));
                    std::process::exit(EXIT_INVALID_INPUT);
                }
                Err(DisclosureError::Invalid(e)) => {
                    eprintln!("Invalid disclosure: {}", e);
                    std::process::exit(EXIT_INVALID_INPUT);
                }
            };

            match format {
                Format::Table => {
                    let use_colors = esg_score::output::should_use_colors();
                    println!(
                        "{}",
                        esg_score::output::format_report(&disclosure.context, &scores, use_colors)
                    );
                    if cli.verbose {
                        println!();
                        println!(
                            "{}",
                            esg_score::output::format_breakdown(&scores, use_colors)
                        );
                    }
                }
                Format::Json => {
                    let report = ScoredReport {
                        context: &disclosure.context,
                        completion,
                        scores: &scores,
                    };
                    match esg_score::output::format_json(&report) {
                        Ok(json) => println!("{}", json),
                        Err(e) => {
                            eprintln!("Failed to serialize result: {}", e);
                            std::process::exit(EXIT_IO);
                        }
                    }
                }
                Format::Tsv => {
                    println!("{}", esg_score::output::format_tsv(&disclosure.context, &scores));
                }
            }
        }
    }

    debug!(elapsed = ?start_time.elapsed(), "done");
    std::process::exit(EXIT_SUCCESS);
}
