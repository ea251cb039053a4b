use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};

use fwt_event_matcher::config::Config;
use fwt_event_matcher::logging;
use fwt_event_matcher::matching::{
    extract_location_info, extract_year_from_name, find_historical_matches,
    group_results_by_location, is_main_series, load_results, main_series_results,
};

#[derive(Parser)]
#[command(name = "fwt_event_matcher")]
#[command(about = "Locate freeride events and match them across seasons")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to a TOML config file (defaults to ./matcher.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the location of one or more event names
    Locate {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Check historical candidates against a current event
    Match {
        current: String,
        #[arg(required = true)]
        candidates: Vec<String>,
    },
    /// Group an athlete's results (JSON array) by recurring competition
    Group {
        #[arg(long)]
        input: PathBuf,
        /// Keep only main tour results
        #[arg(long)]
        main_series: bool,
    },
    /// Print the first 20xx year in an event name (0 if none)
    Year { name: String },
    /// Print whether an event belongs to the main tour
    Series { name: String },
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    logging::init_logging(&config.logging);
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Locate { names } => {
            for name in &names {
                let info = extract_location_info(name);
                println!("{}", serde_json::to_string(&info)?);
            }
        }
        Commands::Match { current, candidates } => {
            let matcher = config.matcher();
            let matches = find_historical_matches(&matcher, &current, &candidates);
            info!(
                current = %current,
                candidates = candidates.len(),
                matched = matches.iter().filter(|m| m.is_match).count(),
                "historical matching finished"
            );
            for m in &matches {
                println!("{}", serde_json::to_string(m)?);
            }
        }
        Commands::Group { input, main_series } => {
            let mut results = load_results(&input)
                .with_context(|| format!("failed to load results from {}", input.display()))?;
            if main_series {
                results = main_series_results(&results);
            }

            let groups = group_results_by_location(&config.matcher(), &results);
            info!(results = results.len(), groups = groups.len(), "results grouped");
            println!("{}", serde_json::to_string_pretty(&groups)?);
        }
        Commands::Year { name } => {
            println!("{}", extract_year_from_name(&name));
        }
        Commands::Series { name } => {
            println!("{}", is_main_series(&name));
        }
    }

    Ok(())
}
