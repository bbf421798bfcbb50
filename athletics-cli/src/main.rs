//! Athletics Tracker CLI Application
//!
//! This is the command-line front end for the athletics scoring library.
//! It uses athletics-scoring and adds:
//! - Result entry (seconds, minutes:seconds, or meters)
//! - Performance summary with total points (text or JSON)
//! - Per-event progression chart
//! - TOML configuration for file location and display options

use anyhow::{Context, Result};
use athletics_scoring::types::is_valid_performance;
use athletics_scoring::{score, Catalog, PerformanceSummary};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod input;
mod report;
mod session;

use config::AppConfig;
use session::Session;

/// Athletics Tracker - Record results and convert them to points
#[derive(Parser, Debug)]
#[command(name = "athletics")]
#[command(about = "Record track and field results and score them", long_about = None)]
#[command(version)]
struct Args {
    /// Results file (overrides storage.results_file from the config)
    #[arg(short, long, value_name = "FILE", global = true)]
    results: Option<PathBuf>,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the events and their scoring coefficients
    Events,

    /// Record a result and save it
    Add {
        /// Event name, e.g. 100m or LongJump
        event: String,
        /// Seconds (11.84 or 3:45.20) for timed events, meters for measured ones
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Show the best result for an event and its points
    Best {
        event: String,
    },

    /// Compute points for a performance without recording it
    Score {
        event: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Show best results and points for every event
    Summary {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the progression of results for an event
    Progress {
        event: String,
    },
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Athletics Tracker CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using scoring library v{}", athletics_scoring::VERSION);

    let config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => AppConfig::default(),
    };
    let results_path = args
        .results
        .clone()
        .unwrap_or_else(|| config.storage.results_file.clone());

    run(args.command, &config, results_path)
}

fn run(command: Command, config: &AppConfig, results_path: PathBuf) -> Result<()> {
    let catalog = Catalog::standard();
    let display = &config.display;

    match command {
        Command::Events => {
            print!("{}", report::render_catalog(&catalog));
        }

        Command::Add { event, value } => {
            let definition = catalog.lookup(&event)?;
            let value = input::parse_performance(&value, definition.kind)?;

            let mut session = Session::open(&results_path)?;
            session
                .record(&event, value)
                .with_context(|| format!("Could not add result to {}", event))?;
            session.close()?;

            println!(
                "Result {:.2} {} added to {}",
                value,
                definition.kind.unit(),
                event
            );
        }

        Command::Best { event } => {
            let session = Session::open(&results_path)?;
            let definition = catalog.lookup(&event)?;
            match session.store().best_score(&event)? {
                Some((best, points)) => {
                    let shown = report::format_value(&event, definition.kind, best, display);
                    if definition.is_scored() {
                        println!("{} - Best: {}, Points: {}", event, shown, points);
                    } else {
                        println!("{} - Best: {}, Points: custom (unscored)", event, shown);
                    }
                }
                None => println!("No results available for {}", event),
            }
        }

        Command::Score { event, value } => {
            let definition = catalog.lookup(&event)?;
            let value = input::parse_performance(&value, definition.kind)?;
            if !is_valid_performance(value) {
                anyhow::bail!(
                    "Invalid value for {}: {} (expected a finite, non-negative number)",
                    event,
                    value
                );
            }
            if definition.is_scored() {
                println!("{} points", score(definition, value));
            } else {
                println!("{} is a combined event and is not scored", event);
            }
        }

        Command::Summary { json } => {
            let session = Session::open(&results_path)?;
            let summary = PerformanceSummary::from_store(session.store());
            if json {
                let report = report::SummaryReport::new(&summary, chrono::Local::now());
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Performance Summary ({})", chrono::Local::now().format("%Y-%m-%d %H:%M"));
                println!("{}", report::render_summary(&summary, display));
            }
        }

        Command::Progress { event } => {
            let session = Session::open(&results_path)?;
            let definition = catalog.lookup(&event)?;
            let values = session.store().results(&event)?;
            if values.is_empty() {
                println!("No results available for {}", event);
            } else {
                print!("{}", report::render_progress(definition, values, display));
            }
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
