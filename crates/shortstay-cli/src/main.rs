//! `shortstay` CLI — keep a plan of stays within the Schengen 90/180-day rule.
//!
//! ## Usage
//!
//! ```sh
//! # Would this stay fit? (nothing is saved)
//! shortstay check --name Lisbon --start 2026-03-01 --end 2026-04-29
//!
//! # Add it to the plan
//! shortstay add --name Lisbon --start 2026-03-01 --end 2026-04-29
//!
//! # Show the plan and the total day count
//! shortstay list
//!
//! # Remove the stay at position 0
//! shortstay remove 0
//!
//! # Use another data file, or a TOML config
//! shortstay --data trips.json list
//! shortstay --config shortstay.toml list
//! ```
//!
//! Rejected stays print the reason on stderr and exit non-zero.

mod config;
mod messages;
mod session;
mod store;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use shortstay_engine::{Outcome, Plan, Stay};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::messages::{notice, Catalog};
use crate::session::Session;
use crate::store::JsonStore;

#[derive(Parser)]
#[command(
    name = "shortstay",
    version,
    about = "Plan stays under the Schengen 90/180-day rule"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Stay data file (overrides `data_file` from the config)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List planned stays with their day counts
    List,
    /// Check whether a stay could be added, without adding it
    Check(StayArgs),
    /// Add a stay to the plan
    Add(StayArgs),
    /// Remove the stay at a position shown by `list`
    Remove {
        /// Zero-based position
        position: usize,
    },
}

#[derive(Args)]
struct StayArgs {
    /// Label for the stay
    #[arg(long)]
    name: String,
    /// First day, YYYY-MM-DD
    #[arg(long)]
    start: NaiveDate,
    /// Last day, YYYY-MM-DD
    #[arg(long)]
    end: NaiveDate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config =
        Config::load_or_default(cli.config.as_deref()).context("Failed to load config")?;
    init_tracing(&config.log_level);

    let data_file = cli.data.unwrap_or_else(|| config.data_file.clone());
    debug!(data_file = %data_file.display(), "opening session");
    let catalog = Catalog::new(config.messages);
    let mut session =
        Session::open(JsonStore::new(data_file)).context("Failed to open stay data")?;

    match cli.command {
        Commands::List => print_plan(session.plan()),
        Commands::Check(args) => {
            let stay = build_stay(&args, &catalog)?;
            let outcome = session.check(&stay);
            if !outcome.success {
                return Err(rejection(&catalog, &outcome));
            }
            println!("{}", catalog.format(notice::OK, &[]));
        }
        Commands::Add(args) => {
            let stay = build_stay(&args, &catalog)?;
            let outcome = session.add(stay).context("Failed to save stay data")?;
            if !outcome.success {
                return Err(rejection(&catalog, &outcome));
            }
            println!("{}", catalog.format(notice::ADDED, &outcome.params));
        }
        Commands::Remove { position } => {
            let removed = session
                .remove(position)
                .context("Failed to save stay data")?;
            match removed {
                Some(stay) => println!(
                    "{}",
                    catalog.format(notice::REMOVED, &[stay.name().to_string()])
                ),
                None => {
                    return Err(anyhow!(
                        catalog.format(notice::NO_STAY, &[position.to_string()])
                    ))
                }
            }
        }
    }

    Ok(())
}

/// Structured logging to stderr. `RUST_LOG` wins over the configured level.
fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Validate the input the way a form would, then construct the stay.
fn build_stay(args: &StayArgs, catalog: &Catalog) -> Result<Stay> {
    if args.name.trim().is_empty() {
        anyhow::bail!(catalog.format(notice::EMPTY_NAME, &[]));
    }
    Stay::new(args.name.trim(), args.start, args.end)
        .map_err(|err| rejection(catalog, &Outcome::from(err)))
}

fn rejection(catalog: &Catalog, outcome: &Outcome) -> anyhow::Error {
    anyhow!(catalog.render(outcome))
}

fn print_plan(plan: &Plan) {
    if plan.is_empty() {
        println!("No stays planned");
        return;
    }
    println!(
        "{:>3}  {:<24}  {:<10}  {:<10}  {:>4}",
        "#", "Stay", "Start", "End", "Days"
    );
    for (i, stay) in plan.stays().iter().enumerate() {
        println!(
            "{:>3}  {:<24}  {:<10}  {:<10}  {:>4}",
            i,
            stay.name(),
            stay.start_date(),
            stay.end_date(),
            stay.length()
        );
    }
    println!("Total: {} days", plan.days());
}
