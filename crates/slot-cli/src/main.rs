//! `slots` CLI — resolve bookable time slots from a JSON store file.
//!
//! ## Usage
//!
//! ```sh
//! # Bookable slots for one date (business default interval)
//! slots resolve --store store.json --business 1 --date 2026-03-16
//!
//! # Hourly slots for a week
//! slots range --store store.json --business 1 --from 2026-03-16 --to 2026-03-22 --interval 60
//!
//! # Closed, fully booked or open?
//! slots status --store store.json --business 1 --date 2026-03-17
//!
//! # Does 10:00-11:00 clash with anything for staff 1 and 2?
//! slots check --store store.json --date 2026-03-16 --range 600-660 --resource 1 --resource 2
//!
//! # Time selector list at 30 minutes
//! slots times --interval 30
//! ```
//!
//! Logs go to stderr; set `RUST_LOG` or pass `--verbose` for more detail.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde_json::json;
use slot_engine::{
    array_time, check_break_time, check_time, check_time_all, BusinessId, InMemoryStore,
    SlotScheduler, TimeRange,
};
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "slots", version, about = "Bookable time-slot resolver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List bookable slots for one date
    Resolve {
        /// JSON store file
        #[arg(short, long)]
        store: String,
        #[arg(short, long)]
        business: BusinessId,
        /// Date as YYYY-MM-DD
        #[arg(short, long)]
        date: NaiveDate,
        /// Slot length in minutes (business default if omitted)
        #[arg(short, long)]
        interval: Option<u32>,
    },
    /// List bookable slots for every date in an inclusive range
    Range {
        #[arg(short, long)]
        store: String,
        #[arg(short, long)]
        business: BusinessId,
        #[arg(long)]
        from: NaiveDate,
        #[arg(long)]
        to: NaiveDate,
        #[arg(short, long)]
        interval: Option<u32>,
    },
    /// Report whether a date is closed, fully booked or open
    Status {
        #[arg(short, long)]
        store: String,
        #[arg(short, long)]
        business: BusinessId,
        #[arg(short, long)]
        date: NaiveDate,
        #[arg(short, long)]
        interval: Option<u32>,
    },
    /// Check a start-end minute range against appointments and breaks
    Check {
        #[arg(short, long)]
        store: String,
        #[arg(short, long)]
        date: NaiveDate,
        /// Range as START-END in minutes, e.g. 600-660
        #[arg(short, long)]
        range: TimeRange,
        /// Resource (business) ids; every one must be free
        #[arg(long = "resource", required = true)]
        resources: Vec<BusinessId>,
    },
    /// Print the time selector list
    Times {
        #[arg(short, long, default_value_t = 15)]
        interval: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = match cli.command {
        Commands::Resolve {
            store,
            business,
            date,
            interval,
        } => {
            let store = load_store(&store)?;
            let slots = SlotScheduler::from_store(&store)
                .resolve_bookable_slots(business, date, interval)
                .with_context(|| format!("Failed to resolve slots for business {}", business))?;
            serde_json::to_value(slots)?
        }
        Commands::Range {
            store,
            business,
            from,
            to,
            interval,
        } => {
            let store = load_store(&store)?;
            let days = SlotScheduler::from_store(&store)
                .resolve_range(business, from, to, interval)
                .with_context(|| format!("Failed to resolve slots for business {}", business))?;
            serde_json::to_value(days)?
        }
        Commands::Status {
            store,
            business,
            date,
            interval,
        } => {
            let store = load_store(&store)?;
            let status = SlotScheduler::from_store(&store)
                .day_status(business, date, interval)
                .with_context(|| format!("Failed to resolve status for business {}", business))?;
            serde_json::to_value(status)?
        }
        Commands::Check {
            store,
            date,
            range,
            resources,
        } => {
            let store = load_store(&store)?;
            let per_resource: Vec<_> = resources
                .iter()
                .map(|&id| {
                    json!({
                        "resource": id,
                        "conflict": check_time(&store, id, date, &range),
                        "breaks": check_break_time(&store, id, date, &range),
                    })
                })
                .collect();
            json!({
                "range": range.to_string(),
                "available": check_time_all(&store, &resources, date, &range),
                "resources": per_resource,
            })
        }
        Commands::Times { interval } => serde_json::to_value(array_time(interval)?)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

fn load_store(path: &str) -> Result<InMemoryStore> {
    let json =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?;
    let store = InMemoryStore::from_json(&json)
        .with_context(|| format!("Failed to parse store file: {}", path))?;
    debug!(path, "loaded store");
    Ok(store)
}
