//! Gymdesk Reporter
//!
//! Evaluates a snapshot exported from the data store for a given day and
//! prints the requested view as JSON.
//!
//! # Commands
//!
//! - `gymdesk-reporter <snapshot> dashboard`
//! - `gymdesk-reporter <snapshot> notifications [--client <id>]`
//! - `gymdesk-reporter <snapshot> reports [--months <n>]`
//! - `gymdesk-reporter <snapshot> portal --client <id>`

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use gymdesk_shared::types::ClientId;
use gymdesk_shared::{AppConfig, LoggingConfig};

mod report;

/// Gymdesk snapshot reporter
#[derive(Parser)]
#[command(name = "gymdesk-reporter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Snapshot file exported from the data store (JSON)
    snapshot: PathBuf,

    /// Evaluation day (YYYY-MM-DD), defaults to the local date
    #[arg(long, global = true, env = "GYMDESK_TODAY")]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Admin dashboard metrics
    Dashboard,

    /// Derived notifications, for staff or for one student
    Notifications {
        /// Scope to this student's records
        #[arg(long)]
        client: Option<ClientId>,
    },

    /// Revenue, client status and payment punctuality reports
    Reports {
        /// Trailing months of revenue to include
        #[arg(long, default_value_t = 12)]
        months: u32,
    },

    /// Student portal view
    Portal {
        /// Student to show
        #[arg(long)]
        client: ClientId,
    },
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    // Logs go to stderr; stdout carries the report.
    tracing_subscriber::registry()
        .with(filter)
        .with(
            logging
                .json
                .then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)),
        )
        .with(
            (!logging.json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    let cli = Cli::parse();
    let today = cli
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let text = std::fs::read_to_string(&cli.snapshot)
        .with_context(|| format!("Failed to read {}", cli.snapshot.display()))?;
    let snapshot = report::load_snapshot(&text)?;
    info!(
        clients = snapshot.clients.len(),
        enrollments = snapshot.enrollments.len(),
        payments = snapshot.payments.len(),
        %today,
        "Snapshot loaded"
    );

    let output = report::render(&cli.command.into(), &snapshot, today, &config.billing)?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

impl From<Command> for report::View {
    fn from(command: Command) -> Self {
        match command {
            Command::Dashboard => Self::Dashboard,
            Command::Notifications { client } => Self::Notifications { client },
            Command::Reports { months } => Self::Reports { months },
            Command::Portal { client } => Self::Portal { client },
        }
    }
}
