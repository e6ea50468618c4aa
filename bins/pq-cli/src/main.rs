//! pq-cli — console front-end for the provider quality award simulation.
//!
//! Advances every award one day per keypress and redraws the ranked list.
//! With `--days` it runs a fixed number of days and exits.

mod config;
mod session;

use std::io;

use anyhow::Result;
use clap::Parser;
use pq_core::AwardKind;
use pq_sim::{OutputFormat, Simulation};
use tracing::info;

use crate::config::CliConfig;

/// Provider quality award simulator.
#[derive(Parser, Debug)]
#[command(name = "pq-cli", version, about = "Simulate daily award quality and expiration")]
struct Args {
    /// Run this many days without prompting, then exit
    #[arg(long)]
    days: Option<u64>,

    /// Award kind to simulate (repeatable; default: the full catalog)
    #[arg(long = "award", value_name = "KIND")]
    awards: Vec<AwardKind>,

    /// Output format ("text" or "json")
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Do not clear the terminal between days
    #[arg(long)]
    no_clear: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Log output format ("text" or "json")
    #[arg(long, default_value = "text")]
    log_format: String,
}

impl Args {
    /// Convert CLI args into a CliConfig.
    fn into_config(self) -> CliConfig {
        let defaults = CliConfig::default();
        let kinds = if self.awards.is_empty() {
            defaults.kinds
        } else {
            self.awards
        };

        CliConfig {
            days: self.days,
            kinds,
            format: self.format,
            clear_screen: !self.no_clear,
            log_level: self.log_level,
            log_format: self.log_format,
        }
    }
}

fn main() -> Result<()> {
    let config = Args::parse().into_config();

    init_logging(&config.log_level, &config.log_format);

    info!(
        awards = config.kinds.len(),
        format = %config.format,
        interactive = config.is_interactive(),
        "starting simulation"
    );

    let mut sim = Simulation::with_kinds(config.kinds.iter().copied());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match config.days {
        Some(days) => session::run_batch(&mut sim, days, config.format, &mut out)?,
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut status = io::stderr();
            session::run_interactive(&mut sim, &config, &mut input, &mut out, &mut status)?;
        }
    }

    let stats = sim.stats();
    info!(
        days = stats.day,
        total_quality = stats.total_quality,
        expired = stats.expired,
        at_cap = stats.at_cap,
        exhausted = stats.exhausted,
        "simulation finished"
    );
    Ok(())
}

/// Initialize tracing subscriber with the given log level and output format.
///
/// Logs go to stderr so they never interleave with the rendered list.
fn init_logging(level_str: &str, format: &str) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_str));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_level(true).with_writer(io::stderr))
            .init();
    }
}
