// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # watchbill
//!
//! Generates a duty roster from a JSON configuration, validates it, and
//! reports the result.
//!
//! ```text
//! watchbill --config roster.json                 # console report
//! watchbill --config roster.json --export out/   # plus CSV sheets
//! watchbill --config roster.json --json          # whole run as JSON
//! watchbill --config roster.json --strict        # fail on any violation
//! ```
//!
//! Logs go to stderr. `RUST_LOG` overrides the `-v`/`-q` verbosity.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod export;
mod report;

use std::path::{Path, PathBuf};

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;
use watchbill::{RosterConfig, RosterRun};

use crate::error::CliError;
use crate::report::ConsoleReport;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(args.log_level().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    args.run()?;
    Ok(())
}

#[derive(Debug, Parser)]
#[command(
    name = "watchbill",
    version,
    about = "Generate and validate a duty roster",
    styles = clap_cargo::style::CLAP_STYLING
)]
struct Args {
    /// Path to the JSON roster configuration
    #[arg(short, long, value_name = "FILE")]
    config: PathBuf,

    /// Write the CSV sheets into this directory
    #[arg(short, long, value_name = "DIR")]
    export: Option<PathBuf>,

    /// Print the whole run as JSON instead of the console report
    #[arg(long)]
    json: bool,

    /// Exit with an error when any validation check fails
    #[arg(long)]
    strict: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<(), CliError> {
        let config: RosterConfig = load_config(&self.config)?;
        let result: RosterRun = watchbill::run(&config)?;

        if let Some(dir) = &self.export {
            let written: Vec<PathBuf> = export::write_sheets(dir, &result)?;
            info!(
                dir = %dir.display(),
                sheets = written.len(),
                "Exported roster sheets"
            );
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            print!("{}", ConsoleReport::new(&result));
        }

        if self.strict && !result.report.passed {
            return Err(CliError::ValidationFailed {
                failed: report::failed_checks(&result).join(", "),
            });
        }

        Ok(())
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

/// Reads and parses a roster configuration file.
fn load_config(path: &Path) -> Result<RosterConfig, CliError> {
    let text: String = std::fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| CliError::ParseConfig {
        path: path.display().to_string(),
        source,
    })
}
