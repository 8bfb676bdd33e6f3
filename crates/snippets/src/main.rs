//! Command-line tool for browsing and exporting gallery snippets.
//!
//! Reads the gallery's exported JSON records and lists, prints, searches, inspects, or
//! appends them to a project file.

mod cli;
mod commands;

use anyhow::Result;
use catalog::Catalog;
use cli::{Command, DATA_ENV, USAGE, parse_args};
use env_logger::{Builder, Env};
use log::{error, info};
use std::env;
use std::io::{Write as _, stderr, stdout};
use std::process::exit;

/// Parse the command line, load the export, and run the command.
///
/// # Errors
/// Returns an error if arguments are invalid, the export cannot be loaded, or the command fails.
fn run() -> Result<()> {
    let invocation = parse_args(env::args().skip(1)).inspect_err(|_| {
        drop(writeln!(stderr(), "{USAGE}"));
    })?;
    let mut out = stdout().lock();
    if invocation.command == Command::Help {
        writeln!(out, "{USAGE}")?;
        return Ok(());
    }
    let data = invocation.data_path(env::var(DATA_ENV).ok());
    let catalog = Catalog::load(&data)?;
    info!("loaded {} snippets from {}", catalog.len(), data.display());
    commands::execute(&invocation.command, &catalog, &mut out)
}

fn main() {
    if let Err(err) = Builder::from_env(Env::default().filter_or("RUST_LOG", "warn")).try_init() {
        drop(writeln!(stderr(), "failed to initialise logging: {err}"));
    }
    if let Err(err) = run() {
        error!("{err:#}");
        exit(1);
    }
}
