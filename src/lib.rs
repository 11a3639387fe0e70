//! Core library for openfunctions-probe.
//!
//! Checks whether `openfunctions.json` exists in the current working
//! directory and reports its length in bytes. The file contents are never
//! interpreted.

pub mod cli;
pub mod error;
pub mod probe;

use crate::cli::Cli;
use crate::probe::probe_working_dir;
use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};

pub fn run() -> anyhow::Result<()> {
    // Initialize the logger. This will be configured by the RUST_LOG environment variable.
    env_logger::init();

    let Cli {} = Cli::parse();

    let probe = probe_working_dir()?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{probe}").context("Failed to write to stdout")?;
    Ok(())
}
