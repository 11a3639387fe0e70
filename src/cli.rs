//! Defines the command-line interface for the application.

use clap::Parser;

/// The probe takes no arguments; clap still provides `--help` and `--version`
/// and rejects anything else as a usage error.
#[derive(Parser, Debug)]
#[command(
    name = "openfunctions-probe",
    version,
    about = "Report whether openfunctions.json exists in the current directory, and its length in bytes."
)]
pub struct Cli {}
