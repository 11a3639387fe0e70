//! Defines custom error types for the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type returned when the manifest cannot be probed.
///
/// A missing manifest is not an error; see [`crate::probe::Probe::NotFound`].
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Failed to read '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
