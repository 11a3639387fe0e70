//! Existence check and byte count for the `openfunctions.json` manifest.

use crate::error::ProbeError;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// File name probed relative to the working directory.
pub const MANIFEST_FILE_NAME: &str = "openfunctions.json";

/// Outcome of probing the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    NotFound,
    Found { length: u64 },
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Probe::NotFound => write!(f, "{MANIFEST_FILE_NAME} not found"),
            Probe::Found { length } => {
                write!(f, "{MANIFEST_FILE_NAME} found. length:  {length}")
            }
        }
    }
}

/// Probes `openfunctions.json` relative to the working directory.
///
/// The path stays relative, so a working directory that no longer exists
/// reads as a missing manifest rather than an error.
pub fn probe_working_dir() -> Result<Probe, ProbeError> {
    probe_path(Path::new(MANIFEST_FILE_NAME))
}

/// Probes `openfunctions.json` inside `dir`.
pub fn probe_manifest(dir: &Path) -> Result<Probe, ProbeError> {
    probe_path(&dir.join(MANIFEST_FILE_NAME))
}

/// Reads `path` in full and reports its byte length.
///
/// The read doubles as the existence check: a `NotFound` failure is the
/// "missing" outcome, so there is no window between checking and reading.
/// Any other failure (a directory, missing permissions) is an error.
pub fn probe_path(path: &Path) -> Result<Probe, ProbeError> {
    log::debug!("Probing {}", path.display());

    let probe = match fs::read(path) {
        Ok(contents) => Probe::Found {
            length: contents.len() as u64,
        },
        Err(err) if err.kind() == io::ErrorKind::NotFound => Probe::NotFound,
        Err(source) => {
            return Err(ProbeError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    log::info!("{}: {:?}", path.display(), probe);
    Ok(probe)
}
