//! Error types for the bashmenu binary

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the menu program.
///
/// Only `ConfigRead` is fatal; a `Spawn` failure is reported and the
/// interactive loop keeps running. Out-of-range and non-numeric menu
/// choices are ordinary control flow in the loop, not errors.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("cannot read commands file '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to run '{shell}': {source}")]
    Spawn {
        shell: String,
        #[source]
        source: io::Error,
    },
}
