//! Error types for datagen CLI operations.

use std::io;

use thiserror::Error;

/// Main error type for datagen CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Writing the fixture to the output failed
    #[error("write error: {source}")]
    WriteOutput {
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The fixture could not be assembled
    #[error("{0}")]
    Generate(#[from] datagen_core::Error),
}

/// Specialized `Result` type for datagen CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match &err {
            // Preserve the original error kind
            Error::WriteOutput { source } => io::Error::new(source.kind(), err),
            Error::Generate(_) => io::Error::new(io::ErrorKind::InvalidData, err),
        }
    }
}

/// Formats an error message for stderr, respecting `-q`.
///
/// # Parameters
///
/// - `program`: Program name prefix to use in error output (e.g. `"datagen"`).
/// - `quiet`: Quiet level (as counted by `-q` occurrences).
/// - `err`: The I/O error returned by the CLI runner.
///
/// # Returns
///
/// Returns `None` when the message should be suppressed by `quiet`,
/// otherwise returns a formatted single-line message suitable for stderr.
pub fn format_error_for_stderr(program: &str, quiet: u8, err: &io::Error) -> Option<String> {
    if quiet >= 1 {
        return None;
    }

    Some(format!("{program}: {err}"))
}
