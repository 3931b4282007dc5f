//! Output handling for the datagen CLI.

use std::io::{self, Write};

use crate::config::DEFAULT_BUFFER_SIZE;
use crate::error::{Error, Result};

/// Opens a buffered writer on standard output.
///
/// Standard output is the only destination: the fixture is meant to be
/// redirected to a file or piped into a downstream tool.
pub fn open_output() -> Box<dyn Write> {
    Box::new(io::BufWriter::with_capacity(
        DEFAULT_BUFFER_SIZE,
        io::stdout(),
    ))
}

/// Writes the fixture bytes as-is, then flushes.
///
/// No framing, header or delimiter is added.
///
/// # Errors
///
/// Returns [`Error::WriteOutput`] if writing or flushing fails, for example
/// when the reading end of a pipe has been closed.
pub fn write_dataset<W: Write>(mut writer: W, bytes: &[u8]) -> Result<()> {
    writer
        .write_all(bytes)
        .and_then(|()| writer.flush())
        .map_err(|source| Error::WriteOutput { source })
}
