//! Shared functionality behind the `datagen` command-line tool.
//!
//! The binary only parses arguments; building the fixture, writing it to
//! standard output and reporting failures lives here so it can be tested
//! against in-memory writers.

mod config;
mod error;
mod io;
mod process;


pub use config::{CliConfig, DEFAULT_BUFFER_SIZE};
pub use error::{format_error_for_stderr, Error, Result};
pub use io::{open_output, write_dataset};
pub use process::{generate_to, run_cli};
