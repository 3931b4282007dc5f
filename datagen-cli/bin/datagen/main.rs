//! Serial transmission test fixture generator
//!
//! Writes a 768-byte fixture to standard output and exits. Typical use is
//! dumping it to a file:
//!
//! ```text
//! datagen > data
//! ```

use std::process;

mod opts;

use opts::DatagenOpts;

use datagen_cli::{format_error_for_stderr, run_cli};

const PROGRAM: &str = "datagen";

fn main() -> std::io::Result<()> {
    let opts = DatagenOpts::parse();
    let config = opts.config();

    if let Err(err) = run_cli(&config, PROGRAM) {
        if let Some(message) = format_error_for_stderr(PROGRAM, config.quiet, &err) {
            eprintln!("{message}");
        }
        process::exit(1);
    }

    Ok(())
}
