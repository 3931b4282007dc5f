//! Fixture generation and CLI orchestration.

use std::io::{self, Write};

use datagen_core::{generate, is_chunk_permutation, Dataset};

use crate::config::CliConfig;
use crate::error::Result;
use crate::io::{open_output, write_dataset};

/// Prints the seed, chunk order and a structural self-check to stderr.
fn report_dataset(dataset: &Dataset, config: &CliConfig, program: &str) -> Result<()> {
    match config.seed {
        Some(seed) => eprintln!("{program}: seed {seed}"),
        None => eprintln!("{program}: seed from system entropy"),
    }

    let order: Vec<String> = dataset
        .order()
        .as_slice()
        .iter()
        .map(ToString::to_string)
        .collect();
    eprintln!("{program}: chunk order {}", order.join(","));

    let unshuffled = dataset.unshuffled()?;
    let intact = is_chunk_permutation(dataset.as_bytes(), &unshuffled, dataset.chunk_size());
    eprintln!(
        "{program}: {} chunks of {} bytes, permutation {}",
        dataset.order().len(),
        dataset.chunk_size(),
        if intact { "ok" } else { "BROKEN" }
    );
    Ok(())
}

/// Generates one fixture and writes it to `writer`.
///
/// This is the whole program: generate, concatenate, chunk, shuffle, flatten,
/// then a single write.
///
/// # Parameters
///
/// * `writer` - Destination for the raw fixture bytes
/// * `config` - Seed and verbosity settings
/// * `program` - Program name used as a prefix for diagnostics
///
/// # Returns
///
/// The dataset that was written.
///
/// # Errors
///
/// Returns an error if the fixture cannot be assembled or if writing it fails.
pub fn generate_to<W: Write>(writer: W, config: &CliConfig, program: &str) -> Result<Dataset> {
    let mut source = config.random_source();
    let dataset = generate(&mut source)?;

    if config.verbose {
        report_dataset(&dataset, config, program)?;
    }

    write_dataset(writer, dataset.as_bytes())?;

    if config.verbose {
        eprintln!("{program}: wrote {} bytes", dataset.len());
    }

    Ok(dataset)
}

/// Runs the CLI: writes one fixture to standard output.
pub fn run_cli(config: &CliConfig, program: &str) -> io::Result<()> {
    generate_to(open_output(), config, program)?;
    Ok(())
}
