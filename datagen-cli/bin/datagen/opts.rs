//! Command line argument parsing for the datagen utility.

use clap::Parser;

use datagen_cli::CliConfig;

/// Serial transmission test fixture generator
///
/// Writes 768 bytes to standard output: 256 random bytes, a decreasing-jump
/// sequence and a mid-jump sequence, shuffled in 32-byte chunks.
#[derive(Debug, Parser)]
#[command(
    name = "datagen",
    version = "0.1.0",
    about = "Write a serial transmission test fixture to stdout",
    long_about = "datagen writes 768 raw bytes to standard output: 256 random bytes, \
                 the sequence 0,255,1,254,...,127,128 and the sequence \
                 0,128,1,129,...,127,255, concatenated and shuffled in 32-byte \
                 chunks. Redirect the output to a file, e.g. 'datagen > data'."
)]
pub struct DatagenOpts {
    /// Seed the random source for a reproducible fixture
    #[arg(short = 's', long = "seed", value_name = "SEED")]
    seed: Option<u64>,

    /// Verbose mode (report the chunk order on stderr)
    #[arg(short = 'v', long = "verbose", conflicts_with = "quiet")]
    verbose: bool,

    /// Quiet mode (suppress the error message on failure)
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose", action = clap::ArgAction::Count)]
    quiet: u8,
}

impl DatagenOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build CLI configuration from the parsed options
    pub fn config(&self) -> CliConfig {
        CliConfig {
            seed: self.seed,
            verbose: self.verbose,
            quiet: self.quiet,
        }
    }
}
