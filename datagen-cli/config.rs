//! Configuration types for the datagen CLI.

use datagen_core::RngSource;

/// Default buffer size for the stdout writer
pub const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;

/// Configuration for a CLI run
///
/// None of these settings changes the layout of the fixture; they only
/// select the random seed and how much is reported on stderr.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Seed for a reproducible fixture, or `None` for OS entropy
    pub seed: Option<u64>,
    /// Verbose output
    pub verbose: bool,
    /// Quiet level (suppress the error diagnostic when non-zero)
    pub quiet: u8,
}

impl CliConfig {
    /// Builds the random source selected by this configuration.
    pub fn random_source(&self) -> RngSource {
        match self.seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_entropy(),
        }
    }
}
