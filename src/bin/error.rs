use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit status for usage and configuration failures.
pub const USAGE_EXIT_CODE: u8 = 2;

/// Errors that stop `prilog` before a message is emitted.
#[derive(Debug, Error)]
pub enum CliError {
    /// The configuration file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    ReadConfig {
        /// File named by `--config`.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The configuration file is not a valid logger table.
    #[error("invalid config file {}: {source}", path.display())]
    ParseConfig {
        /// File named by `--config`.
        path: PathBuf,
        /// Underlying TOML failure.
        #[source]
        source: toml::de::Error,
    },
}
