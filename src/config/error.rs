//! Errors raised while loading service or repository configuration.

use thiserror::Error;

/// Startup configuration failures. The service refuses to start on any of
/// these.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Layered settings could not be loaded.
    #[error("configuration error: {message}")]
    Load {
        /// Details from ortho-config.
        message: String,
    },

    /// A setting holds a value the service cannot use.
    #[error("invalid configuration: {message}")]
    Invalid {
        /// Which setting is wrong and why.
        message: String,
    },

    /// The repository settings file does not exist.
    #[error("file does not exist: {path}")]
    MissingFile {
        /// Path that was looked up.
        path: String,
    },

    /// The repository settings file could not be read.
    #[error("failed to read {path}: {message}")]
    Io {
        /// Path that was read.
        path: String,
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The repository settings file is not valid TOML for this service.
    #[error("failed to parse repository settings: {message}")]
    Parse {
        /// Parser detail.
        message: String,
    },
}
