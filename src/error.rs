//! Error types for stylesync

use thiserror::Error;

/// Result type alias for stylesync operations
pub type Result<T> = std::result::Result<T, Error>;

/// Style synchronization error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid rules file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid pattern for rule {rule}: {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("No such block: {0}")]
    UnknownBlock(String),

    #[error("Matcher failed: {0}")]
    Matcher(String),
}
