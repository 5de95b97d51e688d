//! Error types for `conlog`.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Line formatting
//! itself never fails; errors exist only at the crate's edges.

use thiserror::Error;

/// Errors from config loading and logger installation.
#[derive(Debug, Error)]
pub enum ConlogError {
    /// Configuration error (unreadable config file).
    #[error("configuration error: {0}")]
    Config(String),

    /// TOML deserialization error.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A global logger was already installed.
    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}
