//! Error types for walletdeck.
//!
//! This module defines the centralized error type [`WalletdeckError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All errors
//! are implemented using the `thiserror` crate for automatic `Error` trait
//! implementation.
//!
//! The transition state machine itself has no recoverable-error domain: `open`,
//! `close`, and timer deliveries cannot fail. Errors only arise at the edges —
//! loading configuration, themes, or sample data, and driving the terminal.

use thiserror::Error;

/// The main error type for walletdeck operations.
///
/// Consolidates all error conditions that can occur outside the state machine:
/// configuration parsing, theme loading, sample data files, and terminal I/O.
/// Variants wrapping external errors use `#[from]` for automatic conversion.
#[derive(Debug, Error)]
pub enum WalletdeckError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when the config file cannot be parsed or contains malformed values.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing or application failed.
    ///
    /// Occurs when a theme file cannot be parsed or names an unknown built-in.
    /// The string contains a description of what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Sample data file could not be parsed.
    ///
    /// Automatically converts from `serde_json::Error` when loading a data
    /// override file.
    #[error("Data error: {0}")]
    Data(#[from] serde_json::Error),

    /// TOML parsing failed (config or theme files).
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Terminal setup, drawing, or restore failed.
    ///
    /// The string contains details from the underlying backend error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// A specialized `Result` type for walletdeck operations.
///
/// This is a type alias for `std::result::Result<T, WalletdeckError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, WalletdeckError>;
