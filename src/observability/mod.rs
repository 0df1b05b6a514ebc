//! Structured logging for the wallet UI.
//!
//! The crate instruments state transitions and event handling with `tracing`
//! spans and events. Because stdout belongs to the terminal UI, the subscriber
//! writes to a log file under the data directory (`~/.local/share/walletdeck`).
//!
//! # Configuration
//!
//! Filter level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in the config file
//! 3. Default: `"info"`

mod init;

pub use init::init_tracing;
