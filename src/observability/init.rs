//! Tracing initialization and subscriber setup.
//!
//! Configures the tracing subscriber with a file-backed writer: the terminal UI
//! owns stdout, so log lines go to `walletdeck.log` in the data directory. The
//! filter level comes from the `RUST_LOG` environment variable when set, falling
//! back to the configured `trace_level`.

use std::sync::Arc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::infrastructure::paths::get_data_dir;
use crate::Config;

/// Initializes the tracing subscriber with file output.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if the directory or log file cannot be created
///   (observability is optional; the UI must still come up)
/// - Idempotent: safe to call multiple times, only the first call takes effect
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let log_path = data_dir.join("walletdeck.log");
    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
    else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Arc::new(log_file)).with_ansi(false))
        .try_init();
}
