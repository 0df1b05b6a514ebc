//! Filesystem path resolution for configuration and data locations.
//!
//! This module resolves the platform directories the binary reads from: the
//! config file under `~/.config/walletdeck` and the data directory (log output)
//! under `~/.local/share/walletdeck`. Tilde expansion is handled against `$HOME`.

use std::path::PathBuf;

/// Returns the configuration directory, `~/.config/walletdeck`.
///
/// Falls back to a relative `.config/walletdeck` when `$HOME` is unset.
#[must_use]
pub fn get_config_dir() -> PathBuf {
    home_dir().join(".config").join("walletdeck")
}

/// Returns the default config file path, `~/.config/walletdeck/config.toml`.
#[must_use]
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Returns the data directory for log output, `~/.local/share/walletdeck`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    home_dir().join(".local").join("share").join("walletdeck")
}

/// Expands a leading tilde against `$HOME`.
///
/// # Examples
///
/// ```
/// use walletdeck::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        home_dir().join(rest).to_string_lossy().into_owned()
    } else if path == "~" {
        home_dir().to_string_lossy().into_owned()
    } else {
        path.to_string()
    }
}

fn home_dir() -> PathBuf {
    std::env::var_os("HOME").map_or_else(|| PathBuf::from("."), PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_pass_through() {
        assert_eq!(expand_tilde("/tmp/data.json"), "/tmp/data.json");
    }

    #[test]
    fn config_path_ends_with_expected_suffix() {
        let path = get_config_path();
        assert!(path.ends_with(".config/walletdeck/config.toml"));
    }
}
