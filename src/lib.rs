//! Walletdeck: a terminal wallet dashboard with an animated card detail overlay.
//!
//! The UI shows a balance summary, a horizontal stack of payment cards, and an
//! expandable detail view revealing a staggered list of expense entries. The
//! interesting part is the card expansion state machine: which card is selected,
//! whether the detail overlay is up, whether its content has faded in, and the
//! shared visual identity that makes the small deck card and the large detail
//! image read as one continuous object morphing rather than a cut.
//!
//! # Architecture
//!
//! The crate follows a layered architecture:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shim (main.rs)                            │  ← event loop, timer pump
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← state machine
//! │  - Detail transition controller (the core)          │
//! │  - Deck / expense list presenters                   │
//! │  - Event handling, action dispatching               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Data Layer    │   │ Scheduler     │
//! │ (ui/)         │   │ (data/)       │   │ (scheduler/)  │
//! │ - Rendering   │   │ - Sample set  │   │ - Timer queue │
//! │ - Theming     │   │ - JSON load   │   │ - Tokens      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure, Domain, Observability              │
//! │  - Platform paths, error types, card/expense models │
//! │  - Tracing to a log file                            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Timing model
//!
//! All scheduling is cooperative and single-threaded: `open` and `close` mutate
//! state synchronously and return timer requests; the main loop holds the one
//! deadline queue and feeds due tokens back as events. The four durations
//! (`settle`, `list`, `close`, `step`) are configuration, so tests collapse
//! them to zero and assert ordering instead of wall-clock timing.
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//! use walletdeck::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let now = Instant::now();
//! let (should_render, actions) = handle_event(&mut state, &Event::OpenFocused, now)?;
//! assert!(should_render);
//! assert_eq!(actions.len(), 2); // settle + list reveal timers
//! # Ok::<(), walletdeck::WalletdeckError>(())
//! ```

pub mod app;
pub mod data;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod scheduler;
pub mod ui;

pub use app::{
    handle_event, Action, AppState, CardDeckPresenter, DetailTransitionController, Event,
    ExpenseListPresenter, TimingConfig, TransitionPhase, TransitionState,
};
pub use data::SampleData;
pub use domain::{CardEntry, ExpenseEntry, Result, WalletdeckError};
pub use scheduler::{TimerKind, TimerQueue, TimerRequest, TimerToken};
pub use ui::Theme;

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Application configuration.
///
/// Loaded from `~/.config/walletdeck/config.toml` when present, otherwise
/// defaults. The four timing fields are the named animation durations of the
/// transition sequence, injectable so tests can zero them.
///
/// # Example
///
/// ```toml
/// settle_delay_ms = 16
/// list_delay_ms = 120
/// close_delay_ms = 60
/// step_ms = 100
/// theme = "midnight"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Delay before the detail content fades in, in milliseconds.
    pub settle_delay_ms: u64,

    /// Delay before the expense list starts revealing, in milliseconds.
    pub list_delay_ms: u64,

    /// Delay before a closing overlay is discarded, in milliseconds.
    pub close_delay_ms: u64,

    /// Per-row stagger step for the expense list, in milliseconds.
    pub step_ms: u64,

    /// Built-in theme name (`midnight`, `daybreak`). Ignored if `theme_file`
    /// is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme`.
    pub theme_file: Option<String>,

    /// Path to a JSON file overriding the built-in sample data.
    pub data_file: Option<String>,

    /// Tracing filter level (`trace`, `debug`, `info`, `warn`, `error`).
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let timing = TimingConfig::default();
        Self {
            settle_delay_ms: timing.settle_delay.as_millis() as u64,
            list_delay_ms: timing.list_delay.as_millis() as u64,
            close_delay_ms: timing.close_delay.as_millis() as u64,
            step_ms: timing.step_duration.as_millis() as u64,
            theme_name: None,
            theme_file: None,
            data_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(&path).map_err(|e| {
            WalletdeckError::Config(format!("failed to read {}: {e}", path.as_ref().display()))
        })?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Loads the config file from the default location, falling back to
    /// defaults when it does not exist.
    #[must_use]
    pub fn load() -> Self {
        let path = infrastructure::get_config_path();
        if path.exists() {
            Self::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(path = %path.display(), error = %e, "config file invalid, using defaults");
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// The transition timing durations derived from this configuration.
    #[must_use]
    pub fn timing(&self) -> TimingConfig {
        TimingConfig {
            settle_delay: Duration::from_millis(self.settle_delay_ms),
            list_delay: Duration::from_millis(self.list_delay_ms),
            close_delay: Duration::from_millis(self.close_delay_ms),
            step_duration: Duration::from_millis(self.step_ms),
        }
    }
}

/// Builds the initial application state from configuration.
///
/// Resolves the theme (file, then built-in name, then default) and the data set
/// (override file, then built-in), logging and falling back on failures — a bad
/// theme or data file must not keep the UI from coming up.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing walletdeck");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |name| {
                Theme::from_name(name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |file| {
            Theme::from_file(infrastructure::expand_tilde(file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %file, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        },
    );

    let data = config.data_file.as_ref().map_or_else(SampleData::builtin, |file| {
        SampleData::from_file(infrastructure::expand_tilde(file)).unwrap_or_else(|e| {
            tracing::debug!(data_file = %file, error = %e, "failed to load data file, using built-in data");
            SampleData::builtin()
        })
    });

    AppState::new(
        data.profile_name,
        data.balance,
        data.cards,
        data.expenses,
        config.timing(),
        theme,
    )
}
