//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the terminal shim (`main.rs`) and the domain/ui
//! layers, implementing the event-driven architecture that powers the wallet UI:
//!
//! ```text
//! Input / Timers → Events → Event Handler → State Mutations → Actions → Side Effects
//!                               ↑                                  ↓
//!                               └───────── Timer deliveries ───────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transition coordination
//! - [`phases`]: The transition phase state machine type
//! - [`transition`]: The detail transition controller (the core)
//! - [`deck`]: Per-card render mode decisions
//! - [`reveal`]: Staggered reveal instructions for the expense list
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod deck;
pub mod handler;
pub mod phases;
pub mod reveal;
pub mod state;
pub mod transition;

pub use actions::Action;
pub use deck::CardDeckPresenter;
pub use handler::{handle_event, Event};
pub use phases::TransitionPhase;
pub use reveal::ExpenseListPresenter;
pub use state::AppState;
pub use transition::{DetailTransitionController, TimingConfig, TransitionState};
