//! User interface rendering layer.
//!
//! This module turns view models into terminal output through composable
//! ratatui components. The rendering model is declarative:
//!
//! ```text
//! AppState → compute_viewmodel → UiViewModel → render → terminal frame
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities
//! - [`theme`]: Color schemes, built-in and TOML-loaded
//! - [`terminal`]: Raw-mode terminal setup and restore
//! - [`keymap`]: Keyboard-to-event mapping

pub mod components;
pub mod helpers;
pub mod keymap;
pub mod renderer;
pub mod terminal;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use terminal::{restore_terminal, setup_terminal, AppTerminal};
pub use theme::Theme;
pub use viewmodel::{
    BalanceInfo, CardRenderMode, CardSlot, DetailViewModel, ExpenseRow, HeaderInfo,
    RevealInstruction, UiViewModel,
};
