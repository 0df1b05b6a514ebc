//! Domain layer for walletdeck.
//!
//! This module contains the core domain types for the wallet UI, independent of
//! terminal APIs or infrastructure concerns. The records here are immutable data
//! leaves; the one mutable entity in the system (the transition state) lives in
//! the application layer and is owned exclusively by the transition controller.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`card`]: Payment card record, the shared-identity anchor of the transition
//! - [`expense`]: Expense line record for the detail view's staggered list

pub mod card;
pub mod error;
pub mod expense;

pub use card::CardEntry;
pub use error::{Result, WalletdeckError};
pub use expense::ExpenseEntry;
