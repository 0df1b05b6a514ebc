//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer; they contain no business logic, only display-ready data. In
//! particular they carry the two outputs the transition machinery exists to
//! produce: per-card render modes for the deck and per-row reveal instructions
//! for the expense list.

use crate::domain::{CardEntry, ExpenseEntry};

/// Complete UI view model for one render pass.
///
/// Computed from a single state snapshot, so a frame can never observe a torn
/// transition (e.g. a suppressed deck slot without its detail counterpart).
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Greeting and profile badge for the top bar.
    pub header: HeaderInfo,

    /// Total balance summary.
    pub balance: BalanceInfo,

    /// One slot per card in deck order.
    pub deck: Vec<CardSlot>,

    /// Detail overlay, present iff the overlay is visible.
    pub detail: Option<DetailViewModel>,

    /// Whether the home chrome is dimmed behind the overlay.
    pub home_dimmed: bool,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Welcome line (e.g. "Welcome Back,").
    pub greeting: String,
    /// Profile name shown under the greeting.
    pub profile_name: String,
    /// Short initials for the profile badge. The badge is a no-op affordance.
    pub profile_initials: String,
}

/// Balance summary display information.
#[derive(Debug, Clone)]
pub struct BalanceInfo {
    /// Caption above the amount (e.g. "Total Balance").
    pub label: String,
    /// Pre-formatted amount string, displayed verbatim.
    pub amount: String,
}

/// How one deck slot should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardRenderMode {
    /// Render the card image with its rotation hint; a tap opens the detail.
    Normal,

    /// Leave the slot visually empty while preserving its layout bounds: the
    /// card's image is currently drawn by the detail overlay instead, and a
    /// duplicate rendering underneath would break the shared-identity morph.
    Suppressed,
}

/// One slot in the horizontal deck.
#[derive(Debug, Clone)]
pub struct CardSlot {
    /// The card occupying this slot.
    pub card: CardEntry,
    /// Whether to draw the card or cede the space to the detail transition.
    pub mode: CardRenderMode,
    /// Whether the keyboard cursor rests on this slot.
    pub focused: bool,
}

/// Detail overlay display information.
#[derive(Debug, Clone)]
pub struct DetailViewModel {
    /// The selected card, rendered large.
    pub card: CardEntry,
    /// Rotation to draw the detail image at: the deck's sideways hint until the
    /// content reveals, upright afterwards — the morph between the two render
    /// sites.
    pub rotation_degrees: i16,
    /// Whether the back affordance and surrounding content have faded in.
    pub content_visible: bool,
    /// Whether the expense panel has slid up from the bottom.
    pub panel_raised: bool,
    /// Expense rows with their reveal instructions, in display order.
    pub rows: Vec<ExpenseRow>,
}

/// One row of the expense list plus its reveal instruction.
#[derive(Debug, Clone)]
pub struct ExpenseRow {
    /// The expense entry to display.
    pub entry: ExpenseEntry,
    /// Trailing date caption (today's date).
    pub date: String,
    /// Whether and where to draw the row right now.
    pub reveal: RevealInstruction,
}

/// Per-item output describing visibility and offset for the staggered entrance.
///
/// Rows stay hidden with a downward offset until the list reveal reaches their
/// delay, then settle at offset zero. `delay` is also exposed for consumers that
/// drive their own per-row entrance timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealInstruction {
    /// Whether the row is drawn at all this frame.
    pub visible: bool,
    /// Downward offset in rows while hidden; zero once revealed.
    pub offset_rows: u16,
    /// This row's stagger delay from the start of the list reveal.
    pub delay: std::time::Duration,
}
