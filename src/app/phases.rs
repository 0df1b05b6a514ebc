//! Transition phase state machine type.
//!
//! This module defines the phase enum for the card expansion sequence. The
//! machine cycles through five phases:
//!
//! ```text
//! Closed ── open(card) ─────────────► Opening
//! Opening ── settle delay ──────────► ContentRevealing
//! ContentRevealing ── list delay ───► Open
//! Open ── close() ──────────────────► Closing
//! Closing ── close delay ───────────► Closed
//! ```
//!
//! `Closed` is both initial and terminal-reentrant: every full cycle returns to
//! it. `close()` is additionally accepted from `Opening` and `ContentRevealing`,
//! collapsing directly to `Closing` — there is no way to get stuck mid-open.

/// Phase of the detail expansion sequence.
///
/// The phase disambiguates states whose observable flags coincide: `Opening` and
/// `Closing` both show the overlay with nothing revealed, but one is waiting for
/// reveal timers and the other for the close timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// No card selected, no overlay. The deck renders every card normally.
    Closed,

    /// A card was tapped: the overlay is up and the shared-identity image is in
    /// flight, but the detail content has not yet faded in.
    Opening,

    /// The back button and upright card are visible; the expense panel is still
    /// waiting on the list delay.
    ContentRevealing,

    /// Fully expanded: content and expense list both revealed.
    Open,

    /// Content has been hidden again; the overlay lingers for the close delay so
    /// the fade-out is perceivable before the subject is discarded.
    Closing,
}

impl TransitionPhase {
    /// True while the overlay occupies the screen (every phase except `Closed`).
    #[must_use]
    pub const fn overlay_visible(self) -> bool {
        !matches!(self, Self::Closed)
    }
}
