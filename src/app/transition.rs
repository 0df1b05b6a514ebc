//! Detail transition controller — the card expansion state machine.
//!
//! This module owns the one mutable entity in the system: the transition state
//! coordinating (a) which card is selected, (b) whether the detail overlay is
//! visible, (c) whether its inner content has faded in, and (d) whether the
//! expense list has begun its staggered reveal. Both presenters read the state
//! through snapshots; nothing else writes it.
//!
//! # Scheduling model
//!
//! The controller never touches a clock or a timer facility directly. `open` and
//! `close` mutate synchronously and return [`TimerRequest`]s for their delayed
//! continuations; the main loop schedules those and later delivers each token
//! back through [`DetailTransitionController::timer_fired`]. Within one call the
//! synchronous changes happen-before any of that call's delayed mutations, and a
//! generation counter guarantees that timers from a superseded `open` can never
//! mutate state after a `close` (the stale-timer-resurrects-content race).
//!
//! # Invariants
//!
//! - Content is never revealed while the overlay is absent.
//! - No overlay without a selected card.
//! - At most one card is selected at any time (the shared-identity anchor).
//! - While closing, `selected` is cleared only at the same instant the overlay
//!   goes down — clearing it earlier would strand the detail image without its
//!   identity anchor mid-animation.

use std::time::{Duration, Instant};

use crate::domain::CardEntry;
use crate::scheduler::{TimerKind, TimerRequest, TimerToken};

use super::phases::TransitionPhase;

/// Named durations separating the phases of the expansion/collapse sequence.
///
/// All four are injectable so tests can collapse them to zero. The defaults
/// approximate the original feel: content fades in essentially next frame, the
/// list follows roughly 100ms later, and the overlay lingers briefly on close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
    /// Delay before `content_revealed` flips true after `open`.
    pub settle_delay: Duration,
    /// Delay before `list_revealed` flips true after `open`. Independent of the
    /// settle delay; the two may overlap.
    pub list_delay: Duration,
    /// Delay before the overlay and selection are discarded after `close`.
    pub close_delay: Duration,
    /// Per-index step for the expense list's staggered reveal.
    pub step_duration: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(16),
            list_delay: Duration::from_millis(120),
            close_delay: Duration::from_millis(60),
            step_duration: Duration::from_millis(100),
        }
    }
}

/// Consistent snapshot of the four observable transition fields.
///
/// Presenters and tests read this instead of poking at controller internals,
/// which is what keeps a render pass from seeing a torn state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionState {
    /// The card anchoring the detail transition, if any.
    pub selected: Option<CardEntry>,
    /// Whether the detail overlay occupies the screen.
    pub overlay_visible: bool,
    /// Whether the overlay's inner content (back button, upright card) is shown.
    pub content_revealed: bool,
    /// Whether the expense list has begun revealing.
    pub list_revealed: bool,
}

impl TransitionState {
    /// The fully-closed state: no selection, nothing visible.
    #[must_use]
    pub const fn closed() -> Self {
        Self {
            selected: None,
            overlay_visible: false,
            content_revealed: false,
            list_revealed: false,
        }
    }
}

/// The expansion state machine.
///
/// Created once at startup in the fully-closed state and mutated only through
/// [`open`](Self::open), [`close`](Self::close), and their scheduled
/// continuations delivered via [`timer_fired`](Self::timer_fired).
#[derive(Debug, Clone)]
pub struct DetailTransitionController {
    timing: TimingConfig,
    phase: TransitionPhase,
    selected: Option<CardEntry>,
    content_revealed: bool,
    list_revealed: bool,
    /// When `list_revealed` flipped true; drives the per-row stagger clock.
    list_revealed_at: Option<Instant>,
    /// Bumped by every `open` and `close`; timers from older generations are
    /// dropped on delivery.
    generation: u64,
}

impl DetailTransitionController {
    /// Creates a controller in the fully-closed state.
    #[must_use]
    pub fn new(timing: TimingConfig) -> Self {
        Self {
            timing,
            phase: TransitionPhase::Closed,
            selected: None,
            content_revealed: false,
            list_revealed: false,
            list_revealed_at: None,
            generation: 0,
        }
    }

    /// Current phase of the expansion sequence.
    #[must_use]
    pub const fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// The configured timing parameters.
    #[must_use]
    pub const fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    /// The currently selected card, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&CardEntry> {
        self.selected.as_ref()
    }

    /// Begins the expansion sequence for `card`.
    ///
    /// Synchronously selects the card and raises the overlay, then returns two
    /// independent timer requests: `Settle` (reveals the content) and
    /// `ListReveal` (starts the expense list). Their relative order is a
    /// product-feel contract carried by the configured delays, not enforced
    /// here.
    ///
    /// Re-invoking with the already-selected card is a no-op. Invoking with a
    /// different card while any transition is in flight is rejected: the call
    /// is ignored and logged, since the machine offers no card-to-card
    /// transition and an implicit close-then-open would tear the shared
    /// identity mid-animation.
    pub fn open(&mut self, card: &CardEntry) -> Vec<TimerRequest> {
        if self.phase != TransitionPhase::Closed {
            if self.selected.as_ref().is_some_and(|s| s.id == card.id) {
                tracing::debug!(card_id = %card.id, "open ignored: already open on this card");
            } else {
                tracing::debug!(
                    card_id = %card.id,
                    selected = ?self.selected.as_ref().map(|s| s.id.as_str()),
                    phase = ?self.phase,
                    "open rejected: another card is mid-transition"
                );
            }
            return vec![];
        }

        self.generation += 1;
        self.selected = Some(card.clone());
        self.phase = TransitionPhase::Opening;
        self.content_revealed = false;
        self.list_revealed = false;
        self.list_revealed_at = None;

        tracing::debug!(card_id = %card.id, generation = self.generation, "opening detail overlay");

        vec![
            TimerRequest::new(self.generation, TimerKind::Settle, self.timing.settle_delay),
            TimerRequest::new(self.generation, TimerKind::ListReveal, self.timing.list_delay),
        ]
    }

    /// Begins the collapse sequence.
    ///
    /// Synchronously hides the content and list, then returns a `CloseFinish`
    /// request that discards the overlay and selection together once the close
    /// delay elapses. Accepted from any phase except `Closed` and `Closing`:
    /// closing mid-open collapses straight to `Closing`, and the generation
    /// bump invalidates the pending reveal timers.
    pub fn close(&mut self) -> Vec<TimerRequest> {
        match self.phase {
            TransitionPhase::Closed | TransitionPhase::Closing => {
                tracing::debug!(phase = ?self.phase, "close ignored");
                vec![]
            }
            TransitionPhase::Opening | TransitionPhase::ContentRevealing | TransitionPhase::Open => {
                self.generation += 1;
                self.content_revealed = false;
                self.list_revealed = false;
                self.list_revealed_at = None;
                self.phase = TransitionPhase::Closing;

                tracing::debug!(generation = self.generation, "closing detail overlay");

                vec![TimerRequest::new(
                    self.generation,
                    TimerKind::CloseFinish,
                    self.timing.close_delay,
                )]
            }
        }
    }

    /// Applies a delivered timer token. Returns true if state changed.
    ///
    /// Tokens from a superseded generation are dropped: a `Settle` or
    /// `ListReveal` scheduled by an interrupted `open` must never resurrect the
    /// revealed flags after a `close`.
    pub fn timer_fired(&mut self, token: TimerToken, now: Instant) -> bool {
        if token.generation != self.generation {
            tracing::trace!(
                kind = ?token.kind,
                token_generation = token.generation,
                current_generation = self.generation,
                "stale timer dropped"
            );
            return false;
        }

        match (token.kind, self.phase) {
            (TimerKind::Settle, TransitionPhase::Opening) => {
                self.content_revealed = true;
                self.phase = if self.list_revealed {
                    TransitionPhase::Open
                } else {
                    TransitionPhase::ContentRevealing
                };
                tracing::debug!(phase = ?self.phase, "content revealed");
                true
            }
            (TimerKind::ListReveal, TransitionPhase::Opening | TransitionPhase::ContentRevealing) => {
                self.list_revealed = true;
                self.list_revealed_at = Some(now);
                if self.content_revealed {
                    self.phase = TransitionPhase::Open;
                }
                tracing::debug!(phase = ?self.phase, "list revealed");
                true
            }
            (TimerKind::CloseFinish, TransitionPhase::Closing) => {
                // Overlay and selection are discarded in the same step so the
                // shared-identity anchor outlives the closing animation.
                self.selected = None;
                self.phase = TransitionPhase::Closed;
                tracing::debug!("detail overlay closed");
                true
            }
            (kind, phase) => {
                tracing::trace!(?kind, ?phase, "timer ignored in current phase");
                false
            }
        }
    }

    /// True iff `card` is the selected card and the overlay is visible.
    ///
    /// Consumed by the deck presenter: a suppressed card's slot renders as empty
    /// space (layout preserved) because its image is, at that moment, drawn by
    /// the detail view instead.
    #[must_use]
    pub fn is_card_suppressed(&self, card: &CardEntry) -> bool {
        self.phase.overlay_visible() && self.selected.as_ref().is_some_and(|s| s.id == card.id)
    }

    /// Time elapsed since the list reveal began, if it has.
    ///
    /// Feeds the expense list presenter's stagger clock. `None` whenever
    /// `list_revealed` is false, which is also what resets every row to its
    /// hidden state on reopen.
    #[must_use]
    pub fn list_elapsed(&self, now: Instant) -> Option<Duration> {
        self.list_revealed_at
            .map(|at| now.saturating_duration_since(at))
    }

    /// Consistent snapshot of the four observable fields.
    #[must_use]
    pub fn snapshot(&self) -> TransitionState {
        TransitionState {
            selected: self.selected.clone(),
            overlay_visible: self.phase.overlay_visible(),
            content_revealed: self.content_revealed,
            list_revealed: self.list_revealed,
        }
    }
}
