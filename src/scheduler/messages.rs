//! Timer request and token types for deferred state mutations.
//!
//! This module defines the protocol between the application layer and the main
//! loop's timer pump. The transition controller never sleeps or spawns anything:
//! it returns [`TimerRequest`] values describing the delayed mutations it wants,
//! and the main loop delivers each one back as an event once its deadline passes.
//!
//! # Stale timer safety
//!
//! Every token carries the controller generation that issued it. When a `close`
//! interrupts an in-flight `open`, the controller bumps its generation, so the
//! superseded `Settle`/`ListReveal` timers still fire at the queue level but are
//! dropped on delivery. Without this, a stale timer could resurrect the revealed
//! flags after the overlay is already gone.

use std::time::Duration;

/// Which delayed mutation a timer drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Sets `content_revealed = true` after the settle delay (the back button
    /// and upright card fade in).
    Settle,

    /// Sets `list_revealed = true` after the list delay (the expense panel
    /// slides up and rows begin their stagger).
    ListReveal,

    /// Clears `overlay_visible` and `selected` together after the close delay,
    /// returning the machine to the closed state.
    CloseFinish,
}

/// Identifies one scheduled mutation and the controller generation that owns it.
///
/// Tokens are compared against the controller's current generation on delivery;
/// tokens from a superseded generation are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken {
    /// Controller generation at scheduling time.
    pub generation: u64,
    /// The mutation this timer drives.
    pub kind: TimerKind,
}

/// A request to deliver a token back to the application after a delay.
///
/// Produced by the transition controller, carried out of the event handler as
/// an action, and scheduled on the main loop's [`TimerQueue`](super::TimerQueue).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    /// Token to deliver when the deadline passes.
    pub token: TimerToken,
    /// Delay from the scheduling instant.
    pub delay: Duration,
}

impl TimerRequest {
    /// Creates a request for `kind` owned by `generation`, due after `delay`.
    #[must_use]
    pub const fn new(generation: u64, kind: TimerKind, delay: Duration) -> Self {
        Self {
            token: TimerToken { generation, kind },
            delay,
        }
    }
}
