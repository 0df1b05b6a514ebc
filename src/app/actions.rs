//! Actions representing side effects to be executed by the runtime shim.
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! bridging pure state transformations and effectful operations. In this system
//! the only side effects are timer scheduling (the delayed mutations of the
//! transition sequence) and quitting — there is no I/O in the core, which is
//! precisely why none of its operations can fail.

use crate::scheduler::TimerRequest;

/// Commands produced by the event handler for the runtime to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Schedules a timer on the main loop's deadline queue.
    ///
    /// When the deadline passes, the runtime feeds the token back as
    /// [`Event::TimerFired`](super::Event::TimerFired).
    Schedule(TimerRequest),

    /// Tears down the terminal and exits the event loop.
    Quit,
}
