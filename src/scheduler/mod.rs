//! Timer scheduling for deferred state mutations.
//!
//! The transition sequence is timer-driven: `open` and `close` mutate state
//! synchronously and hand back requests for their delayed continuations. This
//! module supplies both halves of that contract — the request/token protocol
//! ([`messages`]) and the deadline queue the main loop pumps ([`queue`]).

pub mod messages;
pub mod queue;

pub use messages::{TimerKind, TimerRequest, TimerToken};
pub use queue::TimerQueue;
