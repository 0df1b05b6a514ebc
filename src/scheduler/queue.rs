//! Deadline queue for pending timer tokens.
//!
//! A min-heap of `(deadline, token)` pairs pumped by the main loop: the loop
//! sleeps until [`next_deadline`](TimerQueue::next_deadline) (capped by its input
//! poll), then drains everything due with [`pop_due`](TimerQueue::pop_due) and
//! feeds each token through the event handler. All scheduling lives on the one
//! event queue — there is no background thread and nothing here blocks.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

use super::messages::{TimerRequest, TimerToken};

/// Pending timers ordered by deadline.
///
/// Cancellation is not a queue concern: superseded tokens still pop, and the
/// transition controller drops them by generation on delivery.
#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: BinaryHeap<Reverse<Entry>>,
    next_seq: u64,
}

/// One scheduled timer. Ordered by deadline, then insertion sequence so that
/// timers scheduled earlier fire first when deadlines tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    deadline: Instant,
    seq: u64,
    token: TimerToken,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.deadline, self.seq).cmp(&(other.deadline, other.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl TimerQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a request relative to `now`.
    pub fn schedule(&mut self, now: Instant, request: TimerRequest) {
        let seq = self.next_seq;
        self.next_seq += 1;

        tracing::trace!(
            kind = ?request.token.kind,
            delay_ms = request.delay.as_millis() as u64,
            "timer scheduled"
        );
        self.pending.push(Reverse(Entry {
            deadline: now + request.delay,
            seq,
            token: request.token,
        }));
    }

    /// Removes and returns every token whose deadline is at or before `now`,
    /// in deadline order.
    pub fn pop_due(&mut self, now: Instant) -> Vec<TimerToken> {
        let mut due = Vec::new();
        while let Some(&Reverse(entry)) = self.pending.peek() {
            if entry.deadline > now {
                break;
            }
            self.pending.pop();
            due.push(entry.token);
        }
        due
    }

    /// Returns the earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.peek().map(|Reverse(entry)| entry.deadline)
    }

    /// Returns true if no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::messages::TimerKind;
    use std::time::Duration;

    #[test]
    fn pops_in_deadline_order() {
        let now = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(now, TimerRequest::new(1, TimerKind::ListReveal, Duration::from_millis(100)));
        queue.schedule(now, TimerRequest::new(1, TimerKind::Settle, Duration::from_millis(10)));

        let due = queue.pop_due(now + Duration::from_millis(200));
        assert_eq!(due.len(), 2);
        assert_eq!(due[0].kind, TimerKind::Settle);
        assert_eq!(due[1].kind, TimerKind::ListReveal);
        assert!(queue.is_empty());
    }

    #[test]
    fn leaves_future_timers_pending() {
        let now = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(now, TimerRequest::new(1, TimerKind::Settle, Duration::from_millis(10)));
        queue.schedule(now, TimerRequest::new(1, TimerKind::ListReveal, Duration::from_millis(500)));

        let due = queue.pop_due(now + Duration::from_millis(20));
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].kind, TimerKind::Settle);
        assert_eq!(queue.next_deadline(), Some(now + Duration::from_millis(500)));
    }

    #[test]
    fn equal_deadlines_fire_in_schedule_order() {
        let now = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(now, TimerRequest::new(1, TimerKind::Settle, Duration::ZERO));
        queue.schedule(now, TimerRequest::new(1, TimerKind::ListReveal, Duration::ZERO));

        let due = queue.pop_due(now);
        assert_eq!(due[0].kind, TimerKind::Settle);
        assert_eq!(due[1].kind, TimerKind::ListReveal);
    }
}
