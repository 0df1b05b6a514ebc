//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and timer
//! deliveries, translating them into state changes and action sequences. The
//! handler follows a unidirectional flow: events arrive from the runtime shim,
//! [`handle_event`] pattern-matches them, state mutations occur through
//! `AppState` and the transition controller, and actions are collected for the
//! runtime to execute (timer scheduling, quit).
//!
//! Everything is single-threaded and cooperative: the only suspension points in
//! the whole system are the timers requested by `open` and `close`, which come
//! back through [`Event::TimerFired`] on the same queue.

use std::time::Instant;

use crate::domain::Result;
use crate::scheduler::TimerToken;

use super::{Action, AppState};

/// Events triggered by user input or elapsed timers.
///
/// Each event is a discrete occurrence processed sequentially by the handler,
/// which is what gives the transition sequence its ordering guarantee: within
/// one `open` or `close`, the synchronous changes happen-before any of that
/// call's delayed mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Moves deck focus right by one slot (wraps).
    FocusNext,
    /// Moves deck focus left by one slot (wraps).
    FocusPrev,
    /// Taps the focused card, opening the detail overlay.
    OpenFocused,
    /// Activates the back affordance, closing the detail overlay.
    CloseDetail,
    /// Activates the profile badge. Deliberately a no-op.
    ProfilePressed,
    /// A scheduled timer came due; the token is delivered to the controller.
    TimerFired(TimerToken),
    /// Exits the application.
    Quit,
}

/// Processes an event, mutates application state, and returns actions.
///
/// Returns `(should_render, actions)`: the boolean tells the runtime whether
/// the frame is stale, and the actions are executed in order afterwards.
///
/// # Errors
///
/// Currently infallible — no handler arm performs I/O — but the signature
/// propagates [`Result`] so the runtime shim handles every fallible call the
/// same way.
pub fn handle_event(state: &mut AppState, event: &Event, now: Instant) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::FocusNext => {
            state.focus_next();
            Ok((true, vec![]))
        }
        Event::FocusPrev => {
            state.focus_prev();
            Ok((true, vec![]))
        }
        Event::OpenFocused => {
            let Some(card) = state.focused_card().cloned() else {
                tracing::debug!("no card focused");
                return Ok((false, vec![]));
            };

            let requests = state.transition.open(&card);
            let changed = !requests.is_empty();
            let actions = requests.into_iter().map(Action::Schedule).collect();
            Ok((changed, actions))
        }
        Event::CloseDetail => {
            let requests = state.transition.close();
            let changed = !requests.is_empty();
            let actions = requests.into_iter().map(Action::Schedule).collect();
            Ok((changed, actions))
        }
        Event::ProfilePressed => {
            tracing::debug!("profile badge pressed");
            Ok((false, vec![]))
        }
        Event::TimerFired(token) => {
            let changed = state.transition.timer_fired(*token, now);
            Ok((changed, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::transition::{TimingConfig, TransitionState};
    use crate::app::TransitionPhase;
    use crate::domain::{CardEntry, ExpenseEntry};
    use crate::scheduler::TimerKind;
    use crate::ui::theme::Theme;

    fn state() -> AppState {
        AppState::new(
            "Avery Quinn".to_string(),
            "$1,000,821".to_string(),
            vec![CardEntry::new("card-a", "A"), CardEntry::new("card-b", "B")],
            vec![ExpenseEntry::new("e0", "►", "Streaming", "Subscription", "$12.99")],
            TimingConfig::default(),
            Theme::default(),
        )
    }

    /// Runs an event and feeds every scheduled timer straight back, simulating
    /// the deadlines elapsing in order.
    fn drive(state: &mut AppState, event: Event, now: Instant) {
        let (_, actions) = handle_event(state, &event, now).expect("handler is infallible");
        let mut requests: Vec<_> = actions
            .into_iter()
            .filter_map(|action| match action {
                Action::Schedule(request) => Some(request),
                Action::Quit => None,
            })
            .collect();
        requests.sort_by_key(|r| r.delay);
        for request in requests {
            let fired = Event::TimerFired(request.token);
            handle_event(state, &fired, now + request.delay).expect("handler is infallible");
        }
    }

    #[test]
    fn open_focused_schedules_both_reveal_timers() {
        let mut state = state();
        let (changed, actions) =
            handle_event(&mut state, &Event::OpenFocused, Instant::now()).unwrap();
        assert!(changed);
        assert_eq!(actions.len(), 2);
        assert!(matches!(
            actions[0],
            Action::Schedule(request) if request.token.kind == TimerKind::Settle
        ));
        assert!(matches!(
            actions[1],
            Action::Schedule(request) if request.token.kind == TimerKind::ListReveal
        ));
    }

    #[test]
    fn open_then_close_cycle_returns_to_initial_state() {
        let now = Instant::now();
        let mut state = state();

        drive(&mut state, Event::OpenFocused, now);
        assert_eq!(state.transition.phase(), TransitionPhase::Open);

        drive(&mut state, Event::CloseDetail, now);
        assert_eq!(state.transition.phase(), TransitionPhase::Closed);
        assert_eq!(state.transition.snapshot(), TransitionState::closed());
    }

    #[test]
    fn close_without_overlay_does_nothing() {
        let mut state = state();
        let (changed, actions) =
            handle_event(&mut state, &Event::CloseDetail, Instant::now()).unwrap();
        assert!(!changed);
        assert!(actions.is_empty());
    }

    #[test]
    fn focus_moves_do_not_disturb_open_overlay() {
        let now = Instant::now();
        let mut state = state();
        drive(&mut state, Event::OpenFocused, now);

        handle_event(&mut state, &Event::FocusNext, now).unwrap();
        assert_eq!(state.focused_card, 1);
        assert_eq!(
            state.transition.snapshot().selected.map(|c| c.id),
            Some("card-a".to_string())
        );

        // Opening the newly focused card while another is selected is rejected.
        let (changed, actions) = handle_event(&mut state, &Event::OpenFocused, now).unwrap();
        assert!(!changed);
        assert!(actions.is_empty());
    }

    #[test]
    fn quit_emits_quit_action() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::Quit, Instant::now()).unwrap();
        assert_eq!(actions, vec![Action::Quit]);
    }
}
