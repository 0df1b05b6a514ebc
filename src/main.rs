//! Terminal shim for the walletdeck binary.
//!
//! Owns everything the library deliberately does not: the real clock, the
//! crossterm input stream, and the timer queue. The loop draws when state
//! changed, sleeps until the next input or timer deadline, and feeds due timer
//! tokens back through the event handler as [`Event::TimerFired`].

use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};

use walletdeck::observability::init_tracing;
use walletdeck::ui::keymap::map_key;
use walletdeck::ui::{render, restore_terminal, setup_terminal, AppTerminal};
use walletdeck::{handle_event, initialize, Action, AppState, Config, Event, Result, TimerQueue, WalletdeckError};

/// Poll ceiling while idle. Keeps the loop responsive to resize events without
/// burning CPU between inputs.
const IDLE_POLL: Duration = Duration::from_millis(200);

fn main() -> Result<()> {
    let config = Config::load();
    init_tracing(&config);
    tracing::info!("walletdeck starting");

    let mut state = initialize(&config);
    let mut terminal = setup_terminal()?;

    let result = run(&mut terminal, &mut state);

    // Restore the terminal on every exit path, keeping the first error.
    let restored = restore_terminal(&mut terminal);
    result.and(restored)
}

fn run(terminal: &mut AppTerminal, state: &mut AppState) -> Result<()> {
    let mut queue = TimerQueue::new();
    let mut dirty = true;

    loop {
        if dirty {
            let now = Instant::now();
            let viewmodel = state.compute_viewmodel(now);
            terminal
                .draw(|frame| render(frame, &viewmodel, &state.theme))
                .map_err(|e| WalletdeckError::Terminal(e.to_string()))?;
            dirty = false;
        }

        let timeout = queue.next_deadline().map_or(IDLE_POLL, |deadline| {
            deadline
                .saturating_duration_since(Instant::now())
                .min(IDLE_POLL)
        });

        if event::poll(timeout).map_err(|e| WalletdeckError::Terminal(e.to_string()))? {
            match event::read().map_err(|e| WalletdeckError::Terminal(e.to_string()))? {
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(app_event) = map_key(key) {
                        if dispatch(state, &mut queue, &app_event, &mut dirty)? {
                            return Ok(());
                        }
                    }
                }
                CrosstermEvent::Resize(_, _) => dirty = true,
                _ => {}
            }
        }

        let now = Instant::now();
        for token in queue.pop_due(now) {
            if dispatch(state, &mut queue, &Event::TimerFired(token), &mut dirty)? {
                return Ok(());
            }
        }
    }
}

/// Runs one event through the handler and executes the resulting actions.
/// Returns true when the application should quit.
fn dispatch(
    state: &mut AppState,
    queue: &mut TimerQueue,
    event: &Event,
    dirty: &mut bool,
) -> Result<bool> {
    let now = Instant::now();
    let (changed, actions) = handle_event(state, event, now)?;
    *dirty |= changed;

    for action in actions {
        match action {
            Action::Schedule(request) => queue.schedule(now, request),
            Action::Quit => {
                tracing::info!("walletdeck exiting");
                return Ok(true);
            }
        }
    }
    Ok(false)
}
