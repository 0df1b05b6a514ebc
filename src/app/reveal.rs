//! Expense list presenter.
//!
//! Produces the lazy, per-item staggered reveal for the detail view's expense
//! list. Each entry's delay derives from its position in display order:
//! `delay(i) = min(i, 20) * step_duration`. The sequence is restartable by
//! construction — instructions are recomputed from the transition snapshot every
//! pass, so a closed-then-reopened list starts every row from its hidden state
//! with no memory of the prior reveal.

use std::time::Duration;

use crate::ui::viewmodel::RevealInstruction;

/// Index beyond which the stagger stops growing: rows 20 and later share one
/// delay so a long list does not take forever to finish appearing.
const STAGGER_INDEX_CAP: usize = 20;

/// Downward offset applied to rows that have not yet revealed.
const HIDDEN_OFFSET_ROWS: u16 = 2;

/// Computes reveal instructions for the expense list.
#[derive(Debug, Clone, Copy)]
pub struct ExpenseListPresenter {
    step_duration: Duration,
}

impl ExpenseListPresenter {
    /// Creates a presenter with the configured per-index step.
    #[must_use]
    pub const fn new(step_duration: Duration) -> Self {
        Self { step_duration }
    }

    /// Stagger delay for the entry at `index`.
    ///
    /// Non-decreasing in `index` and constant from index 20 onwards.
    #[must_use]
    pub fn delay(&self, index: usize) -> Duration {
        self.step_duration * index.min(STAGGER_INDEX_CAP) as u32
    }

    /// Instruction for the entry at `index`.
    ///
    /// `list_elapsed` is the time since `list_revealed` flipped true, or `None`
    /// while the list is not revealed (hiding every row and resetting the
    /// sequence).
    #[must_use]
    pub fn instruction(&self, index: usize, list_elapsed: Option<Duration>) -> RevealInstruction {
        let delay = self.delay(index);
        let visible = list_elapsed.is_some_and(|elapsed| elapsed >= delay);
        RevealInstruction {
            visible,
            offset_rows: if visible { 0 } else { HIDDEN_OFFSET_ROWS },
            delay,
        }
    }

    /// Instructions for a list of `len` entries in display order.
    #[must_use]
    pub fn instructions(&self, len: usize, list_elapsed: Option<Duration>) -> Vec<RevealInstruction> {
        (0..len)
            .map(|index| self.instruction(index, list_elapsed))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presenter() -> ExpenseListPresenter {
        ExpenseListPresenter::new(Duration::from_millis(100))
    }

    #[test]
    fn delay_is_monotonic_and_bounded() {
        let presenter = presenter();
        let mut previous = Duration::ZERO;
        for index in 0..30 {
            let delay = presenter.delay(index);
            assert!(delay >= previous, "delay must be non-decreasing");
            previous = delay;
        }
        // Index 20 is the cap: everything after shares its delay.
        assert_eq!(presenter.delay(24), presenter.delay(20));
        assert_eq!(presenter.delay(20), Duration::from_millis(2000));
    }

    #[test]
    fn all_rows_hidden_until_list_reveals() {
        let instructions = presenter().instructions(3, None);
        assert!(instructions.iter().all(|i| !i.visible));
        assert!(instructions.iter().all(|i| i.offset_rows > 0));
    }

    #[test]
    fn rows_reveal_in_order_one_step_apart() {
        let presenter = presenter();

        // Just after the reveal starts only row 0 shows.
        let at_start = presenter.instructions(3, Some(Duration::ZERO));
        assert!(at_start[0].visible);
        assert!(!at_start[1].visible);
        assert!(!at_start[2].visible);

        // One step later row 1 joins, row 2 still pending.
        let after_one_step = presenter.instructions(3, Some(Duration::from_millis(100)));
        assert!(after_one_step[0].visible);
        assert!(after_one_step[1].visible);
        assert!(!after_one_step[2].visible);

        // Entry 0 first, entry 2 last, each offset by the step duration.
        let complete = presenter.instructions(3, Some(Duration::from_millis(200)));
        assert!(complete.iter().all(|i| i.visible && i.offset_rows == 0));
        assert_eq!(complete[2].delay - complete[1].delay, Duration::from_millis(100));
        assert_eq!(complete[1].delay - complete[0].delay, Duration::from_millis(100));
    }

    #[test]
    fn long_list_caps_at_index_twenty() {
        // 25 entries: delay(24) == delay(20), so the tail reveals together.
        let instructions = presenter().instructions(25, Some(Duration::from_millis(1999)));
        assert!(!instructions[20].visible);
        assert!(!instructions[24].visible);
        assert_eq!(instructions[24].delay, instructions[20].delay);

        let done = presenter().instructions(25, Some(Duration::from_millis(2000)));
        assert!(done[20].visible && done[24].visible);
    }

    #[test]
    fn reopen_recomputes_identically() {
        // Tearing the list down (elapsed -> None) and revealing again produces
        // the same instructions as the first pass: no reveal memory carries over.
        let presenter = presenter();
        let first = presenter.instructions(5, Some(Duration::from_millis(150)));
        let hidden = presenter.instructions(5, None);
        assert!(hidden.iter().all(|i| !i.visible));
        let second = presenter.instructions(5, Some(Duration::from_millis(150)));
        assert_eq!(first, second);
    }
}
