//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the wallet
//! UI. It holds the immutable data loaded at startup (profile, balance, deck,
//! expenses), the deck focus cursor, and the transition controller that owns the
//! one mutable entity in the system. View models are computed on demand from a
//! single state snapshot per render pass.
//!
//! # State Components
//!
//! - **Deck**: ordered card entries; identity (`id`) is stable and unique
//! - **Expenses**: ordered expense entries; display order is array order
//! - **Focus**: keyboard cursor within the deck (the tap target)
//! - **Transition**: the expansion state machine, read via snapshots

use std::time::Instant;

use crate::domain::{CardEntry, ExpenseEntry};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BalanceInfo, DetailViewModel, ExpenseRow, HeaderInfo, UiViewModel,
};

use super::deck::CardDeckPresenter;
use super::reveal::ExpenseListPresenter;
use super::transition::{DetailTransitionController, TimingConfig};

/// Central application state container.
///
/// Mutated by the event handler in response to user input and timer deliveries.
/// The transition controller is only ever driven through `open`/`close`/
/// `timer_fired`; no other component writes transition state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Profile name for the greeting and badge.
    pub profile_name: String,

    /// Pre-formatted total balance string.
    pub balance: String,

    /// Ordered card deck. Immutable after initialization.
    pub cards: Vec<CardEntry>,

    /// Ordered expense list. Immutable after initialization.
    pub expenses: Vec<ExpenseEntry>,

    /// Zero-based keyboard cursor within the deck. Wraps during navigation.
    pub focused_card: usize,

    /// The expansion state machine.
    pub transition: DetailTransitionController,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates application state from loaded data, timing, and theme.
    #[must_use]
    pub fn new(
        profile_name: String,
        balance: String,
        cards: Vec<CardEntry>,
        expenses: Vec<ExpenseEntry>,
        timing: TimingConfig,
        theme: Theme,
    ) -> Self {
        Self {
            profile_name,
            balance,
            cards,
            expenses,
            focused_card: 0,
            transition: DetailTransitionController::new(timing),
            theme,
        }
    }

    /// Moves deck focus right by one slot, wrapping to the first card.
    ///
    /// No-op if the deck is empty.
    pub fn focus_next(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.focused_card = (self.focused_card + 1) % self.cards.len();
    }

    /// Moves deck focus left by one slot, wrapping to the last card.
    ///
    /// No-op if the deck is empty.
    pub fn focus_prev(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        if self.focused_card == 0 {
            self.focused_card = self.cards.len() - 1;
        } else {
            self.focused_card -= 1;
        }
    }

    /// Returns the card under the focus cursor, if any.
    #[must_use]
    pub fn focused_card(&self) -> Option<&CardEntry> {
        self.cards.get(self.focused_card)
    }

    /// Computes a renderable view model from the current state.
    ///
    /// Reads one transition snapshot and derives everything from it, so a frame
    /// can never mix fields from two different instants. `now` drives only the
    /// expense list's stagger clock.
    #[must_use]
    pub fn compute_viewmodel(&self, now: Instant) -> UiViewModel {
        let snapshot = self.transition.snapshot();

        let detail = snapshot.selected.as_ref().filter(|_| snapshot.overlay_visible).map(|card| {
            let presenter = ExpenseListPresenter::new(self.transition.timing().step_duration);
            let list_elapsed = self.transition.list_elapsed(now);
            let date = ExpenseEntry::display_date();

            let rows = self
                .expenses
                .iter()
                .enumerate()
                .map(|(index, entry)| ExpenseRow {
                    entry: entry.clone(),
                    date: date.clone(),
                    reveal: presenter.instruction(index, list_elapsed),
                })
                .collect();

            DetailViewModel {
                card: (*card).clone(),
                // The morph: sideways like the deck slot until the content
                // settles, upright afterwards.
                rotation_degrees: if snapshot.content_revealed {
                    0
                } else {
                    card.rotation_degrees
                },
                content_visible: snapshot.content_revealed,
                panel_raised: snapshot.list_revealed,
                rows,
            }
        });

        UiViewModel {
            header: HeaderInfo {
                greeting: "Welcome Back,".to_string(),
                profile_name: self.profile_name.clone(),
                profile_initials: Self::initials(&self.profile_name),
            },
            balance: BalanceInfo {
                label: "Total Balance".to_string(),
                amount: self.balance.clone(),
            },
            deck: CardDeckPresenter::slots(&self.cards, &self.transition, self.focused_card),
            home_dimmed: snapshot.overlay_visible,
            detail,
        }
    }

    /// Up to two initials for the profile badge.
    fn initials(name: &str) -> String {
        name.split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::CardRenderMode;

    fn state() -> AppState {
        AppState::new(
            "Avery Quinn".to_string(),
            "$1,000,821".to_string(),
            vec![CardEntry::new("card-a", "A"), CardEntry::new("card-b", "B")],
            vec![
                ExpenseEntry::new("e0", "►", "Streaming", "Subscription", "$12.99"),
                ExpenseEntry::new("e1", "◆", "Design Tool", "Membership", "$8.00"),
                ExpenseEntry::new("e2", "●", "Cloud Storage", "Subscription", "$3.99"),
            ],
            TimingConfig::default(),
            Theme::default(),
        )
    }

    #[test]
    fn focus_wraps_both_directions() {
        let mut state = state();
        assert_eq!(state.focused_card, 0);
        state.focus_prev();
        assert_eq!(state.focused_card, 1);
        state.focus_next();
        assert_eq!(state.focused_card, 0);
        state.focus_next();
        state.focus_next();
        assert_eq!(state.focused_card, 0);
    }

    #[test]
    fn viewmodel_without_overlay_has_no_detail() {
        let state = state();
        let vm = state.compute_viewmodel(Instant::now());
        assert!(vm.detail.is_none());
        assert!(!vm.home_dimmed);
        assert_eq!(vm.deck.len(), 2);
        assert!(vm.deck.iter().all(|s| s.mode == CardRenderMode::Normal));
        assert_eq!(vm.header.profile_initials, "AQ");
    }

    #[test]
    fn viewmodel_during_opening_shows_sideways_detail() {
        let mut state = state();
        let card = state.cards[0].clone();
        state.transition.open(&card);

        let vm = state.compute_viewmodel(Instant::now());
        let detail = vm.detail.expect("overlay should be visible");
        assert_eq!(detail.card.id, "card-a");
        assert_eq!(detail.rotation_degrees, -90);
        assert!(!detail.content_visible);
        assert!(!detail.panel_raised);
        assert!(detail.rows.iter().all(|r| !r.reveal.visible));
        assert!(vm.home_dimmed);
        assert_eq!(vm.deck[0].mode, CardRenderMode::Suppressed);
        assert_eq!(vm.deck[1].mode, CardRenderMode::Normal);
    }

    #[test]
    fn viewmodel_when_open_shows_upright_detail_and_staggered_rows() {
        let now = Instant::now();
        let mut state = state();
        let card = state.cards[0].clone();
        let requests = state.transition.open(&card);
        for request in &requests {
            state.transition.timer_fired(request.token, now);
        }

        // Immediately after the list reveal only row 0 is visible.
        let vm = state.compute_viewmodel(now);
        let detail = vm.detail.expect("overlay should be visible");
        assert_eq!(detail.rotation_degrees, 0);
        assert!(detail.content_visible);
        assert!(detail.panel_raised);
        assert!(detail.rows[0].reveal.visible);
        assert!(!detail.rows[2].reveal.visible);

        // Two steps later the whole three-row list is in.
        let later = now + state.transition.timing().step_duration * 2;
        let vm = state.compute_viewmodel(later);
        let detail = vm.detail.expect("overlay should be visible");
        assert!(detail.rows.iter().all(|r| r.reveal.visible));
    }
}
