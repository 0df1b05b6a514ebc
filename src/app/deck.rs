//! Card deck presenter.
//!
//! Decides, per card, whether a deck slot renders normally or cedes its visual
//! space to the detail transition. Stateless aside from delegating the
//! suppression query to the transition controller: "exactly the suppressed
//! card's slot, never more than one, is empty at a time" follows directly from
//! the controller's single-selection invariant.

use crate::domain::CardEntry;
use crate::ui::viewmodel::{CardRenderMode, CardSlot};

use super::transition::DetailTransitionController;

/// Maps the ordered deck plus transition state into renderable slots.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardDeckPresenter;

impl CardDeckPresenter {
    /// Render mode for a single card.
    #[must_use]
    pub fn render_mode(card: &CardEntry, controller: &DetailTransitionController) -> CardRenderMode {
        if controller.is_card_suppressed(card) {
            CardRenderMode::Suppressed
        } else {
            CardRenderMode::Normal
        }
    }

    /// One slot per card in deck order, marking the focused slot.
    #[must_use]
    pub fn slots(
        cards: &[CardEntry],
        controller: &DetailTransitionController,
        focused_index: usize,
    ) -> Vec<CardSlot> {
        cards
            .iter()
            .enumerate()
            .map(|(index, card)| CardSlot {
                card: card.clone(),
                mode: Self::render_mode(card, controller),
                focused: index == focused_index,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::transition::TimingConfig;
    use std::time::Instant;

    fn deck() -> Vec<CardEntry> {
        vec![CardEntry::new("card-a", "A"), CardEntry::new("card-b", "B")]
    }

    #[test]
    fn all_slots_normal_while_closed() {
        let controller = DetailTransitionController::new(TimingConfig::default());
        let slots = CardDeckPresenter::slots(&deck(), &controller, 0);
        assert!(slots.iter().all(|s| s.mode == CardRenderMode::Normal));
        assert!(slots[0].focused);
        assert!(!slots[1].focused);
    }

    #[test]
    fn at_most_one_slot_suppressed_while_open() {
        let cards = deck();
        let mut controller = DetailTransitionController::new(TimingConfig::default());
        for request in controller.open(&cards[0]) {
            controller.timer_fired(request.token, Instant::now());
        }

        let slots = CardDeckPresenter::slots(&cards, &controller, 1);
        let suppressed: Vec<_> = slots
            .iter()
            .filter(|s| s.mode == CardRenderMode::Suppressed)
            .collect();
        assert_eq!(suppressed.len(), 1);
        assert_eq!(suppressed[0].card.id, "card-a");
        assert_eq!(slots[1].mode, CardRenderMode::Normal);
    }
}
