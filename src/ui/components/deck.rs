//! Horizontal card deck component.
//!
//! Renders one slot per card in deck order. A suppressed slot draws nothing at
//! all but keeps its layout bounds — the detail overlay is drawing that card's
//! image, and rendering a duplicate underneath would break the shared-identity
//! morph.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::helpers::{slot_border_color, vertical_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardRenderMode, CardSlot};

/// Fixed slot width, mirroring the original's fixed-width scroller cells.
const SLOT_WIDTH: u16 = 14;

/// Renders the deck into `area`, one fixed-width slot per card.
pub fn render_deck(frame: &mut Frame, area: Rect, slots: &[CardSlot], theme: &Theme, dimmed: bool) {
    let constraints: Vec<Constraint> = slots
        .iter()
        .map(|_| Constraint::Length(SLOT_WIDTH))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (slot, chunk) in slots.iter().zip(chunks.iter()) {
        render_slot(frame, *chunk, slot, theme, dimmed);
    }
}

fn render_slot(frame: &mut Frame, area: Rect, slot: &CardSlot, theme: &Theme, dimmed: bool) {
    if slot.mode == CardRenderMode::Suppressed {
        // Empty space, layout bounds preserved.
        return;
    }

    let border_color = slot_border_color(theme, slot.focused, dimmed);
    let face_color = if dimmed {
        Theme::color(&theme.colors.text_dim)
    } else {
        Theme::color(&theme.colors.card_face)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    // Deck slots draw the card sideways (the rotation hint); one character per
    // line stands in for the rotated artwork.
    let face_style = Style::default().fg(face_color);
    let body = if slot.card.rotation_degrees == 0 {
        vec![Span::styled(slot.card.image_ref.clone(), face_style).into()]
    } else {
        vertical_text(&slot.card.image_ref, face_style)
    };

    let paragraph = Paragraph::new(body).alignment(Alignment::Center).block(block);
    frame.render_widget(paragraph, area);
}
