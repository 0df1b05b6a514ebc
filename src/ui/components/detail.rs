//! Detail overlay component.
//!
//! Renders the expanded card view: back affordance, the large card image, and
//! the expense panel. The card draws at the deck's sideways rotation until the
//! content reveals, then upright — the same identity, morphing between the two
//! render sites. The expense panel stays off the bottom edge until the list
//! reveal begins.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::helpers::{centered_columns, vertical_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailViewModel;

use super::expenses::render_expense_rows;

/// Renders the detail overlay over the whole drawing area.
pub fn render_detail(frame: &mut Frame, area: Rect, detail: &DetailViewModel, theme: &Theme) {
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(Theme::color(&theme.colors.background))),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // back affordance
            Constraint::Length(9), // large card
            Constraint::Min(0),    // expense panel
        ])
        .margin(1)
        .split(area);

    if detail.content_visible {
        let back = Paragraph::new(Line::from(vec![
            Span::styled(
                "✕ ",
                Style::default().fg(Theme::color(&theme.colors.accent)),
            ),
            Span::styled(
                "Back",
                Style::default()
                    .fg(Theme::color(&theme.colors.text_normal))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        frame.render_widget(back, chunks[0]);
    }

    render_card_image(frame, chunks[1], detail, theme);
    render_panel(frame, chunks[2], detail, theme);
}

fn render_card_image(frame: &mut Frame, area: Rect, detail: &DetailViewModel, theme: &Theme) {
    let face = Theme::color(&theme.colors.card_face);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Theme::color(&theme.colors.border_focused)));

    let body: Vec<Line> = if detail.rotation_degrees == 0 {
        vec![Line::from(Span::styled(
            detail.card.image_ref.clone(),
            Style::default().fg(face).add_modifier(Modifier::BOLD),
        ))]
    } else {
        vertical_text(&detail.card.image_ref, Style::default().fg(face))
    };

    // Keep the image narrow while sideways, wide once upright.
    let image_area = if detail.rotation_degrees == 0 {
        area
    } else {
        centered_columns(14, area)
    };

    let paragraph = Paragraph::new(body).alignment(Alignment::Center).block(block);
    frame.render_widget(paragraph, image_area);
}

fn render_panel(frame: &mut Frame, area: Rect, detail: &DetailViewModel, theme: &Theme) {
    if !detail.panel_raised {
        // The panel is still below the bottom edge.
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Theme::color(&theme.colors.border)))
        .style(Style::default().bg(Theme::color(&theme.colors.surface)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    render_expense_rows(frame, inner, &detail.rows, theme);
}
