//! Top-level rendering coordinator.
//!
//! Computes nothing itself: takes a pre-computed view model (one consistent
//! snapshot) and delegates to component renderers. The home chrome always draws
//! first; when the overlay is up the home is dimmed beneath it and the detail
//! view draws on top, so the closing fade keeps the home visible behind the
//! lingering overlay.

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::components::{render_balance, render_deck, render_detail, render_header};
use super::theme::Theme;
use super::viewmodel::UiViewModel;

/// Renders one frame from the view model.
pub fn render(frame: &mut Frame, vm: &UiViewModel, theme: &Theme) {
    let area = frame.size();
    frame.render_widget(
        Block::default().style(Style::default().bg(Theme::color(&theme.colors.background))),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(3), // balance
            Constraint::Min(9),    // deck
        ])
        .margin(1)
        .split(area);

    render_header(frame, chunks[0], &vm.header, theme, vm.home_dimmed);
    render_balance(frame, chunks[1], &vm.balance, theme, vm.home_dimmed);
    render_deck(frame, chunks[2], &vm.deck, theme, vm.home_dimmed);

    if let Some(detail) = &vm.detail {
        render_detail(frame, area, detail, theme);
    }
}
