//! Header component: greeting, profile name, and profile badge.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::helpers::{accent_style, text_style};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the greeting block with the profile badge on the trailing edge.
///
/// The badge is a no-op affordance: it renders and accepts focus-free key
/// activation but triggers no state change.
pub fn render_header(frame: &mut Frame, area: Rect, header: &HeaderInfo, theme: &Theme, dimmed: bool) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(8)])
        .split(area);

    let greeting = Paragraph::new(vec![
        Line::from(Span::styled(
            header.greeting.clone(),
            text_style(theme, dimmed).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            header.profile_name.clone(),
            Style::default().fg(Theme::color(&theme.colors.text_dim)),
        )),
    ]);
    frame.render_widget(greeting, chunks[0]);

    let badge = Paragraph::new(Line::from(Span::styled(
        header.profile_initials.clone(),
        accent_style(theme, dimmed).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(accent_style(theme, dimmed)),
    );
    frame.render_widget(badge, chunks[1]);
}
