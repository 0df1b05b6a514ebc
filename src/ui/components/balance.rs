//! Balance summary component.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::helpers::text_style;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BalanceInfo;

/// Renders the "Total Balance" caption and amount.
pub fn render_balance(frame: &mut Frame, area: Rect, balance: &BalanceInfo, theme: &Theme, dimmed: bool) {
    let amount_style = if dimmed {
        text_style(theme, true)
    } else {
        Style::default().fg(Theme::color(&theme.colors.amount))
    };

    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(
            balance.label.clone(),
            Style::default().fg(Theme::color(&theme.colors.text_dim)),
        )),
        Line::from(Span::styled(
            balance.amount.clone(),
            amount_style.add_modifier(Modifier::BOLD),
        )),
    ]);
    frame.render_widget(paragraph, area);
}
