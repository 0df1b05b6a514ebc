//! Shared rendering utilities.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use super::theme::Theme;

/// Text style helper: normal text on the current theme.
#[must_use]
pub fn text_style(theme: &Theme, dimmed: bool) -> Style {
    let color = if dimmed {
        Theme::color(&theme.colors.text_dim)
    } else {
        Theme::color(&theme.colors.text_normal)
    };
    Style::default().fg(color)
}

/// Accent style, de-emphasized to dim when the home chrome is behind the overlay.
#[must_use]
pub fn accent_style(theme: &Theme, dimmed: bool) -> Style {
    let color = if dimmed {
        Theme::color(&theme.colors.text_dim)
    } else {
        Theme::color(&theme.colors.accent)
    };
    Style::default().fg(color)
}

/// Border color for a deck slot, accented while focused.
#[must_use]
pub fn slot_border_color(theme: &Theme, focused: bool, dimmed: bool) -> Color {
    if dimmed {
        Theme::color(&theme.colors.text_dim)
    } else if focused {
        Theme::color(&theme.colors.border_focused)
    } else {
        Theme::color(&theme.colors.border)
    }
}

/// One character per line, for drawing a card name sideways.
#[must_use]
pub fn vertical_text(text: &str, style: Style) -> Vec<Line<'static>> {
    text.chars()
        .map(|c| Line::from(Span::styled(c.to_string(), style)))
        .collect()
}

/// A horizontally centered sub-rectangle of fixed width, for the sideways
/// detail image.
#[must_use]
pub fn centered_columns(width: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}
