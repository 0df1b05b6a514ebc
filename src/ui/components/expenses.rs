//! Expense list component with staggered reveal.
//!
//! Rows render strictly by their reveal instructions: a row whose instruction is
//! not yet visible contributes blank space, so the list fills in top-down as the
//! stagger clock advances, each row one step after the previous.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::ExpenseRow;

/// Lines each row occupies (two content lines plus a blank separator).
const ROW_HEIGHT: u16 = 3;

/// Renders expense rows into `area`, honoring each row's reveal instruction.
pub fn render_expense_rows(frame: &mut Frame, area: Rect, rows: &[ExpenseRow], theme: &Theme) {
    let visible_capacity = (area.height / ROW_HEIGHT) as usize;
    let constraints: Vec<Constraint> = rows
        .iter()
        .take(visible_capacity)
        .map(|_| Constraint::Length(ROW_HEIGHT))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    // Only rows with a full-height chunk render; pairing an overflow row with
    // the Min(0) leftover would squeeze it into the remainder sliver.
    for (row, chunk) in rows.iter().take(visible_capacity).zip(chunks.iter()) {
        if row.reveal.visible {
            render_row(frame, *chunk, row, theme);
        }
    }
}

fn render_row(frame: &mut Frame, area: Rect, row: &ExpenseRow, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(14)])
        .split(area);

    let text = Theme::color(&theme.colors.text_normal);
    let dim = Theme::color(&theme.colors.text_dim);

    let left = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(format!("{} ", row.entry.product_icon), Style::default().fg(text)),
            Span::styled(
                row.entry.product_label.clone(),
                Style::default().fg(text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("  {}", row.entry.spend_category),
            Style::default().fg(dim),
        )),
    ]);
    frame.render_widget(left, chunks[0]);

    let right = Paragraph::new(vec![
        Line::from(Span::styled(
            row.entry.amount_label.clone(),
            Style::default()
                .fg(Theme::color(&theme.colors.amount))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(row.date.clone(), Style::default().fg(dim))),
    ])
    .alignment(Alignment::Right);
    frame.render_widget(right, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExpenseEntry;
    use crate::ui::viewmodel::RevealInstruction;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;
    use std::time::Duration;

    fn row(label: &str) -> ExpenseRow {
        ExpenseRow {
            entry: ExpenseEntry::new(label, "•", label, "Subscription", "$1.00"),
            date: "08/29/2026".to_string(),
            reveal: RevealInstruction {
                visible: true,
                offset_rows: 0,
                delay: Duration::ZERO,
            },
        }
    }

    fn rendered(width: u16, height: u16, rows: &[ExpenseRow]) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|frame| render_expense_rows(frame, frame.size(), rows, &Theme::default()))
            .expect("draw");
        terminal.backend().buffer().clone()
    }

    fn buffer_contains(buffer: &Buffer, needle: &str) -> bool {
        let area = buffer.area;
        (area.y..area.bottom()).any(|y| {
            let line: String = (area.x..area.right())
                .map(|x| buffer.get(x, y).symbol())
                .collect();
            line.contains(needle)
        })
    }

    #[test]
    fn overflow_rows_are_dropped_not_squeezed() {
        let rows = vec![row("Alpha"), row("Bravo"), row("Charlie")];

        // Seven lines fit two full rows; the third must not leak into the
        // leftover sliver.
        let buffer = rendered(40, 7, &rows);
        assert!(buffer_contains(&buffer, "Alpha"));
        assert!(buffer_contains(&buffer, "Bravo"));
        assert!(!buffer_contains(&buffer, "Charlie"));
    }

    #[test]
    fn area_shorter_than_one_row_renders_nothing() {
        let buffer = rendered(40, 2, &[row("Alpha")]);
        assert!(!buffer_contains(&buffer, "Alpha"));
    }

    #[test]
    fn hidden_rows_leave_blank_space() {
        let mut rows = vec![row("Alpha"), row("Bravo")];
        rows[1].reveal = RevealInstruction {
            visible: false,
            offset_rows: 2,
            delay: Duration::from_millis(100),
        };

        let buffer = rendered(40, 6, &rows);
        assert!(buffer_contains(&buffer, "Alpha"));
        assert!(!buffer_contains(&buffer, "Bravo"));
    }
}
