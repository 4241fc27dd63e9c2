use crate::habits::{DateConvention, DATE_FORMAT};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_DONE};
use chrono::NaiveDate;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    today: NaiveDate,
    convention: DateConvention,
    total: usize,
    done_today: usize,
}

impl Header {
    pub fn new(
        today: NaiveDate,
        convention: DateConvention,
        total: usize,
        done_today: usize,
    ) -> Self {
        Self {
            today,
            convention,
            total,
            done_today,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Habit Tracker",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!(
                    "{} ({})",
                    self.today.format(DATE_FORMAT),
                    self.convention.label()
                ),
                text_style,
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} habits", self.total), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("{}/{} done today", self.done_today, self.total),
                Style::default().fg(STATUS_DONE),
            ),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
