use crate::habits::HabitSummary;
use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER,
    STATUS_DONE, STATUS_PENDING,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Lines each habit takes in the list: name row, streak row, spacer.
const ENTRY_HEIGHT: usize = 3;

const HELP_LINES: [&str; 6] = [
    "Up/Down, k/j   Move selection",
    "Space/Enter    Toggle today",
    "d/Delete       Remove habit",
    "?              Toggle this help",
    "q, Ctrl+C      Quit",
    "Esc            Close help / quit",
];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let summaries = app.summaries();
    let done_today = summaries.iter().filter(|s| s.completed_today).count();

    let header_widget = Header::new(app.today(), app.convention(), summaries.len(), done_today);
    frame.render_widget(header_widget.widget(), header);
    frame.render_widget(Clear, body);
    draw_body(frame, body, app, &summaries);
    frame.render_widget(Footer::widget(footer), footer);

    if app.focus() == Focus::Help {
        draw_help(frame, body);
    }
}

fn draw_body(frame: &mut Frame<'_>, area: Rect, app: &App, summaries: &[HabitSummary]) {
    let block = Block::default()
        .title(Span::styled(" Habits ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    // Last inner row is reserved for the action notice.
    let list_area = Rect {
        height: inner.height.saturating_sub(1),
        ..inner
    };
    let notice_area = Rect {
        y: inner.y + list_area.height,
        height: inner.height - list_area.height,
        ..inner
    };

    if summaries.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "  No habits configured.",
            Style::default().fg(MUTED_TEXT),
        )));
        frame.render_widget(empty, list_area);
    } else {
        let selected = app.selection();
        let lines: Vec<Line> = summaries
            .iter()
            .enumerate()
            .flat_map(|(idx, summary)| habit_lines(summary, selected == Some(idx)))
            .collect();
        let scroll = scroll_offset(selected.unwrap_or(0), list_area.height as usize);
        frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), list_area);
    }

    if let Some(notice) = app.notice() {
        let notice = Paragraph::new(Line::from(Span::styled(
            format!("  {notice}"),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        )));
        frame.render_widget(notice, notice_area);
    }
}

fn habit_lines(summary: &HabitSummary, highlight: bool) -> Vec<Line<'static>> {
    let (status_color, marker) = if summary.completed_today {
        (STATUS_DONE, "✔")
    } else {
        (STATUS_PENDING, "○")
    };
    let text_style = Style::default().fg(HEADER_TEXT);

    let mut name_line = Line::from(vec![
        Span::styled(if highlight { "▶ " } else { "  " }, Style::default().fg(ACCENT)),
        Span::styled(
            summary.name.clone(),
            text_style.add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({})", summary.frequency),
            Style::default().fg(MUTED_TEXT),
        ),
        Span::raw("  ["),
        Span::styled(
            format!("{marker} {}", summary.status_label()),
            Style::default().fg(status_color),
        ),
        Span::raw("]"),
    ]);
    let mut streak_line = Line::from(vec![
        Span::raw("    "),
        Span::styled(summary.streak_label(), text_style),
    ]);

    if highlight {
        let highlight_style = Style::default().bg(ACTIVE_HIGHLIGHT);
        name_line = name_line.style(highlight_style);
        streak_line = streak_line.style(highlight_style);
    }

    vec![name_line, streak_line, Line::from("")]
}

/// First visible line so the selected entry stays on screen.
fn scroll_offset(selected: usize, visible: usize) -> u16 {
    let bottom = (selected + 1) * ENTRY_HEIGHT;
    bottom.saturating_sub(visible).min(u16::MAX as usize) as u16
}

fn draw_help(frame: &mut Frame<'_>, body: Rect) {
    let lines: Vec<Line> = HELP_LINES.iter().map(|line| Line::from(*line)).collect();
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let area = centered_rect_by_size(
        body,
        content_width.saturating_add(4),
        lines.len().saturating_add(2) as u16,
    );

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled("Keys", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(popup), area);
}
