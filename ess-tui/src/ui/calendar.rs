use super::utils::centered_rect;
use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const CELL_WIDTH: u16 = 4;
const MAX_WEEKS: usize = 6;
const CALENDAR_WIDTH: u16 = 7 * CELL_WIDTH + 2;
const CALENDAR_HEIGHT: u16 = 12;
const WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Centered month calendar. Records day cells and the month arrows in
/// `app.layout` for pointer handling.
pub fn render_calendar(frame: &mut Frame, app: &mut App) {
    let Some(picker) = app.form.date_picker else {
        return;
    };

    let area = centered_rect(CALENDAR_WIDTH, CALENDAR_HEIGHT, frame.area());
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(" Select Date ", Style::default().fg(Color::Cyan)))
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    app.layout.calendar = area;

    // Month header with arrows
    let header = Rect { height: 1, ..inner }.intersection(inner);
    let prev = Rect { width: 3, ..header }.intersection(header);
    let next = Rect {
        x: header.right().saturating_sub(3),
        width: 3,
        ..header
    }
    .intersection(header);
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("{} {}", picker.month(), picker.year()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        header,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(" < ", Style::default().fg(Color::Yellow))),
        prev,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(" > ", Style::default().fg(Color::Yellow))),
        next,
    );
    app.layout.prev_month = prev;
    app.layout.next_month = next;

    // Weekday row, weeks, help
    let grid = picker.grid();
    let mut lines = Vec::with_capacity(MAX_WEEKS + 3);
    lines.push(Line::from(
        WEEKDAYS
            .iter()
            .map(|d| Span::styled(format!("{:>3} ", d), Style::default().fg(Color::DarkGray)))
            .collect::<Vec<_>>(),
    ));

    let mut cells = Vec::new();
    for row in 0..MAX_WEEKS {
        let Some(week) = grid.get(row) else {
            lines.push(Line::from(""));
            continue;
        };
        let mut spans = Vec::with_capacity(7);
        for (col, day) in week.iter().enumerate() {
            let Some(date) = day else {
                spans.push(Span::raw(" ".repeat(CELL_WIDTH as usize)));
                continue;
            };

            let mut style = Style::default().fg(Color::White);
            if *date == app.today {
                style = style.fg(Color::Yellow).add_modifier(Modifier::UNDERLINED);
            }
            if Some(*date) == app.form.date {
                style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
            }
            if *date == picker.cursor {
                style = style.fg(Color::Black).bg(Color::Yellow);
            }
            spans.push(Span::styled(format!("{:>3} ", date.day()), style));

            let cell = Rect {
                x: inner.x + col as u16 * CELL_WIDTH,
                y: inner.y + 2 + row as u16,
                width: CELL_WIDTH,
                height: 1,
            }
            .intersection(inner);
            if !cell.is_empty() {
                cells.push((cell, *date));
            }
        }
        lines.push(Line::from(spans));
    }
    app.layout.calendar_days = cells;

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter pick · Esc close",
        Style::default().fg(Color::DarkGray),
    )));

    let body = Rect {
        y: inner.y.saturating_add(1),
        height: inner.height.saturating_sub(1),
        ..inner
    };
    frame.render_widget(Paragraph::new(lines), body);
}
