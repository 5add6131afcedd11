use super::utils::focus_color;
use crate::app::{App, FormField};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

pub fn render_form(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .title(Span::styled(
            " Update ESS Data ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .padding(Padding::horizontal(2));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // 0: Subtitle
            Constraint::Length(1), // 1: Step 1
            Constraint::Length(3), // 2: Column
            Constraint::Length(1), // 3: Step 2
            Constraint::Length(3), // 4: NNO numbers
            Constraint::Length(1), // 5: NNO example
            Constraint::Length(1), // 6: Step 3
            Constraint::Length(3), // 7: Date + clear
            Constraint::Length(3), // 8: Error / success
            Constraint::Length(3), // 9: Submit
            Constraint::Min(0),    // 10: Spacer
            Constraint::Length(1), // 11: Key help
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Complete all steps to update the data",
            Style::default().fg(Color::Blue),
        ))
        .alignment(Alignment::Center),
        rows[0],
    );

    render_step(frame, rows[1], 1, "Select Column");
    render_column_field(frame, app, rows[2]);
    render_step(frame, rows[3], 2, "Enter NNO Numbers");
    render_nno_field(frame, app, rows[4]);
    frame.render_widget(
        Paragraph::new(Span::styled(
            " Example: 1234, 5678, 9012",
            Style::default().fg(Color::DarkGray),
        )),
        rows[5],
    );
    render_step(frame, rows[6], 3, "Select Date");
    render_date_row(frame, app, rows[7]);
    render_message(frame, app, rows[8]);
    render_submit(frame, app, rows[9]);
    render_key_help(frame, app, rows[11]);
}

fn render_step(frame: &mut Frame, area: Rect, number: u8, title: &str) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", number),
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}", title),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(focus_color(focused)))
        .title(title)
        .padding(Padding::horizontal(1))
}

fn render_column_field(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focused_field == FormField::Column;
    let arrow = if app.column_menu.is_some() { "▴" } else { "▾" };
    let value = match app.column_display() {
        Some(label) => Span::styled(label, Style::default().fg(Color::White)),
        None => Span::styled(
            "Choose the column to update",
            Style::default().fg(Color::DarkGray),
        ),
    };
    let line = Line::from(vec![
        value,
        Span::styled(format!(" {}", arrow), Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(field_block(" Column to Update ", focused)),
        area,
    );
    app.layout.column = area;
}

fn render_nno_field(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focused_field == FormField::Nno;
    let input = &app.form.nno_input;

    let line = if input.value.is_empty() && !focused {
        Line::from(Span::styled(
            "Enter NNO numbers, separated by commas",
            Style::default().fg(Color::DarkGray),
        ))
    } else if focused && !app.form.is_submitting() {
        let (before, after) = input.split_at_cursor();
        Line::from(format!("{}█{}", before, after))
    } else {
        Line::from(input.value.clone())
    };

    frame.render_widget(
        Paragraph::new(line)
            .style(Style::default().fg(Color::White))
            .block(field_block(" NNO Numbers ", focused)),
        area,
    );
    app.layout.nno = area;
}

fn render_date_row(frame: &mut Frame, app: &mut App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(16)])
        .split(area);

    let trigger_style = if app.form.date.is_some() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("📅 ", Style::default().fg(Color::Cyan)),
            Span::styled(app.date_display(), trigger_style),
        ]))
        .block(field_block(
            " Date ",
            app.focused_field == FormField::Date || app.form.is_date_picker_open(),
        )),
        cols[0],
    );

    frame.render_widget(
        Paragraph::new("Clear Date")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray))
            .block(
                Block::default().borders(Borders::ALL).border_style(
                    Style::default().fg(focus_color(app.focused_field == FormField::ClearDate)),
                ),
            ),
        cols[1],
    );

    app.layout.date_trigger = cols[0];
    app.layout.clear_date = cols[1];
}

fn render_message(frame: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match (&app.form.error, &app.form.success) {
        (Some(error), _) => (error.as_str(), Color::Red),
        (None, Some(success)) => (success.as_str(), Color::Green),
        (None, None) => return,
    };

    frame.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(color)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            ),
        area,
    );
}

fn render_submit(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focused_field == FormField::Submit;
    let submitting = app.form.is_submitting();
    let border_color = if submitting {
        Color::DarkGray
    } else if focused {
        Color::Yellow
    } else {
        Color::Blue
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    app.layout.submit = area;
    if inner.is_empty() {
        return;
    }

    if submitting {
        const LABEL: &str = "Updating...";
        let width = (LABEL.len() as u16 + 2).min(inner.width);
        let spinner_area = Rect {
            x: inner.x + (inner.width - width) / 2,
            y: inner.y,
            width,
            height: 1,
        };
        let throbber = throbber_widgets_tui::Throbber::default()
            .label(LABEL)
            .style(Style::default().fg(Color::DarkGray))
            .throbber_style(Style::default().fg(Color::Yellow))
            .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
            .use_type(throbber_widgets_tui::WhichUse::Spin);
        frame.render_stateful_widget(throbber, spinner_area, &mut app.throbber_state);
    } else {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Update",
                Style::default()
                    .fg(if focused { Color::Yellow } else { Color::White })
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            inner,
        );
    }
}

fn render_key_help(frame: &mut Frame, app: &App, area: Rect) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
    let mut spans = vec![
        key("Tab"),
        Span::raw(": Next  "),
        key("Enter"),
        Span::raw(": Select  "),
        key("Ctrl+S"),
        Span::raw(": Update  "),
        key("Ctrl+Q"),
        Span::raw(": Quit"),
    ];
    let target = if app.dev_mode {
        "  [dev backend]".to_string()
    } else {
        format!("  {}", app.api_url)
    };
    spans.push(Span::styled(target, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
