use crate::app::App;
use ess_client::Column;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

/// Drop-down under the column field.
pub fn render_column_menu(frame: &mut Frame, app: &mut App) {
    let Some(menu) = app.column_menu else {
        return;
    };
    let anchor = app.layout.column;
    let area = Rect {
        x: anchor.x,
        y: anchor.y.saturating_add(anchor.height),
        width: anchor.width,
        height: Column::ALL.len() as u16 + 2,
    }
    .intersection(frame.area());
    if area.is_empty() {
        return;
    }
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = Column::ALL
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let marker = if app.form.column == Some(*column) {
                "● "
            } else {
                "  "
            };
            let style = if i == menu.highlighted {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("{}{}", marker, column.label())).style(style)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(List::new(items).block(block), area);

    app.layout.column_menu = area;
    app.layout.column_options = Column::ALL
        .iter()
        .enumerate()
        .filter_map(|(i, column)| {
            let row = Rect {
                x: inner.x,
                y: inner.y + i as u16,
                width: inner.width,
                height: 1,
            }
            .intersection(inner);
            (!row.is_empty()).then_some((row, *column))
        })
        .collect();
}
