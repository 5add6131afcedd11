use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, MouseButton};
use ratatui::layout::Position;

pub(super) fn handle_column_menu_key(key: KeyEvent, app: &mut App) {
    let Some(menu) = app.column_menu.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => menu.move_by(true),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => menu.move_by(false),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let column = menu.column();
            app.choose_column(column);
        }
        KeyCode::Esc => app.close_column_menu(),
        _ => {}
    }
}

pub(super) fn handle_column_menu_pointer(pos: Position, button: MouseButton, app: &mut App) {
    if app.layout.column_menu.contains(pos) {
        if button == MouseButton::Left {
            if let Some(column) = app.layout.column_option_at(pos) {
                app.choose_column(column);
            }
        }
        return;
    }
    app.close_column_menu();
}
