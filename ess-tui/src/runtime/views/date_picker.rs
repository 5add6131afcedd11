use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, MouseButton};
use ratatui::layout::Position;

pub(super) fn handle_date_picker_key(key: KeyEvent, app: &mut App) {
    let Some(picker) = app.form.date_picker.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => picker.move_days(-1),
        KeyCode::Right | KeyCode::Char('l') => picker.move_days(1),
        KeyCode::Up | KeyCode::Char('k') => picker.move_days(-7),
        KeyCode::Down | KeyCode::Char('j') => picker.move_days(7),
        KeyCode::PageUp => picker.previous_month(),
        KeyCode::PageDown => picker.next_month(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let date = picker.cursor;
            app.form.pick_date(date);
        }
        KeyCode::Delete | KeyCode::Backspace => app.form.clear_date(),
        KeyCode::Esc => app.form.close_date_picker(),
        _ => {}
    }
}

/// Pointer-down while the calendar is open. Anything outside the calendar
/// and its trigger closes it and is not passed on to the form.
pub(super) fn handle_date_picker_pointer(pos: Position, button: MouseButton, app: &mut App) {
    let layout = &app.layout;

    if layout.calendar.contains(pos) {
        if button != MouseButton::Left {
            return;
        }
        if let Some(date) = layout.day_at(pos) {
            app.form.pick_date(date);
        } else if layout.prev_month.contains(pos) {
            if let Some(picker) = app.form.date_picker.as_mut() {
                picker.previous_month();
            }
        } else if layout.next_month.contains(pos) {
            if let Some(picker) = app.form.date_picker.as_mut() {
                picker.next_month();
            }
        }
    } else if layout.date_trigger.contains(pos) {
        if button == MouseButton::Left {
            app.toggle_date_picker();
        }
    } else {
        tracing::debug!("pointer-down outside calendar, closing");
        app.form.close_date_picker();
    }
}
