use crate::app::{App, FormField};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Position;

use super::super::action_queue::ActionTx;
use super::submit;

pub(super) fn handle_form_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Tab => return app.focus_next(),
        KeyCode::BackTab => return app.focus_previous(),
        KeyCode::Char('s') | KeyCode::Char('S')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            return submit(app, action_tx);
        }
        _ => {}
    }

    // Only focus moves while a request is in flight.
    if app.form.is_submitting() {
        match key.code {
            KeyCode::Down => app.focus_next(),
            KeyCode::Up => app.focus_previous(),
            _ => {}
        }
        return;
    }

    match app.focused_field {
        FormField::Nno => handle_nno_key(key, app, action_tx),
        FormField::Column => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => app.open_column_menu(),
            KeyCode::Down => app.focus_next(),
            KeyCode::Up => app.focus_previous(),
            _ => {}
        },
        FormField::Date => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => app.toggle_date_picker(),
            KeyCode::Delete | KeyCode::Backspace => app.form.clear_date(),
            KeyCode::Down => app.focus_next(),
            KeyCode::Up => app.focus_previous(),
            _ => {}
        },
        FormField::ClearDate => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => app.form.clear_date(),
            KeyCode::Down => app.focus_next(),
            KeyCode::Up => app.focus_previous(),
            _ => {}
        },
        FormField::Submit => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => submit(app, action_tx),
            KeyCode::Down => app.focus_next(),
            KeyCode::Up => app.focus_previous(),
            _ => {}
        },
    }
}

fn handle_nno_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let input = &mut app.form.nno_input;
    match key.code {
        KeyCode::Char('x') | KeyCode::Char('X')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            input.clear();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.home(),
        KeyCode::End => input.end(),
        // Enter in the text field submits, like a browser form.
        KeyCode::Enter => submit(app, action_tx),
        KeyCode::Down => app.focus_next(),
        KeyCode::Up => app.focus_previous(),
        _ => {}
    }
}

pub(super) fn handle_form_pointer(pos: Position, app: &mut App, action_tx: &ActionTx) {
    let Some(field) = app.layout.field_at(pos) else {
        return;
    };
    app.focus(field);
    if app.form.is_submitting() {
        return;
    }

    match field {
        FormField::Column => app.open_column_menu(),
        FormField::Nno => app.form.nno_input.end(),
        FormField::Date => app.toggle_date_picker(),
        FormField::ClearDate => app.form.clear_date(),
        FormField::Submit => submit(app, action_tx),
    }
}
