use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::action_queue::{Action, ActionTx};

mod column_menu;
mod date_picker;
mod form;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

/// Run validation and queue the request if it passed.
fn submit(app: &mut App, action_tx: &ActionTx) {
    if let Some(request) = app.form.begin_submit() {
        enqueue_action(action_tx, Action::SubmitUpdate(request));
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(
            key.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('c') | KeyCode::Char('C')
        )
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if is_quit_key(&key) {
        app.quit();
        return;
    }

    if app.form.is_date_picker_open() {
        date_picker::handle_date_picker_key(key, app);
    } else if app.column_menu.is_some() {
        column_menu::handle_column_menu_key(key, app);
    } else {
        form::handle_form_key(key, app, action_tx);
    }
}

pub(super) fn handle_mouse(mouse: MouseEvent, app: &mut App, action_tx: &ActionTx) {
    let MouseEventKind::Down(button) = mouse.kind else {
        return;
    };
    let pos = Position::new(mouse.column, mouse.row);

    // Overlays see every pointer-down while they are open.
    if app.form.is_date_picker_open() {
        date_picker::handle_date_picker_pointer(pos, button, app);
    } else if app.column_menu.is_some() {
        column_menu::handle_column_menu_pointer(pos, button, app);
    } else if button == MouseButton::Left {
        form::handle_form_pointer(pos, app, action_tx);
    }
}
