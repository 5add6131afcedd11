use crate::app::App;
use ratatui::{layout::Rect, Frame};

mod calendar;
mod column_menu;
mod form_view;
pub(super) mod utils;

const FORM_WIDTH: u16 = 72;
const FORM_HEIGHT: u16 = 26;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = utils::centered_rect(FORM_WIDTH, FORM_HEIGHT, frame.area());
    form_view::render_form(frame, app, area);

    if app.column_menu.is_some() {
        column_menu::render_column_menu(frame, app);
    } else {
        app.layout.column_menu = Rect::default();
        app.layout.column_options.clear();
    }

    // Calendar renders last so it sits above everything else.
    if app.form.is_date_picker_open() {
        calendar::render_calendar(frame, app);
    } else {
        app.layout.calendar = Rect::default();
        app.layout.prev_month = Rect::default();
        app.layout.next_month = Rect::default();
        app.layout.calendar_days.clear();
    }
}
