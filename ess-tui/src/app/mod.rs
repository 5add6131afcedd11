use ess_client::Column;
use time::Date;

use crate::config::EssConfig;

mod date_picker;
mod form;
mod state;
pub use date_picker::format_long_date;
pub use form::FormState;
#[cfg(test)]
pub(crate) use form::SUCCESS_MESSAGE;
pub use state::{ColumnMenu, FormField, FormLayout, TextInput};

pub struct App {
    pub running: bool,
    pub form: FormState,
    pub focused_field: FormField,
    pub column_menu: Option<ColumnMenu>,

    // Hit areas from the last rendered frame
    pub layout: FormLayout,

    // Loading indicator
    pub throbber_state: throbber_widgets_tui::ThrobberState,

    pub api_url: String,
    pub dev_mode: bool,
    pub today: Date,
}

impl App {
    pub fn new(cfg: &EssConfig, dev_mode: bool, today: Date) -> Self {
        Self {
            running: true,
            form: FormState::default(),
            focused_field: FormField::Column,
            column_menu: None,
            layout: FormLayout::default(),
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
            api_url: cfg.api_url.clone(),
            dev_mode,
            today,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Close overlays on shutdown so no pointer routing outlives the form.
    pub fn teardown(&mut self) {
        self.column_menu = None;
        self.form.close_date_picker();
    }

    pub fn focus(&mut self, field: FormField) {
        self.focused_field = field;
    }

    pub fn focus_next(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn focus_previous(&mut self) {
        self.focused_field = self.focused_field.previous();
    }

    pub fn open_column_menu(&mut self) {
        self.focused_field = FormField::Column;
        self.column_menu = Some(ColumnMenu::new(self.form.column));
    }

    pub fn close_column_menu(&mut self) {
        self.column_menu = None;
    }

    pub fn choose_column(&mut self, column: Column) {
        self.form.select_column(column);
        self.column_menu = None;
    }

    pub fn toggle_date_picker(&mut self) {
        self.focused_field = FormField::Date;
        self.form.toggle_date_picker(self.today);
    }

    pub fn column_display(&self) -> Option<&'static str> {
        self.form.column.map(|c| c.label())
    }

    pub fn date_display(&self) -> String {
        self.form
            .date
            .map(format_long_date)
            .unwrap_or_else(|| "Pick a date".to_string())
    }
}

#[cfg(test)]
pub(crate) fn test_app() -> App {
    App::new(
        &EssConfig::default(),
        false,
        time::macros::date!(2024 - 04 - 15),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn choosing_column_closes_menu() {
        let mut app = test_app();
        app.open_column_menu();
        app.choose_column(Column::ScriptDueDate);
        assert!(app.column_menu.is_none());
        assert_eq!(app.column_display(), Some("Script Due Date"));
    }

    #[test]
    fn date_display_falls_back_to_placeholder() {
        let mut app = test_app();
        assert_eq!(app.date_display(), "Pick a date");
        app.form.date = Some(date!(2024 - 04 - 05));
        assert_eq!(app.date_display(), "April 5th, 2024");
    }

    #[test]
    fn teardown_closes_overlays() {
        let mut app = test_app();
        app.toggle_date_picker();
        app.open_column_menu();
        app.teardown();
        assert!(!app.form.is_date_picker_open());
        assert!(app.column_menu.is_none());
    }
}
