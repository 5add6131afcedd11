use ess_client::Column;
use ratatui::layout::{Position, Rect};
use time::Date;

/// Focusable controls of the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Column,
    Nno,
    Date,
    ClearDate,
    Submit,
}

impl FormField {
    const ORDER: [FormField; 5] = [
        FormField::Column,
        FormField::Nno,
        FormField::Date,
        FormField::ClearDate,
        FormField::Submit,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|f| *f == self)
            .unwrap_or_default()
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// Open column drop-down; `highlighted` indexes into [`Column::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMenu {
    pub highlighted: usize,
}

impl ColumnMenu {
    pub fn new(current: Option<Column>) -> Self {
        let highlighted = current
            .and_then(|c| Column::ALL.iter().position(|x| *x == c))
            .unwrap_or(0);
        Self { highlighted }
    }

    pub fn move_by(&mut self, down: bool) {
        let len = Column::ALL.len();
        self.highlighted = if down {
            (self.highlighted + 1) % len
        } else {
            (self.highlighted + len - 1) % len
        };
    }

    pub fn column(&self) -> Column {
        Column::ALL[self.highlighted % Column::ALL.len()]
    }
}

/// Screen areas of the last rendered frame, used for pointer hit-testing.
/// Written by the renderer every frame.
#[derive(Debug, Clone, Default)]
pub struct FormLayout {
    pub column: Rect,
    pub nno: Rect,
    pub date_trigger: Rect,
    pub clear_date: Rect,
    pub submit: Rect,
    pub column_menu: Rect,
    pub column_options: Vec<(Rect, Column)>,
    pub calendar: Rect,
    pub prev_month: Rect,
    pub next_month: Rect,
    pub calendar_days: Vec<(Rect, Date)>,
}

impl FormLayout {
    pub fn field_at(&self, pos: Position) -> Option<FormField> {
        [
            (self.column, FormField::Column),
            (self.nno, FormField::Nno),
            (self.date_trigger, FormField::Date),
            (self.clear_date, FormField::ClearDate),
            (self.submit, FormField::Submit),
        ]
        .into_iter()
        .find(|(area, _)| area.contains(pos))
        .map(|(_, field)| field)
    }

    pub fn day_at(&self, pos: Position) -> Option<Date> {
        self.calendar_days
            .iter()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, date)| *date)
    }

    pub fn column_option_at(&self, pos: Position) -> Option<Column> {
        self.column_options
            .iter()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, column)| *column)
    }
}

/// Single-line text input with a byte-offset cursor kept on char boundaries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    #[cfg(test)]
    pub fn with_value(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some((idx, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.value.replace_range(idx..self.cursor, "");
            self.cursor = idx;
        }
    }

    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// (before, after) the cursor.
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(self.cursor)
    }
}
