use time::{util::days_in_year_month, Date, Duration, Month};

/// Calendar overlay state. Only exists while the overlay is open: the
/// event loop routes pointer-down events to it for as long as it is alive,
/// so dropping it is what ends outside-click detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePicker {
    /// Highlighted day; the visible month is the cursor's month.
    pub cursor: Date,
}

impl DatePicker {
    pub fn new(anchor: Date) -> Self {
        Self { cursor: anchor }
    }

    pub fn year(&self) -> i32 {
        self.cursor.year()
    }

    pub fn month(&self) -> Month {
        self.cursor.month()
    }

    pub fn move_days(&mut self, days: i64) {
        if let Some(date) = self.cursor.checked_add(Duration::days(days)) {
            self.cursor = date;
        }
    }

    pub fn next_month(&mut self) {
        let (year, month) = match self.month() {
            Month::December => (self.year() + 1, Month::January),
            m => (self.year(), m.next()),
        };
        self.jump_to(year, month);
    }

    pub fn previous_month(&mut self) {
        let (year, month) = match self.month() {
            Month::January => (self.year() - 1, Month::December),
            m => (self.year(), m.previous()),
        };
        self.jump_to(year, month);
    }

    fn jump_to(&mut self, year: i32, month: Month) {
        let day = self.cursor.day().min(days_in_year_month(year, month));
        if let Ok(date) = Date::from_calendar_date(year, month, day) {
            self.cursor = date;
        }
    }

    pub fn grid(&self) -> Vec<[Option<Date>; 7]> {
        month_grid(self.year(), self.month())
    }
}

/// Weeks of a month, Monday first. Cells outside the month are `None`.
pub fn month_grid(year: i32, month: Month) -> Vec<[Option<Date>; 7]> {
    let Ok(first) = Date::from_calendar_date(year, month, 1) else {
        return Vec::new();
    };
    let lead = first.weekday().number_days_from_monday() as usize;
    let days = days_in_year_month(year, month) as usize;

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    for offset in 0..days {
        let slot = (lead + offset) % 7;
        week[slot] = first.checked_add(Duration::days(offset as i64));
        if slot == 6 {
            weeks.push(week);
            week = [None; 7];
        }
    }
    if week.iter().any(Option::is_some) {
        weeks.push(week);
    }
    weeks
}

/// "April 5th, 2024".
pub fn format_long_date(date: Date) -> String {
    let day = date.day();
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{} {}{}, {}", date.month(), day, suffix, date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn long_date_uses_ordinal_suffix() {
        assert_eq!(format_long_date(date!(2024 - 04 - 05)), "April 5th, 2024");
        assert_eq!(format_long_date(date!(2024 - 03 - 01)), "March 1st, 2024");
        assert_eq!(format_long_date(date!(2024 - 03 - 22)), "March 22nd, 2024");
        assert_eq!(format_long_date(date!(2024 - 03 - 13)), "March 13th, 2024");
        assert_eq!(format_long_date(date!(2024 - 03 - 31)), "March 31st, 2024");
    }

    #[test]
    fn april_2024_starts_on_monday() {
        let grid = month_grid(2024, Month::April);
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[0][0], Some(date!(2024 - 04 - 01)));
        assert_eq!(grid[4][1], Some(date!(2024 - 04 - 30)));
        assert_eq!(grid[4][2], None);
    }

    #[test]
    fn leading_cells_are_empty() {
        // 1 Feb 2024 is a Thursday.
        let grid = month_grid(2024, Month::February);
        assert_eq!(grid[0][..3], [None, None, None]);
        assert_eq!(grid[0][3], Some(date!(2024 - 02 - 01)));
        let last = grid.last().unwrap();
        assert!(last.contains(&Some(date!(2024 - 02 - 29))));
    }

    #[test]
    fn month_navigation_clamps_day() {
        let mut picker = DatePicker::new(date!(2024 - 01 - 31));
        picker.next_month();
        assert_eq!(picker.cursor, date!(2024 - 02 - 29));
        picker.previous_month();
        picker.previous_month();
        assert_eq!(picker.cursor, date!(2023 - 12 - 29));
    }

    #[test]
    fn day_moves_cross_month_boundaries() {
        let mut picker = DatePicker::new(date!(2024 - 04 - 29));
        picker.move_days(7);
        assert_eq!(picker.cursor, date!(2024 - 05 - 06));
        picker.move_days(-6);
        assert_eq!(picker.cursor, date!(2024 - 04 - 30));
    }
}
