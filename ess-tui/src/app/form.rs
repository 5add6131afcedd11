use ess_client::{Column, UpdateError, UpdateRequest, UpdateResponse};
use time::Date;

use super::date_picker::DatePicker;
use super::state::TextInput;

pub const SUCCESS_MESSAGE: &str = "Updated successfully";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
}

/// Everything the update form holds. All changes that touch more than one
/// field go through the transition methods below so that the
/// error/success/loading rules hold:
/// - `error` and `success` are never both set
/// - both are cleared when a submit attempt starts
/// - the phase is back to `Idle` on every exit from a submit attempt
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub column: Option<Column>,
    pub nno_input: TextInput,
    pub date: Option<Date>,
    pub date_picker: Option<DatePicker>,
    pub phase: SubmitPhase,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl FormState {
    pub fn is_submitting(&self) -> bool {
        self.phase != SubmitPhase::Idle
    }

    pub fn is_date_picker_open(&self) -> bool {
        self.date_picker.is_some()
    }

    pub fn select_column(&mut self, column: Column) {
        self.column = Some(column);
    }

    /// Open the calendar on the selected date, or on `today` when none is set.
    pub fn open_date_picker(&mut self, today: Date) {
        let anchor = self.date.unwrap_or(today);
        self.date_picker = Some(DatePicker::new(anchor));
    }

    pub fn close_date_picker(&mut self) {
        self.date_picker = None;
    }

    pub fn toggle_date_picker(&mut self, today: Date) {
        if self.is_date_picker_open() {
            self.close_date_picker();
        } else {
            self.open_date_picker(today);
        }
    }

    /// Commit a day from the calendar and close it.
    pub fn pick_date(&mut self, date: Date) {
        self.date = Some(date);
        self.close_date_picker();
    }

    pub fn clear_date(&mut self) {
        self.date = None;
    }

    /// Start a submit attempt. Returns the request to send, or `None` when
    /// validation failed (the error is already set) or a request is in
    /// flight.
    pub fn begin_submit(&mut self) -> Option<UpdateRequest> {
        if self.is_submitting() {
            return None;
        }

        self.error = None;
        self.success = None;
        self.phase = SubmitPhase::Validating;

        match UpdateRequest::build(self.column, &self.nno_input.value, self.date) {
            Ok(request) => {
                self.phase = SubmitPhase::Submitting;
                Some(request)
            }
            Err(e) => {
                tracing::debug!("validation failed: {}", e);
                self.error = Some(e.to_string());
                self.phase = SubmitPhase::Idle;
                None
            }
        }
    }

    /// Apply the outcome of the in-flight request.
    pub fn finish_submit(&mut self, outcome: Result<UpdateResponse, UpdateError>) {
        if self.phase != SubmitPhase::Submitting {
            tracing::warn!("ignoring update result with no submission in flight");
            return;
        }
        self.phase = SubmitPhase::Idle;

        match outcome {
            Ok(_) => {
                self.error = None;
                self.success = Some(SUCCESS_MESSAGE.to_string());
                self.nno_input.clear();
                self.column = None;
                self.date = None;
            }
            Err(e) => {
                self.success = None;
                self.error = Some(e.to_string());
            }
        }
    }
}
