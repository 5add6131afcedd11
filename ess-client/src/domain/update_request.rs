use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::Date;

use super::Column;

/// Body of `PUT /ess/update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRequest {
    /// `dd-MM-yyyy`, or `null` to clear the column.
    pub date: Option<String>,
    pub nno: Vec<i64>,
    pub column: Column,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("NNO numbers and column selection are required")]
    MissingRequiredFields,
    #[error("Please enter valid NNO numbers")]
    NoValidNno,
}

impl UpdateRequest {
    /// Validate raw form input and turn it into a request.
    ///
    /// `nno_text` is only checked for emptiness before parsing; a text that
    /// holds nothing but separators or junk fails with
    /// [`ValidationError::NoValidNno`] instead.
    pub fn build(
        column: Option<Column>,
        nno_text: &str,
        date: Option<Date>,
    ) -> Result<Self, ValidationError> {
        let column = match column {
            Some(column) if !nno_text.is_empty() => column,
            _ => return Err(ValidationError::MissingRequiredFields),
        };

        let nno = parse_nno_list(nno_text);
        if nno.is_empty() {
            return Err(ValidationError::NoValidNno);
        }

        Ok(Self {
            date: date.map(format_wire_date),
            nno,
            column,
        })
    }
}

/// Split on commas and keep the leading integer of every token, in order.
/// `"12abc"` reads as 12 and `"1.5"` as 1; tokens without leading digits
/// are dropped.
pub fn parse_nno_list(text: &str) -> Vec<i64> {
    text.split(',')
        .map(str::trim)
        .filter_map(parse_leading_int)
        .collect()
}

/// Optional sign followed by the longest run of ASCII digits. Runs too
/// large for `i64` are dropped.
fn parse_leading_int(token: &str) -> Option<i64> {
    let sign_len = usize::from(token.starts_with(['+', '-']));
    let digit_len = token[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digit_len == 0 {
        return None;
    }

    let number = &token[..sign_len + digit_len];
    match number.parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => {
            tracing::debug!("dropping NNO token {:?}: {}", token, e);
            None
        }
    }
}

/// Format a date the way the ESS service expects it: `dd-MM-yyyy`.
pub fn format_wire_date(date: Date) -> String {
    format!(
        "{:02}-{:02}-{:04}",
        date.day(),
        date.month() as u8,
        date.year()
    )
}

/// Successful response of `PUT /ess/update`. The service only promises a
/// JSON body, so it is kept as-is.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct UpdateResponse(pub serde_json::Value);

impl UpdateResponse {
    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(serde_json::Value::as_str)
    }
}

/// Error payload of a rejected update.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::date;

    #[test]
    fn parse_drops_non_numeric_tokens_and_keeps_order() {
        assert_eq!(parse_nno_list("12, abc, 34"), vec![12, 34]);
        assert_eq!(parse_nno_list("34,12"), vec![34, 12]);
    }

    #[test]
    fn parse_trims_whitespace_and_skips_empty_tokens() {
        assert_eq!(parse_nno_list("  1 ,, 2 ,3  ,"), vec![1, 2, 3]);
        assert!(parse_nno_list(" , ,").is_empty());
    }

    #[test]
    fn parse_reads_leading_integer_of_each_token() {
        assert_eq!(parse_nno_list("12abc, 7, 1.5"), vec![12, 7, 1]);
        assert_eq!(parse_nno_list("12abc, 1.5, 7;"), vec![12, 1, 7]);
        assert_eq!(parse_nno_list("1234."), vec![1234]);
    }

    #[test]
    fn parse_accepts_sign_but_needs_digits() {
        assert_eq!(parse_nno_list("-4, +5, -, +x, x1"), vec![-4, 5]);
    }

    #[test]
    fn parse_drops_numbers_too_large_for_i64() {
        assert_eq!(parse_nno_list("99999999999999999999, 5"), vec![5]);
        assert_eq!(parse_nno_list("9223372036854775807"), vec![i64::MAX]);
    }

    #[test]
    fn trailing_dot_still_builds_request() {
        let request = UpdateRequest::build(Some(Column::ScriptDueDate), "1234.", None).unwrap();
        assert_eq!(request.nno, vec![1234]);
    }

    #[test]
    fn missing_column_is_required_error() {
        let err = UpdateRequest::build(None, "1,2", None).unwrap_err();
        assert_eq!(err, ValidationError::MissingRequiredFields);
        assert_eq!(
            err.to_string(),
            "NNO numbers and column selection are required"
        );
    }

    #[test]
    fn empty_nno_text_is_required_error() {
        let err = UpdateRequest::build(Some(Column::ScriptDueDate), "", None).unwrap_err();
        assert_eq!(err, ValidationError::MissingRequiredFields);
    }

    #[test]
    fn junk_nno_text_is_no_valid_nno_error() {
        let err = UpdateRequest::build(Some(Column::ScriptDueDate), "abc, ,x", None).unwrap_err();
        assert_eq!(err, ValidationError::NoValidNno);
        assert_eq!(err.to_string(), "Please enter valid NNO numbers");
    }

    #[test]
    fn request_without_date_serializes_null() {
        let request = UpdateRequest::build(Some(Column::Script2DueDate), "1,2,3", None).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"date": null, "nno": [1, 2, 3], "column": "Script2_DueDate"})
        );
    }

    #[test]
    fn date_is_formatted_day_month_year() {
        let request = UpdateRequest::build(
            Some(Column::ScriptReceiveDate),
            "9",
            Some(date!(2024 - 04 - 05)),
        )
        .unwrap();
        assert_eq!(request.date.as_deref(), Some("05-04-2024"));
    }

    #[test]
    fn response_message_is_optional() {
        let ack = UpdateResponse(json!({"message": "done"}));
        assert_eq!(ack.message(), Some("done"));
        assert_eq!(UpdateResponse(json!([])).message(), None);
    }
}
