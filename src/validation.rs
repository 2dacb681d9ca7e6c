use chrono::NaiveDate;

use crate::error::{MpmError, MpmResult};

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> MpmResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(MpmError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Rejects birth dates after `today`. Today itself is allowed.
pub fn not_in_future(date: NaiveDate, today: NaiveDate) -> MpmResult<NaiveDate> {
    if date > today {
        Err(MpmError::FutureBirthDate { date })
    } else {
        Ok(date)
    }
}

/// Trims free text; whitespace-only collapses to empty.
pub fn trim_text(value: &str) -> String {
    value.trim().to_string()
}

/// Trims an optional string, returning None if blank.
pub fn trim_optional(value: Option<&str>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
