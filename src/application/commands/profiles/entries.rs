// Input checks shared by the experience and education commands.
use crate::domain::{
    profile::parse_entry_date,
    validation::{FieldViolation, Violations},
};
use chrono::{DateTime, Utc};

/// Trimmed value of a mandatory text field, recording `msg` when blank.
pub(super) fn required_text(
    violations: &mut Violations,
    param: &str,
    value: Option<String>,
    msg: &str,
) -> Option<String> {
    violations.require(param, value.as_deref(), msg);
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

pub(super) fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parses a date field. Blank input yields `None`; unparsable input is
/// recorded as a violation.
pub(super) fn date_field(
    violations: &mut Violations,
    param: &str,
    value: Option<&str>,
) -> Option<DateTime<Utc>> {
    let raw = value.filter(|v| !v.trim().is_empty())?;
    match parse_entry_date(raw) {
        Ok(date) => Some(date),
        Err(_) => {
            violations.push(FieldViolation::body(
                param,
                format!("{param} must be a valid date"),
            ));
            None
        }
    }
}

/// A mandatory date is reported either missing or malformed, never both.
pub(super) fn required_date(
    violations: &mut Violations,
    param: &str,
    value: Option<&str>,
    msg: &str,
) -> Option<DateTime<Utc>> {
    if value.is_none_or(|v| v.trim().is_empty()) {
        violations.push(FieldViolation::body(param, msg));
        return None;
    }
    date_field(violations, param, value)
}
