// src/domain/validation.rs
use serde::Serialize;
use std::fmt;

/// A single rule broken by request input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub msg: String,
    pub param: String,
    pub location: &'static str,
}

impl FieldViolation {
    pub fn body(param: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            param: param.into(),
            location: "body",
        }
    }
}

/// Accumulates every violation found while checking one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: FieldViolation) {
        self.0.push(violation);
    }

    /// Records `msg` against `param` when the value is missing or blank.
    pub fn require(&mut self, param: &str, value: Option<&str>, msg: &str) {
        if value.is_none_or(|v| v.trim().is_empty()) {
            self.push(FieldViolation::body(param, msg));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<FieldViolation> {
        self.0
    }

    /// `Ok(())` when nothing was recorded, otherwise the collected violations.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|v| format!("{}: {}", v.param, v.msg))
            .collect::<Vec<_>>()
            .join(", ");
        f.write_str(&joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_flags_missing_and_blank_values() {
        let mut violations = Violations::new();
        violations.require("title", None, "title is required");
        violations.require("company", Some("   "), "company is required");
        violations.require("from", Some("2020-01-01"), "from is required");

        assert_eq!(violations.len(), 2);
        let params: Vec<_> = violations.iter().map(|v| v.param.as_str()).collect();
        assert_eq!(params, vec!["title", "company"]);
        assert!(violations.into_result().is_err());
    }

    #[test]
    fn empty_collector_is_ok() {
        assert!(Violations::new().into_result().is_ok());
    }
}
