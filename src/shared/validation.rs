use serde::Serialize;
use std::fmt;

use crate::shared::month_year::MonthYear;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// Client-correctable input problem. Displays as the first violated rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            violations: vec![FieldViolation {
                field,
                message: message.into(),
            }],
        }
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn message(&self) -> &str {
        self.violations
            .first()
            .map(|v| v.message.as_str())
            .unwrap_or("Invalid payload")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Collects field violations in declaration order.
///
/// Each check returns the normalized value so a payload can be turned into
/// its validated form in one pass, and `finish` decides the outcome.
#[derive(Debug, Default)]
pub struct Validator {
    violations: Vec<FieldViolation>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn violate(&mut self, field: &'static str, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field,
            message: message.into(),
        });
    }

    /// Trimmed value; absent or blank input is reported as `"<label> is required"`.
    pub fn required(&mut self, field: &'static str, label: &str, value: Option<String>) -> String {
        let value = value.map(|v| v.trim().to_string()).unwrap_or_default();
        if value.is_empty() {
            self.violate(field, format!("{label} is required"));
        }
        value
    }

    /// Like `required`, plus a minimum character count.
    pub fn required_min(
        &mut self,
        field: &'static str,
        label: &str,
        value: Option<String>,
        min: usize,
    ) -> String {
        let value = value.map(|v| v.trim().to_string()).unwrap_or_default();
        if value.is_empty() {
            self.violate(field, format!("{label} is required"));
        } else if value.chars().count() < min {
            self.violate(field, format!("{label} must be at least {min} characters"));
        }
        value
    }

    pub fn month_year(&mut self, field: &'static str, value: &str) {
        if !MonthYear::is_valid(value) {
            self.violate(
                field,
                format!(
                    "{value} is not a valid date format! Use \"Month Year\" format (e.g., \"January 2024\")"
                ),
            );
        }
    }

    /// Empty means "ongoing"; anything else must be a valid month-year.
    pub fn optional_month_year(&mut self, field: &'static str, value: Option<String>) -> String {
        let value = value.map(|v| v.trim().to_string()).unwrap_or_default();
        if !value.is_empty() {
            self.month_year(field, &value);
        }
        value
    }

    /// Drops blank entries, then requires at least one to remain.
    pub fn non_empty_list(
        &mut self,
        field: &'static str,
        message: &str,
        items: Option<Vec<String>>,
    ) -> Vec<String> {
        let items = clean_list(items.unwrap_or_default());
        if items.is_empty() {
            self.violate(field, message);
        }
        items
    }

    pub fn non_negative(&mut self, field: &'static str, label: &str, value: Option<i32>) -> Option<i32> {
        if matches!(value, Some(n) if n < 0) {
            self.violate(field, format!("{label} must not be negative"));
        }
        value
    }

    pub fn finish<T>(self, value: T) -> Result<T, ValidationError> {
        if self.violations.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError {
                violations: self.violations,
            })
        }
    }
}

pub fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
