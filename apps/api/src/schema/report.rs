use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    /// Character count outside the declared `[min, max]` bounds.
    LengthViolation {
        min: usize,
        max: usize,
        actual: usize,
    },
    /// Value is not a member of the named option set.
    InvalidChoice { options: String },
    /// A required field is absent.
    MissingRequiredField,
}

/// A single field-scoped validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Dotted path with array indices, e.g. `work[2].company`.
    pub path: String,
    #[serde(flatten)]
    pub kind: ViolationKind,
}

impl Violation {
    pub fn new(path: String, kind: ViolationKind) -> Self {
        Violation { path, kind }
    }

    pub fn missing_required(scope: &str, field: &str) -> Self {
        Violation {
            path: join_path(scope, field),
            kind: ViolationKind::MissingRequiredField,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::LengthViolation { min, max, actual } => write!(
                f,
                "{}: length must be between {} and {} characters (got {})",
                self.path, min, max, actual
            ),
            ViolationKind::InvalidChoice { options } => {
                write!(f, "{}: not a valid {} option", self.path, options)
            }
            ViolationKind::MissingRequiredField => {
                write!(f, "{}: required field is missing", self.path)
            }
        }
    }
}

/// Aggregate outcome of validating a document or a section.
///
/// Every rule is evaluated; validation never short-circuits on the first
/// failure, so the report carries all violations at once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Joins a scope prefix and a field name into a dotted path.
/// An empty scope yields the bare field name (document-level violations).
pub fn join_path(scope: &str, field: &str) -> String {
    if scope.is_empty() {
        field.to_string()
    } else {
        format!("{scope}.{field}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_path_with_and_without_scope() {
        assert_eq!(join_path("", "basics"), "basics");
        assert_eq!(join_path("work[2]", "company"), "work[2].company");
    }

    #[test]
    fn test_violation_display_length() {
        let v = Violation::new(
            "location.city".to_string(),
            ViolationKind::LengthViolation {
                min: 2,
                max: 64,
                actual: 1,
            },
        );
        assert_eq!(
            v.to_string(),
            "location.city: length must be between 2 and 64 characters (got 1)"
        );
    }

    #[test]
    fn test_violation_serializes_flat() {
        let v = Violation::missing_required("", "education");
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "path": "education", "kind": "missing_required_field" })
        );
    }

    #[test]
    fn test_report_validity() {
        let mut report = ValidationReport::default();
        assert!(report.is_valid());
        report.violations.push(Violation::missing_required("", "basics"));
        assert!(!report.is_valid());
    }
}
