//! Resume content schema: per-section validation rule-sets plus the shared
//! primitives they are built from.
//!
//! Validation is pure and synchronous. Each section schema checks its slice
//! of the document and appends field-scoped violations; nothing
//! short-circuits, so one pass yields the complete report.

pub mod basics;
pub mod education;
pub mod handlers;
pub mod languages;
pub mod location;
pub mod primitives;
pub mod projects;
pub mod report;
pub mod skills;
pub mod work;

pub use report::{ValidationReport, Violation, ViolationKind};

use crate::models::resume::{Resume, SectionId};

/// Validates a whole document against the section schemas.
///
/// `basics` and `education` are mandatory (education must be non-empty);
/// every other section validates only when present. `computed` sub-objects
/// and `layout` are typed elsewhere and carry no rules here.
pub fn validate_resume(resume: &Resume) -> ValidationReport {
    let mut violations = Vec::new();
    let content = &resume.content;

    match &content.basics {
        Some(basics) => {
            basics::validate_basics(basics, SectionId::Basics.as_str(), &mut violations)
        }
        None => violations.push(Violation::missing_required("", SectionId::Basics.as_str())),
    }

    if let Some(location) = &content.location {
        location::validate_location(location, SectionId::Location.as_str(), &mut violations);
    }

    if let Some(items) = content.work.as_deref() {
        work::validate_work(items, &mut violations);
    }

    match content.education.as_deref() {
        Some(items) if !items.is_empty() => education::validate_education(items, &mut violations),
        // Absent and present-but-empty both fail the mandatory-section rule.
        _ => violations.push(Violation::missing_required(
            "",
            SectionId::Education.as_str(),
        )),
    }

    if let Some(items) = content.skills.as_deref() {
        skills::validate_skills(items, &mut violations);
    }

    if let Some(items) = content.projects.as_deref() {
        projects::validate_projects(items, &mut violations);
    }

    if let Some(items) = content.languages.as_deref() {
        languages::validate_languages(items, &mut violations);
    }

    ValidationReport { violations }
}
