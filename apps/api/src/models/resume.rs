use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::layout::ResumeLayout;

/// A complete resume document: authored content plus optional presentation
/// configuration.
///
/// `content` is what the section schemas validate. `layout` is typed
/// configuration consumed by the render pipeline; defaults are the
/// consumer's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    pub content: ResumeContent,
    pub layout: Option<ResumeLayout>,
}

/// The named sections of a resume.
///
/// `basics` and `education` are mandatory; everything else is optional.
/// Required fields inside sections are still `Option` here so that a
/// candidate document always deserializes and validation can report
/// missing fields in one aggregate pass instead of failing at parse.
/// Sequence sections keep their insertion order, which is
/// rendering-significant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeContent {
    pub basics: Option<Basics>,
    pub location: Option<Location>,
    pub work: Option<Vec<WorkItem>>,
    pub education: Option<Vec<EducationItem>>,
    pub skills: Option<Vec<SkillItem>>,
    pub projects: Option<Vec<ProjectItem>>,
    pub languages: Option<Vec<LanguageItem>>,
    pub computed: Option<ComputedContent>,
}

/// Identifier for a top-level resume section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Basics,
    Location,
    Work,
    Education,
    Skills,
    Projects,
    Languages,
}

impl SectionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Basics => "basics",
            SectionId::Location => "location",
            SectionId::Work => "work",
            SectionId::Education => "education",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Languages => "languages",
        }
    }
}

/// Document-level derived values. Outputs of the transform pass only:
/// typed here, never constrained by validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputedContent {
    /// Present sections in render order.
    pub section_names: Option<Vec<SectionId>>,
    /// Every URL found in the document, for link post-processing.
    pub urls: Option<Vec<String>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Single-item sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Basics {
    pub name: Option<String>,
    pub label: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub url: Option<String>,
    pub summary: Option<String>,
    pub profiles: Option<Vec<Profile>>,
    pub computed: Option<BasicsComputed>,
}

/// A social profile under `basics`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub network: Option<String>,
    pub username: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicsComputed {
    pub initials: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub city: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub region: Option<String>,
    pub computed: Option<LocationComputed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationComputed {
    /// Display name for the `country` code, in the layout locale.
    pub country_name: Option<String>,
    /// Single-line formatted address.
    pub formatted: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Sequence sections
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItem {
    pub company: Option<String>,
    pub position: Option<String>,
    pub url: Option<String>,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
    pub summary: Option<String>,
    pub highlights: Option<Vec<String>>,
    pub computed: Option<WorkComputed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkComputed {
    pub date_range: Option<String>,
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationItem {
    pub institution: Option<String>,
    pub area: Option<String>,
    pub degree: Option<String>,
    pub score: Option<String>,
    pub url: Option<String>,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
    pub courses: Option<Vec<String>>,
    pub computed: Option<EducationComputed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationComputed {
    pub date_range: Option<String>,
    /// Locale label for the `degree` option, e.g. "Master of Science".
    pub degree_label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillItem {
    pub name: Option<String>,
    pub level: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub computed: Option<SkillComputed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillComputed {
    /// Keywords joined for single-line rendering.
    pub keyword_list: Option<String>,
    pub level_label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
    pub keywords: Option<Vec<String>>,
    pub computed: Option<ProjectComputed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectComputed {
    pub date_range: Option<String>,
    pub keyword_list: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageItem {
    pub language: Option<String>,
    pub fluency: Option<String>,
    pub computed: Option<LanguageComputed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageComputed {
    pub language_label: Option<String>,
    pub fluency_label: Option<String>,
}
