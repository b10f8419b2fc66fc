//! Presentation configuration for a resume document.
//!
//! Everything here is optional; a document with no layout renders with the
//! consumer's defaults. The option-constrained knobs (template, font size,
//! fontspec numbers, locale language) are closed serde enums, so an
//! out-of-set value is rejected at the typing boundary rather than by the
//! section schemas.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeLayout {
    pub template: Option<Template>,
    pub margins: Option<PageMargins>,
    pub typography: Option<Typography>,
    pub latex: Option<LatexOptions>,
    /// Locale used for computed labels (section names, degree/fluency labels).
    pub language: Option<LocaleLanguage>,
    pub page_numbers: Option<bool>,
}

/// The five supported resume templates. Each pairs a font family with a
/// fixed LaTeX preamble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    /// Clean humanist sans-serif.
    Hacker,
    /// Classic old-style serif.
    Researcher,
    /// Geometric humanist sans-serif.
    Operator,
    /// Condensed display sans-serif.
    Founder,
    /// Traditional TeX font, ATS-safe.
    Classic,
}

/// Page margins in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageMargins {
    pub top_in: f32,
    pub bottom_in: f32,
    pub left_in: f32,
    pub right_in: f32,
}

impl Default for PageMargins {
    fn default() -> Self {
        PageMargins {
            top_in: 1.0,
            bottom_in: 1.0,
            left_in: 1.0,
            right_in: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typography {
    pub font_size: Option<FontSize>,
}

/// Body font size. The templates are tuned for these three sizes only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontSize {
    #[serde(rename = "10pt")]
    Ten,
    #[serde(rename = "11pt")]
    Eleven,
    #[serde(rename = "12pt")]
    Twelve,
}

impl FontSize {
    pub fn points(self) -> u8 {
        match self {
            FontSize::Ten => 10,
            FontSize::Eleven => 11,
            FontSize::Twelve => 12,
        }
    }
}

/// Knobs passed through to the LaTeX preamble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatexOptions {
    pub fontspec_numbers: Option<FontspecNumbers>,
    /// Enables microtype expansion (3% tolerance) in the preamble.
    pub microtype: Option<bool>,
}

/// `fontspec` Numbers feature selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontspecNumbers {
    OldStyle,
    Lining,
}

/// Languages the computed-label translations ship for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleLanguage {
    En,
    De,
    Fr,
    Es,
    It,
    Pt,
    Nl,
    Pl,
    Tr,
    Zh,
}
