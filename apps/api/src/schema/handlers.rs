use axum::{extract::Path, Json};
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::schema::primitives::content_option_set;
use crate::schema::{validate_resume, Violation};

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub violations: Vec<Violation>,
}

/// POST /api/v1/resumes/validate
///
/// A failing document is an ordinary outcome for the editor, so the report
/// always comes back with 200. Only malformed JSON is an HTTP error.
pub async fn handle_validate(Json(resume): Json<Resume>) -> Json<ValidateResponse> {
    let report = validate_resume(&resume);
    if !report.is_valid() {
        debug!("document rejected with {} violation(s)", report.violations.len());
    }
    Json(ValidateResponse {
        valid: report.is_valid(),
        violations: report.violations,
    })
}

#[derive(Debug, Serialize)]
pub struct OptionSetResponse {
    pub set: String,
    pub options: &'static [&'static str],
}

/// GET /api/v1/options/:set
///
/// Exposes the content option sets (country, degree, fluency, language,
/// level, network) so editor clients can build pickers from the same lists
/// the validator enforces.
pub async fn handle_get_options(
    Path(set): Path<String>,
) -> Result<Json<OptionSetResponse>, AppError> {
    let options = content_option_set(&set)
        .ok_or_else(|| AppError::NotFound(format!("Option set '{set}' not found")))?;
    Ok(Json(OptionSetResponse { set, options }))
}
