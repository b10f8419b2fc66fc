//! Education section rules. Mandatory: a resume without at least one
//! education item is rejected at the document level.

use crate::models::resume::{EducationItem, SectionId};
use crate::schema::primitives::{degree_option, OptionSet, SizedString};
use crate::schema::report::Violation;

const INSTITUTION: SizedString = SizedString::new("institution", 2, 128);
const AREA: SizedString = SizedString::new("area", 2, 128);
const DEGREE: OptionSet = degree_option("degree");
const SCORE: SizedString = SizedString::new("score", 1, 16);
const URL: SizedString = SizedString::new("url", 8, 256);
const COURSE: SizedString = SizedString::new("courses", 2, 128);

pub fn validate_education(items: &[EducationItem], out: &mut Vec<Violation>) {
    for (i, item) in items.iter().enumerate() {
        let scope = format!("{}[{i}]", SectionId::Education.as_str());
        INSTITUTION.check_required(&scope, item.institution.as_deref(), out);
        AREA.check(&scope, item.area.as_deref(), out);
        DEGREE.check(&scope, item.degree.as_deref(), out);
        SCORE.check(&scope, item.score.as_deref(), out);
        URL.check(&scope, item.url.as_deref(), out);
        if item.date_start.is_none() {
            out.push(Violation::missing_required(&scope, "date_start"));
        }
        COURSE.check_items(&scope, item.courses.as_deref(), out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::report::ViolationKind;

    fn validate(value: serde_json::Value) -> Vec<Violation> {
        let items: Vec<EducationItem> = serde_json::from_value(value).unwrap();
        let mut out = Vec::new();
        validate_education(&items, &mut out);
        out
    }

    #[test]
    fn test_complete_item_passes() {
        let out = validate(serde_json::json!([{
            "institution": "University of London",
            "area": "Mathematics",
            "degree": "master",
            "score": "1.3",
            "date_start": "2014-10-01",
            "date_end": "2017-03-31",
            "courses": ["Number Theory", "Mechanical Computation"]
        }]));
        assert!(out.is_empty());
    }

    #[test]
    fn test_degree_outside_option_set_fails() {
        let out = validate(serde_json::json!([{
            "institution": "University of London",
            "degree": "Master of Science",
            "date_start": "2014-10-01"
        }]));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path, "education[0].degree");
        assert_eq!(
            out[0].kind,
            ViolationKind::InvalidChoice {
                options: "degree".to_string()
            }
        );
    }

    #[test]
    fn test_missing_institution_and_date_reported_together() {
        let out = validate(serde_json::json!([{ "area": "Mathematics" }]));
        let paths: Vec<_> = out.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["education[0].institution", "education[0].date_start"]
        );
    }

    #[test]
    fn test_single_char_score_is_valid() {
        let out = validate(serde_json::json!([{
            "institution": "University of London",
            "score": "A",
            "date_start": "2014-10-01"
        }]));
        assert!(out.is_empty());
    }
}
