//! Work section rules.

use crate::models::resume::{SectionId, WorkItem};
use crate::schema::primitives::SizedString;
use crate::schema::report::Violation;

const COMPANY: SizedString = SizedString::new("company", 2, 128);
const POSITION: SizedString = SizedString::new("position", 2, 128);
const URL: SizedString = SizedString::new("url", 8, 256);
const SUMMARY: SizedString = SizedString::new("summary", 16, 1024);
const HIGHLIGHT: SizedString = SizedString::new("highlights", 4, 256);

pub fn validate_work(items: &[WorkItem], out: &mut Vec<Violation>) {
    for (i, item) in items.iter().enumerate() {
        let scope = format!("{}[{i}]", SectionId::Work.as_str());
        COMPANY.check_required(&scope, item.company.as_deref(), out);
        POSITION.check_required(&scope, item.position.as_deref(), out);
        URL.check(&scope, item.url.as_deref(), out);
        if item.date_start.is_none() {
            out.push(Violation::missing_required(&scope, "date_start"));
        }
        SUMMARY.check(&scope, item.summary.as_deref(), out);
        HIGHLIGHT.check_items(&scope, item.highlights.as_deref(), out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::report::ViolationKind;

    fn validate(value: serde_json::Value) -> Vec<Violation> {
        let items: Vec<WorkItem> = serde_json::from_value(value).unwrap();
        let mut out = Vec::new();
        validate_work(&items, &mut out);
        out
    }

    #[test]
    fn test_complete_item_passes() {
        let out = validate(serde_json::json!([{
            "company": "Analytical Engines Ltd",
            "position": "Lead Engineer",
            "date_start": "2019-04-01",
            "date_end": "2022-09-30",
            "summary": "Owned the punched-card ingestion pipeline end to end.",
            "highlights": ["Cut card-read errors by 40%", "Mentored 4 junior operators"]
        }]));
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_required_fields_are_all_reported() {
        let out = validate(serde_json::json!([{ "url": "https://a.example.org" }]));
        let paths: Vec<_> = out.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["work[0].company", "work[0].position", "work[0].date_start"]
        );
        assert!(out
            .iter()
            .all(|v| v.kind == ViolationKind::MissingRequiredField));
    }

    #[test]
    fn test_highlight_violations_name_the_element() {
        let out = validate(serde_json::json!([{
            "company": "Acme",
            "position": "Engineer",
            "date_start": "2021-01-04",
            "highlights": ["ok highlight", "no"]
        }]));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path, "work[0].highlights[1]");
    }

    #[test]
    fn test_violations_keep_item_order() {
        let out = validate(serde_json::json!([
            { "company": "Acme", "position": "Engineer", "date_start": "2021-01-04" },
            { "company": "X", "position": "Engineer", "date_start": "2021-01-04" },
            { "company": "Acme", "position": "E", "date_start": "2021-01-04" }
        ]));
        let paths: Vec<_> = out.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["work[1].company", "work[2].position"]);
    }
}
