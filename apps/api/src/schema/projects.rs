//! Projects section rules. Dates are optional here; ongoing side projects
//! commonly have neither.

use crate::models::resume::{ProjectItem, SectionId};
use crate::schema::primitives::SizedString;
use crate::schema::report::Violation;

const NAME: SizedString = SizedString::new("name", 2, 64);
const DESCRIPTION: SizedString = SizedString::new("description", 4, 256);
const URL: SizedString = SizedString::new("url", 8, 256);
const KEYWORD: SizedString = SizedString::new("keywords", 1, 32);

pub fn validate_projects(items: &[ProjectItem], out: &mut Vec<Violation>) {
    for (i, item) in items.iter().enumerate() {
        let scope = format!("{}[{i}]", SectionId::Projects.as_str());
        NAME.check_required(&scope, item.name.as_deref(), out);
        DESCRIPTION.check(&scope, item.description.as_deref(), out);
        URL.check(&scope, item.url.as_deref(), out);
        KEYWORD.check_items(&scope, item.keywords.as_deref(), out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(value: serde_json::Value) -> Vec<Violation> {
        let items: Vec<ProjectItem> = serde_json::from_value(value).unwrap();
        let mut out = Vec::new();
        validate_projects(&items, &mut out);
        out
    }

    #[test]
    fn test_name_alone_passes() {
        assert!(validate(serde_json::json!([{ "name": "vitae" }])).is_empty());
    }

    #[test]
    fn test_missing_name_is_reported() {
        let out = validate(serde_json::json!([{ "description": "A resume toolchain." }]));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path, "projects[0].name");
    }

    #[test]
    fn test_short_description_fails() {
        let out = validate(serde_json::json!([{ "name": "vitae", "description": "ok" }]));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path, "projects[0].description");
    }

    #[test]
    fn test_short_url_fails() {
        let out = validate(serde_json::json!([{ "name": "vitae", "url": "a.io" }]));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path, "projects[0].url");
    }
}
