//! Skills section rules.

use crate::models::resume::{SectionId, SkillItem};
use crate::schema::primitives::{level_option, OptionSet, SizedString};
use crate::schema::report::Violation;

const NAME: SizedString = SizedString::new("name", 2, 64);
const LEVEL: OptionSet = level_option("level");
const KEYWORD: SizedString = SizedString::new("keywords", 1, 32);

pub fn validate_skills(items: &[SkillItem], out: &mut Vec<Violation>) {
    for (i, item) in items.iter().enumerate() {
        let scope = format!("{}[{i}]", SectionId::Skills.as_str());
        NAME.check_required(&scope, item.name.as_deref(), out);
        LEVEL.check(&scope, item.level.as_deref(), out);
        KEYWORD.check_items(&scope, item.keywords.as_deref(), out);
    }
}
