//! Languages section rules. Both fields are option-constrained so the
//! transform pass can translate them into any layout locale.

use crate::models::resume::{LanguageItem, SectionId};
use crate::schema::primitives::{fluency_option, language_option, OptionSet};
use crate::schema::report::Violation;

const LANGUAGE: OptionSet = language_option("language");
const FLUENCY: OptionSet = fluency_option("fluency");

pub fn validate_languages(items: &[LanguageItem], out: &mut Vec<Violation>) {
    for (i, item) in items.iter().enumerate() {
        let scope = format!("{}[{i}]", SectionId::Languages.as_str());
        LANGUAGE.check_required(&scope, item.language.as_deref(), out);
        FLUENCY.check(&scope, item.fluency.as_deref(), out);
    }
}
