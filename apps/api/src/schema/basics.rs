//! Basics section rules. The only mandatory single-item section.

use crate::models::resume::{Basics, Profile};
use crate::schema::primitives::{network_option, OptionSet, SizedString};
use crate::schema::report::Violation;

const NAME: SizedString = SizedString::new("name", 2, 64);
const LABEL: SizedString = SizedString::new("label", 2, 128);
const EMAIL: SizedString = SizedString::new("email", 6, 64);
const PHONE: SizedString = SizedString::new("phone", 6, 32);
const URL: SizedString = SizedString::new("url", 8, 256);
const SUMMARY: SizedString = SizedString::new("summary", 16, 1024);

const PROFILE_NETWORK: OptionSet = network_option("network");
const PROFILE_USERNAME: SizedString = SizedString::new("username", 2, 64);
const PROFILE_URL: SizedString = SizedString::new("url", 8, 256);

pub fn validate_basics(basics: &Basics, scope: &str, out: &mut Vec<Violation>) {
    NAME.check_required(scope, basics.name.as_deref(), out);
    LABEL.check(scope, basics.label.as_deref(), out);
    EMAIL.check(scope, basics.email.as_deref(), out);
    PHONE.check(scope, basics.phone.as_deref(), out);
    URL.check(scope, basics.url.as_deref(), out);
    SUMMARY.check(scope, basics.summary.as_deref(), out);

    if let Some(profiles) = &basics.profiles {
        for (i, profile) in profiles.iter().enumerate() {
            validate_profile(profile, &format!("{scope}.profiles[{i}]"), out);
        }
    }
}

fn validate_profile(profile: &Profile, scope: &str, out: &mut Vec<Violation>) {
    PROFILE_NETWORK.check_required(scope, profile.network.as_deref(), out);
    PROFILE_USERNAME.check_required(scope, profile.username.as_deref(), out);
    PROFILE_URL.check(scope, profile.url.as_deref(), out);
}
