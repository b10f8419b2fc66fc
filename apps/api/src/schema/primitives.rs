//! Shared validator factories and the closed option sets.
//!
//! Two primitives cover every field rule in the section schemas:
//! [`SizedString`] (bounded character count, inclusive) and [`OptionSet`]
//! (membership in a fixed list). Both are declared as `const` rules at the
//! top of each section module and push [`Violation`]s into the aggregate
//! report. Nothing here short-circuits.

use crate::schema::report::{join_path, Violation, ViolationKind};

/// Bounded-length string rule for one field.
///
/// Lengths are Unicode scalar counts (`chars().count()`), not bytes, so a
/// two-character city like "Ulm" and "Åre" measure the same way.
pub struct SizedString {
    pub field: &'static str,
    pub min: usize,
    pub max: usize,
}

impl SizedString {
    pub const fn new(field: &'static str, min: usize, max: usize) -> Self {
        SizedString { field, min, max }
    }

    /// Checks an optional field. Absent values pass.
    pub fn check(&self, scope: &str, value: Option<&str>, out: &mut Vec<Violation>) {
        if let Some(value) = value {
            self.check_present(scope, value, out);
        }
    }

    /// Checks a required field. Absent values are reported as missing.
    pub fn check_required(&self, scope: &str, value: Option<&str>, out: &mut Vec<Violation>) {
        match value {
            Some(value) => self.check_present(scope, value, out),
            None => out.push(Violation::missing_required(scope, self.field)),
        }
    }

    /// Checks every element of an optional string sequence, reporting
    /// violations under `scope.field[i]`.
    pub fn check_items(&self, scope: &str, values: Option<&[String]>, out: &mut Vec<Violation>) {
        if let Some(values) = values {
            for (i, value) in values.iter().enumerate() {
                let actual = value.chars().count();
                if actual < self.min || actual > self.max {
                    out.push(Violation::new(
                        format!("{}[{i}]", join_path(scope, self.field)),
                        self.length_violation(actual),
                    ));
                }
            }
        }
    }

    fn check_present(&self, scope: &str, value: &str, out: &mut Vec<Violation>) {
        let actual = value.chars().count();
        if actual < self.min || actual > self.max {
            out.push(Violation::new(
                join_path(scope, self.field),
                self.length_violation(actual),
            ));
        }
    }

    fn length_violation(&self, actual: usize) -> ViolationKind {
        ViolationKind::LengthViolation {
            min: self.min,
            max: self.max,
            actual,
        }
    }
}

/// Membership rule against one of the closed option sets below.
pub struct OptionSet {
    /// Option-set name, reported in `invalid_choice` violations.
    pub name: &'static str,
    pub field: &'static str,
    pub options: &'static [&'static str],
}

impl OptionSet {
    /// Checks an optional field. Absent values pass.
    pub fn check(&self, scope: &str, value: Option<&str>, out: &mut Vec<Violation>) {
        if let Some(value) = value {
            self.check_present(scope, value, out);
        }
    }

    /// Checks a required field. Absent values are reported as missing.
    pub fn check_required(&self, scope: &str, value: Option<&str>, out: &mut Vec<Violation>) {
        match value {
            Some(value) => self.check_present(scope, value, out),
            None => out.push(Violation::missing_required(scope, self.field)),
        }
    }

    fn check_present(&self, scope: &str, value: &str, out: &mut Vec<Violation>) {
        if !self.options.iter().any(|option| *option == value) {
            out.push(Violation::new(
                join_path(scope, self.field),
                ViolationKind::InvalidChoice {
                    options: self.name.to_string(),
                },
            ));
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Option-set factories, one per constrained content field
// ────────────────────────────────────────────────────────────────────────────

pub const fn country_option(field: &'static str) -> OptionSet {
    OptionSet {
        name: "country",
        field,
        options: COUNTRY_OPTIONS,
    }
}

pub const fn degree_option(field: &'static str) -> OptionSet {
    OptionSet {
        name: "degree",
        field,
        options: DEGREE_OPTIONS,
    }
}

pub const fn fluency_option(field: &'static str) -> OptionSet {
    OptionSet {
        name: "fluency",
        field,
        options: FLUENCY_OPTIONS,
    }
}

pub const fn language_option(field: &'static str) -> OptionSet {
    OptionSet {
        name: "language",
        field,
        options: LANGUAGE_OPTIONS,
    }
}

pub const fn level_option(field: &'static str) -> OptionSet {
    OptionSet {
        name: "level",
        field,
        options: LEVEL_OPTIONS,
    }
}

pub const fn network_option(field: &'static str) -> OptionSet {
    OptionSet {
        name: "network",
        field,
        options: NETWORK_OPTIONS,
    }
}

/// Looks up a content option set by name, for the options endpoint.
pub fn content_option_set(name: &str) -> Option<&'static [&'static str]> {
    match name {
        "country" => Some(COUNTRY_OPTIONS),
        "degree" => Some(DEGREE_OPTIONS),
        "fluency" => Some(FLUENCY_OPTIONS),
        "language" => Some(LANGUAGE_OPTIONS),
        "level" => Some(LEVEL_OPTIONS),
        "network" => Some(NETWORK_OPTIONS),
        _ => None,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Option lists
// ────────────────────────────────────────────────────────────────────────────

/// ISO 3166-1 alpha-2, officially assigned codes.
pub const COUNTRY_OPTIONS: &[&str] = &[
    "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS", "AT", "AU", "AW", "AX",
    "AZ", "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BL", "BM", "BN", "BO", "BQ",
    "BR", "BS", "BT", "BV", "BW", "BY", "BZ", "CA", "CC", "CD", "CF", "CG", "CH", "CI", "CK",
    "CL", "CM", "CN", "CO", "CR", "CU", "CV", "CW", "CX", "CY", "CZ", "DE", "DJ", "DK", "DM",
    "DO", "DZ", "EC", "EE", "EG", "EH", "ER", "ES", "ET", "FI", "FJ", "FK", "FM", "FO", "FR",
    "GA", "GB", "GD", "GE", "GF", "GG", "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GS",
    "GT", "GU", "GW", "GY", "HK", "HM", "HN", "HR", "HT", "HU", "ID", "IE", "IL", "IM", "IN",
    "IO", "IQ", "IR", "IS", "IT", "JE", "JM", "JO", "JP", "KE", "KG", "KH", "KI", "KM", "KN",
    "KP", "KR", "KW", "KY", "KZ", "LA", "LB", "LC", "LI", "LK", "LR", "LS", "LT", "LU", "LV",
    "LY", "MA", "MC", "MD", "ME", "MF", "MG", "MH", "MK", "ML", "MM", "MN", "MO", "MP", "MQ",
    "MR", "MS", "MT", "MU", "MV", "MW", "MX", "MY", "MZ", "NA", "NC", "NE", "NF", "NG", "NI",
    "NL", "NO", "NP", "NR", "NU", "NZ", "OM", "PA", "PE", "PF", "PG", "PH", "PK", "PL", "PM",
    "PN", "PR", "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU", "RW", "SA", "SB", "SC",
    "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN", "SO", "SR", "SS", "ST", "SV",
    "SX", "SY", "SZ", "TC", "TD", "TF", "TG", "TH", "TJ", "TK", "TL", "TM", "TN", "TO", "TR",
    "TT", "TV", "TW", "TZ", "UA", "UG", "UM", "US", "UY", "UZ", "VA", "VC", "VE", "VG", "VI",
    "VN", "VU", "WF", "WS", "YE", "YT", "ZA", "ZM", "ZW",
];

pub const DEGREE_OPTIONS: &[&str] = &[
    "high_school",
    "associate",
    "bachelor",
    "master",
    "mba",
    "phd",
    "diploma",
    "certificate",
];

/// ILR-style self-assessment scale.
pub const FLUENCY_OPTIONS: &[&str] = &[
    "elementary",
    "limited_working",
    "professional_working",
    "full_professional",
    "native",
];

pub const LANGUAGE_OPTIONS: &[&str] = &[
    "arabic",
    "bengali",
    "chinese",
    "czech",
    "danish",
    "dutch",
    "english",
    "finnish",
    "french",
    "german",
    "greek",
    "hebrew",
    "hindi",
    "hungarian",
    "indonesian",
    "italian",
    "japanese",
    "korean",
    "norwegian",
    "polish",
    "portuguese",
    "romanian",
    "russian",
    "spanish",
    "swedish",
    "thai",
    "turkish",
    "ukrainian",
    "urdu",
    "vietnamese",
];

pub const LEVEL_OPTIONS: &[&str] = &[
    "novice",
    "beginner",
    "skillful",
    "experienced",
    "expert",
    "master",
];

pub const NETWORK_OPTIONS: &[&str] = &[
    "github",
    "gitlab",
    "linkedin",
    "twitter",
    "mastodon",
    "stackoverflow",
    "behance",
    "dribbble",
    "medium",
    "youtube",
    "website",
];
