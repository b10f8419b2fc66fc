//! Location section rules.
//!
//! The whole section is optional, but a present location must carry a city.
//! `country` is an ISO 3166-1 alpha-2 code.

use crate::models::resume::Location;
use crate::schema::primitives::{country_option, OptionSet, SizedString};
use crate::schema::report::Violation;

const CITY: SizedString = SizedString::new("city", 2, 64);
const ADDRESS: SizedString = SizedString::new("address", 4, 256);
const COUNTRY: OptionSet = country_option("country");
const POSTAL_CODE: SizedString = SizedString::new("postal_code", 2, 16);
const REGION: SizedString = SizedString::new("region", 2, 64);

pub fn validate_location(location: &Location, scope: &str, out: &mut Vec<Violation>) {
    CITY.check_required(scope, location.city.as_deref(), out);
    ADDRESS.check(scope, location.address.as_deref(), out);
    COUNTRY.check(scope, location.country.as_deref(), out);
    POSTAL_CODE.check(scope, location.postal_code.as_deref(), out);
    REGION.check(scope, location.region.as_deref(), out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::report::ViolationKind;

    fn location(value: serde_json::Value) -> Location {
        serde_json::from_value(value).unwrap()
    }

    fn validate(value: serde_json::Value) -> Vec<Violation> {
        let mut out = Vec::new();
        validate_location(&location(value), "location", &mut out);
        out
    }

    #[test]
    fn test_city_and_country_alone_are_valid() {
        let out = validate(serde_json::json!({ "city": "Berlin", "country": "DE" }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_city_below_min_length_fails() {
        let out = validate(serde_json::json!({ "city": "B" }));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path, "location.city");
        assert_eq!(
            out[0].kind,
            ViolationKind::LengthViolation {
                min: 2,
                max: 64,
                actual: 1
            }
        );
    }

    #[test]
    fn test_missing_city_and_short_address_both_reported() {
        let out = validate(serde_json::json!({ "address": "123" }));
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].path, "location.city");
        assert_eq!(out[0].kind, ViolationKind::MissingRequiredField);
        assert_eq!(out[1].path, "location.address");
        assert!(matches!(
            out[1].kind,
            ViolationKind::LengthViolation { actual: 3, .. }
        ));
    }

    #[test]
    fn test_unrecognized_country_fails() {
        let out = validate(serde_json::json!({ "city": "Berlin", "country": "Germany" }));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path, "location.country");
        assert_eq!(
            out[0].kind,
            ViolationKind::InvalidChoice {
                options: "country".to_string()
            }
        );
    }

    #[test]
    fn test_all_fields_at_bounds_pass() {
        let out = validate(serde_json::json!({
            "city": "Ho",
            "address": "1 Hn",
            "country": "VN",
            "postal_code": "70",
            "region": "SG"
        }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_postal_code_above_max_fails() {
        let out = validate(serde_json::json!({
            "city": "Berlin",
            "postal_code": "10115-10115-10115"
        }));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].path, "location.postal_code");
    }

    #[test]
    fn test_revalidation_is_idempotent() {
        let loc = location(serde_json::json!({ "city": "Berlin", "country": "DE" }));
        let mut first = Vec::new();
        validate_location(&loc, "location", &mut first);
        let mut second = Vec::new();
        validate_location(&loc, "location", &mut second);
        assert_eq!(first, second);
        assert!(second.is_empty());
    }
}
