//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use addressbook_domain::{
    BloodType, DateFormatter, DateOfBirth, DomainError, Name, Person, date_parser,
};
use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

fn calendar_date() -> impl Strategy<Value = NaiveDate> {
    (1i32..=9999, 1u32..=366).prop_filter_map("not a day of the year", |(year, ordinal)| {
        NaiveDate::from_yo_opt(year, ordinal)
    })
}

fn separator() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['-', '/', '.'])
}

// ============================================================================
// BloodType Property Tests
// ============================================================================

mod blood_type_tests {
    use super::*;

    proptest! {
        #[test]
        fn matching_strings_are_stored_verbatim(raw in "[A-Za-z0-9][A-Za-z0-9 ]{0,30}") {
            let blood_type = BloodType::new(raw.as_str()).unwrap();
            prop_assert_eq!(blood_type.as_str(), raw.as_str());
            prop_assert_eq!(blood_type.to_string(), raw);
        }

        #[test]
        fn non_alphanumeric_characters_are_rejected(
            prefix in "[A-Za-z0-9]{1,5}",
            bad in "[+\\-*#@!?]",
            suffix in "[A-Za-z0-9 ]{0,5}"
        ) {
            let raw = format!("{prefix}{bad}{suffix}");
            prop_assert!(matches!(BloodType::new(raw), Err(DomainError::InvalidFormat(_))));
        }

        #[test]
        fn blank_input_is_rejected(spaces in " {0,10}") {
            prop_assert!(BloodType::new(spaces).is_err());
        }
    }
}

// ============================================================================
// DateOfBirth Property Tests
// ============================================================================

mod date_of_birth_tests {
    use super::*;

    proptest! {
        #[test]
        fn any_accepted_separator_yields_the_same_value(
            date in calendar_date(),
            first in separator(),
            second in separator()
        ) {
            let render = |sep: char| {
                format!("{:02}{sep}{:02}{sep}{:04}", date.day(), date.month(), date.year())
            };
            let a = DateOfBirth::new(render(first)).unwrap();
            let b = DateOfBirth::new(render(second)).unwrap();

            prop_assert_eq!(a, b);
            prop_assert_eq!(a.to_string(), b.to_string());
            prop_assert_eq!(a.to_string(), render('-'));
        }

        #[test]
        fn reconstruction_from_display_is_idempotent(date in calendar_date(), sep in separator()) {
            let raw = format!("{:02}{sep}{:02}{sep}{:04}", date.day(), date.month(), date.year());
            let dob = DateOfBirth::new(raw).unwrap();
            prop_assert_eq!(DateOfBirth::new(dob.to_string()).unwrap(), dob);
        }

        #[test]
        fn validity_check_matches_constructor(raw in "[0-9]{2}[-/.][0-9]{2}[-/.][0-9]{4}") {
            prop_assert_eq!(
                DateOfBirth::is_valid_date_of_birth(&raw),
                DateOfBirth::new(&raw).is_ok()
            );
        }

        #[test]
        fn iso_shaped_input_is_rejected(date in calendar_date()) {
            let raw = date.format("%Y-%m-%d").to_string();
            prop_assert!(DateOfBirth::new(raw).is_err());
        }

        #[test]
        fn serialization_roundtrip(date in calendar_date()) {
            let raw = format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year());
            let dob = DateOfBirth::new(raw).unwrap();
            let json = serde_json::to_string(&dob).unwrap();
            let parsed: DateOfBirth = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(dob, parsed);
        }
    }
}

// ============================================================================
// Date Parser Property Tests
// ============================================================================

mod date_parser_tests {
    use super::*;

    proptest! {
        #[test]
        fn parse_agrees_with_validity(raw in "[0-9]{2}[-/.][0-9]{2}[-/.][0-9]{4}") {
            let formats = DateOfBirth::FORMATTERS;
            prop_assert_eq!(
                date_parser::is_valid_date(&raw, &formats),
                date_parser::parse_date(&raw, &formats).is_ok()
            );
        }

        #[test]
        fn format_then_parse_returns_the_date(date in calendar_date()) {
            for formatter in [
                DateFormatter::DAY_MONTH_YEAR_DASH,
                DateFormatter::DAY_MONTH_YEAR_SLASH,
                DateFormatter::DAY_MONTH_YEAR_DOT,
                DateFormatter::ISO_LOCAL_DATE,
            ] {
                let rendered = date_parser::format_date(date, &formatter);
                prop_assert_eq!(date_parser::parse_date(&rendered, &[formatter]).unwrap(), date);
            }
        }

        #[test]
        fn exhausted_list_reports_raw_input(raw in "[a-z]{1,12}") {
            let result = date_parser::parse_date(&raw, &DateOfBirth::FORMATTERS);
            prop_assert_eq!(result, Err(DomainError::ParseError(raw)));
        }
    }
}

// ============================================================================
// Person Property Tests
// ============================================================================

mod person_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_fields_always_build_a_person(
            name in "[A-Za-z][A-Za-z ]{0,20}",
            blood_type in "[ABO]{1,2}( Positive| Negative)?",
            date in calendar_date()
        ) {
            let dob = format!("{:02}.{:02}.{:04}", date.day(), date.month(), date.year());
            let person = Person::from_input(
                Some(name.as_str()),
                Some(blood_type.as_str()),
                Some(dob.as_str()),
            )
            .unwrap();

            prop_assert_eq!(person.name(), &Name::new(name.as_str()).unwrap());
            prop_assert_eq!(person.date_of_birth().date(), date);
        }
    }
}
