// ABOUTME: Property tests for field-level validation across section validators
// ABOUTME: A field's issues are always the whole-entity issues concerning that field

use chrono::NaiveDate;
use cvkit_lib::model::{Education, Skill, Work};
use cvkit_lib::{Entity, Validator, ValidatorSettings};
use proptest::prelude::*;

fn settings() -> ValidatorSettings {
    ValidatorSettings::default().with_today(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
}

fn text() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("   ".to_string())),
        "[A-Za-z ]{1,12}".prop_map(Some),
        "[A-Za-z ]{90,140}".prop_map(Some),
    ]
}

fn date() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("soon".to_string())),
        Just(Some("2030-01".to_string())),
        (1990u32..2025, 1u32..=12).prop_map(|(y, m)| Some(format!("{y}-{m:02}"))),
        (1990u32..2025).prop_map(|y| Some(y.to_string())),
    ]
}

fn list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![Just(String::new()), "[a-z ]{1,50}", Just("Module 4".to_string())],
        0..4,
    )
}

fn url() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("http://acme.io".to_string())),
        Just(Some("https://example.com".to_string())),
        Just(Some("not a url".to_string())),
        Just(Some("https://acme.io/jobs".to_string())),
    ]
}

prop_compose! {
    fn work()(
        company in text(),
        position in text(),
        url in url(),
        start_date in date(),
        end_date in date(),
        summary in text(),
        highlights in list(),
    ) -> Work {
        Work { company, position, url, start_date, end_date, summary, highlights }
    }
}

prop_compose! {
    fn education()(
        institution in text(),
        area in text(),
        study_type in text(),
        start_date in date(),
        end_date in date(),
        score in text(),
        courses in list(),
    ) -> Education {
        Education {
            institution,
            area,
            study_type,
            start_date,
            end_date,
            score,
            courses,
            ..Default::default()
        }
    }
}

prop_compose! {
    fn skill()(name in text(), level in text(), keywords in list()) -> Skill {
        Skill { name, level, keywords }
    }
}

fn check_fields<E: Entity>(entity: &E) -> Result<(), TestCaseError> {
    let validator = Validator::<E>::with_settings(settings());
    let all = validator.validate(entity).into_issues();
    for field in E::FIELDS {
        let outcome = validator.validate_field(entity, field).unwrap();
        let expected: Vec<_> = all.iter().filter(|i| i.concerns(field)).cloned().collect();
        prop_assert_eq!(outcome.issues(), expected.as_slice(), "field {}", field);
    }
    Ok(())
}

proptest! {
    #[test]
    fn work_field_issues_are_a_subset(work in work()) {
        check_fields(&work)?;
    }

    #[test]
    fn education_field_issues_are_a_subset(education in education()) {
        check_fields(&education)?;
    }

    #[test]
    fn skill_field_issues_are_a_subset(skill in skill()) {
        check_fields(&skill)?;
    }

    #[test]
    fn validation_returns_the_entity_untouched(work in work()) {
        let validator = Validator::<Work>::with_settings(settings());
        let outcome = validator.validate(&work);
        if let Some(value) = outcome.value() {
            prop_assert_eq!(value, &work);
        } else {
            prop_assert!(!outcome.errors().is_empty());
        }
    }
}
