use super::*;
use crate::input::DEFAULT_SPECIAL_CASES;

fn input(num_children: Option<i64>, ages: &[i64], weather: &str, location: &str) -> FormInput {
    FormInput {
        num_children,
        ages: ages.to_vec(),
        weather: weather.to_owned(),
        location: location.to_owned(),
        special_cases: DEFAULT_SPECIAL_CASES.to_owned(),
    }
}

#[test]
fn accepts_valid_input() {
    let request = validate(&input(Some(2), &[4, 7], "rainy", "Geneva")).unwrap();
    assert_eq!(request.num_children(), 2);
    assert_eq!(request.ages(), &[4, 7]);
}

#[test]
fn rejects_missing_or_non_positive_child_count() {
    for count in [None, Some(0), Some(-3)] {
        assert_eq!(
            validate(&input(count, &[4], "sunny", "Geneva")),
            Err(ValidationError::InvalidChildCount)
        );
    }
}

#[test]
fn rejects_child_count_beyond_u32() {
    let too_many = i64::from(u32::MAX) + 1;
    assert_eq!(
        validate(&input(Some(too_many), &[4], "sunny", "Geneva")),
        Err(ValidationError::InvalidChildCount)
    );
}

#[test]
fn rejects_empty_ages() {
    assert_eq!(
        validate(&input(Some(1), &[], "sunny", "Geneva")),
        Err(ValidationError::MissingAges)
    );
}

#[test]
fn rejects_any_age_outside_range() {
    for ages in [&[4, 19][..], &[-1][..], &[18, 0, 42][..]] {
        assert_eq!(
            validate(&input(Some(1), ages, "sunny", "Geneva")),
            Err(ValidationError::AgeOutOfRange)
        );
    }
}

#[test]
fn accepts_range_boundaries() {
    assert!(validate(&input(Some(2), &[MIN_AGE, MAX_AGE], "sunny", "Geneva")).is_ok());
}

#[test]
fn rejects_blank_weather_or_location() {
    assert_eq!(
        validate(&input(Some(1), &[4], "", "Geneva")),
        Err(ValidationError::MissingWeatherOrLocation)
    );
    assert_eq!(
        validate(&input(Some(1), &[4], "sunny", "   ")),
        Err(ValidationError::MissingWeatherOrLocation)
    );
}

#[test]
fn first_failing_rule_wins() {
    // Every rule fails; the child count is reported.
    assert_eq!(
        validate(&input(None, &[], "", "")),
        Err(ValidationError::InvalidChildCount)
    );
    // Count passes; missing ages beats blank weather.
    assert_eq!(
        validate(&input(Some(1), &[], "", "")),
        Err(ValidationError::MissingAges)
    );
    // Out-of-range age beats blank location.
    assert_eq!(
        validate(&input(Some(1), &[30], "sunny", "")),
        Err(ValidationError::AgeOutOfRange)
    );
}

#[test]
fn messages_are_user_facing() {
    assert_eq!(
        ValidationError::InvalidChildCount.to_string(),
        "Please enter a valid number of children (at least 1)."
    );
    assert_eq!(
        ValidationError::AgeOutOfRange.to_string(),
        "Please enter realistic ages for children (0-18 years)."
    );
}
