//! Form rules applied before any network call.
//!
//! Rules run in a fixed order and the first failure wins:
//! child count, ages present, ages in range, weather and location present.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::input::FormInput;
use crate::request::ActivityRequest;

/// Youngest accepted age, in years.
pub const MIN_AGE: i64 = 0;
/// Oldest accepted age, in years.
pub const MAX_AGE: i64 = 18;

/// A form rule that blocked submission. `Display` is the message shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Child count missing, below one, or too large to represent.
    #[error("Please enter a valid number of children (at least 1).")]
    InvalidChildCount,

    /// No integer could be read from the ages field.
    #[error("Please enter valid ages for the children.")]
    MissingAges,

    /// At least one age falls outside `MIN_AGE..=MAX_AGE`.
    #[error("Please enter realistic ages for children (0-18 years).")]
    AgeOutOfRange,

    /// Weather or location is blank.
    #[error("Please fill in weather and location information.")]
    MissingWeatherOrLocation,
}

/// Check `input` against the form rules and build the request payload.
///
/// # Errors
///
/// Returns the first [`ValidationError`] in rule order.
pub fn validate(input: &FormInput) -> Result<ActivityRequest, ValidationError> {
    let num_children = input
        .num_children
        .filter(|n| *n >= 1)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or(ValidationError::InvalidChildCount)?;

    if input.ages.is_empty() {
        return Err(ValidationError::MissingAges);
    }

    let ages = input
        .ages
        .iter()
        .map(|age| {
            if (MIN_AGE..=MAX_AGE).contains(age) {
                u8::try_from(*age).map_err(|_| ValidationError::AgeOutOfRange)
            } else {
                Err(ValidationError::AgeOutOfRange)
            }
        })
        .collect::<Result<Vec<u8>, _>>()?;

    if input.weather.trim().is_empty() || input.location.trim().is_empty() {
        return Err(ValidationError::MissingWeatherOrLocation);
    }

    Ok(ActivityRequest::new(
        num_children,
        ages,
        input.weather.clone(),
        input.location.clone(),
        input.special_cases.clone(),
    ))
}
