//! Raw form fields and their parsed representation.
//!
//! DESIGN
//! ======
//! `FormFields` mirrors what the user typed, one string per control, so the
//! same value can be written back to the UI on reset. `FormInput` is the
//! parsed projection that validation consumes. Parsing never fails: anything
//! unreadable becomes "missing" and validation reports it.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Placeholder sent when the special-cases field is left blank.
pub const DEFAULT_SPECIAL_CASES: &str = "No special case.";

/// City the location field is reset to.
pub const DEFAULT_LOCATION: &str = "Yverdon-les-Bains";

const DEFAULT_NUM_CHILDREN: &str = "1";
const DEFAULT_AGES: &str = "4";
const DEFAULT_WEATHER: &str = "sunny";

/// Raw string contents of the five form controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormFields {
    pub num_children: String,
    /// Comma-separated list, e.g. `"4, 7"`.
    pub ages: String,
    pub weather: String,
    pub location: String,
    pub special_cases: String,
}

impl FormFields {
    /// The form as it looks after a reset, with a caller-chosen city.
    #[must_use]
    pub fn defaults_with_location(location: &str) -> Self {
        Self {
            num_children: DEFAULT_NUM_CHILDREN.to_owned(),
            ages: DEFAULT_AGES.to_owned(),
            weather: DEFAULT_WEATHER.to_owned(),
            location: location.to_owned(),
            special_cases: DEFAULT_SPECIAL_CASES.to_owned(),
        }
    }
}

impl Default for FormFields {
    fn default() -> Self {
        Self::defaults_with_location(DEFAULT_LOCATION)
    }
}

/// Parsed form entries, before validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormInput {
    /// `None` when the field held no leading integer.
    pub num_children: Option<i64>,
    pub ages: Vec<i64>,
    pub weather: String,
    pub location: String,
    /// Never blank: a blank field is replaced with [`DEFAULT_SPECIAL_CASES`].
    pub special_cases: String,
}

impl FormInput {
    /// Parse raw field values.
    #[must_use]
    pub fn from_fields(fields: &FormFields) -> Self {
        let special_cases = if fields.special_cases.trim().is_empty() {
            DEFAULT_SPECIAL_CASES.to_owned()
        } else {
            fields.special_cases.clone()
        };
        Self {
            num_children: parse_leading_int(&fields.num_children),
            ages: parse_ages(&fields.ages),
            weather: fields.weather.clone(),
            location: fields.location.clone(),
            special_cases,
        }
    }
}

/// Split a comma-separated ages string, keeping every token that starts with
/// an integer. Other tokens are dropped.
#[must_use]
pub fn parse_ages(raw: &str) -> Vec<i64> {
    raw.split(',').filter_map(parse_leading_int).collect()
}

/// Read the integer prefix of `raw` after trimming: `"7"`, `"-2"`,
/// `"4 years"` and `"4.5"` all parse; `"abc"` and `""` do not.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Overflowing values are treated as unreadable.
    let value = digits[..end].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}
