//! Validated request payload for `POST /api/activities`.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use serde::Serialize;

/// JSON body sent to the activities endpoint.
///
/// Fields are private and the type is not deserializable: the only way to
/// obtain one is [`crate::validate`], so a request in hand has passed every
/// form rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActivityRequest {
    num_children: u32,
    ages: Vec<u8>,
    weather: String,
    location: String,
    special_cases: String,
}

impl ActivityRequest {
    pub(crate) fn new(
        num_children: u32,
        ages: Vec<u8>,
        weather: String,
        location: String,
        special_cases: String,
    ) -> Self {
        Self {
            num_children,
            ages,
            weather,
            location,
            special_cases,
        }
    }

    #[must_use]
    pub fn num_children(&self) -> u32 {
        self.num_children
    }

    #[must_use]
    pub fn ages(&self) -> &[u8] {
        &self.ages
    }

    #[must_use]
    pub fn weather(&self) -> &str {
        &self.weather
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn special_cases(&self) -> &str {
        &self.special_cases
    }

    /// Serialize to the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; plain strings and integers do not fail in practice.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
