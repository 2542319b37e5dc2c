//! Backend reply for `POST /api/activities`.
//!
//! DESIGN
//! ======
//! The wire shape is a flat object keyed on a boolean `success` flag, which
//! serde cannot tag directly. Replies are read into `WireResponse` and then
//! converted into the [`ActivityResponse`] union, so a success reply without
//! `activities` is rejected at the boundary instead of surfacing as an empty
//! result later.

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;

use serde::{Deserialize, Serialize};

/// Message shown when the backend reports failure without a usable `error`.
pub const FAILURE_FALLBACK_MESSAGE: &str = "Failed to get activities";

/// Parsed reply from the activities endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireResponse", into = "WireResponse")]
pub enum ActivityResponse {
    /// `{"success": true, "activities": "..."}`
    Success { activities: String },
    /// `{"success": false, "error": "..."}`
    Failure { error: Option<String> },
}

impl ActivityResponse {
    /// Collapse into the activities text or a user-facing failure message.
    ///
    /// # Errors
    ///
    /// Returns the backend's `error` text, or [`FAILURE_FALLBACK_MESSAGE`]
    /// when it is missing or blank.
    pub fn into_activities(self) -> Result<String, String> {
        match self {
            Self::Success { activities } => Ok(activities),
            Self::Failure { error } => Err(error
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| FAILURE_FALLBACK_MESSAGE.to_owned())),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct WireResponse {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    activities: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl TryFrom<WireResponse> for ActivityResponse {
    type Error = String;

    fn try_from(wire: WireResponse) -> Result<Self, Self::Error> {
        if wire.success {
            let activities = wire
                .activities
                .ok_or_else(|| "success reply is missing `activities`".to_owned())?;
            Ok(Self::Success { activities })
        } else {
            Ok(Self::Failure { error: wire.error })
        }
    }
}

impl From<ActivityResponse> for WireResponse {
    fn from(response: ActivityResponse) -> Self {
        match response {
            ActivityResponse::Success { activities } => Self {
                success: true,
                activities: Some(activities),
                error: None,
            },
            ActivityResponse::Failure { error } => Self {
                success: false,
                activities: None,
                error,
            },
        }
    }
}

/// Why a reply body could not be read as an [`ActivityResponse`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The body was empty or whitespace.
    #[error("empty response body")]
    Empty,
    /// The body was not JSON, or did not match the reply schema.
    #[error("invalid response body: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Parse a reply body.
///
/// # Errors
///
/// Returns [`DecodeError::Empty`] for a blank body and
/// [`DecodeError::Malformed`] for anything that is not a valid reply.
pub fn decode_response(body: &str) -> Result<ActivityResponse, DecodeError> {
    if body.trim().is_empty() {
        return Err(DecodeError::Empty);
    }
    Ok(serde_json::from_str(body)?)
}
