//! Submission errors raised after validation has passed.
//!
//! ERROR HANDLING
//! ==============
//! Every variant is caught at the controller's submission boundary and its
//! `Display` text is rendered in the error panel, so messages are written for
//! the person filling the form. Detail meant for logs is kept in fields.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Broad class of a [`SubmitError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport failure, timeout, or non-success HTTP status.
    Network,
    /// Empty or unreadable reply body.
    Protocol,
    /// The backend answered `success: false`.
    Application,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The request never produced a response.
    #[error("Could not reach the activity service: {0}")]
    Transport(String),

    /// No response within the configured request timeout.
    #[error("The activity service did not answer within {secs} seconds.")]
    Timeout { secs: u64 },

    /// The backend answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// 2xx status with a blank body.
    #[error("Empty response from server")]
    EmptyBody,

    /// 2xx status with a body that is not a valid reply.
    #[error("Invalid JSON response from server")]
    MalformedBody { detail: String },

    /// The request payload could not be serialized.
    #[error("Could not encode the request: {0}")]
    Encode(String),

    /// The backend reported failure; holds its message or the fallback.
    #[error("{0}")]
    Application(String),
}

impl SubmitError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) | Self::Timeout { .. } | Self::Status { .. } => ErrorKind::Network,
            Self::EmptyBody | Self::MalformedBody { .. } | Self::Encode(_) => ErrorKind::Protocol,
            Self::Application(_) => ErrorKind::Application,
        }
    }

    /// Stable code for log lines.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "E_TRANSPORT",
            Self::Timeout { .. } => "E_TIMEOUT",
            Self::Status { .. } => "E_HTTP_STATUS",
            Self::EmptyBody => "E_EMPTY_BODY",
            Self::MalformedBody { .. } => "E_MALFORMED_BODY",
            Self::Encode(_) => "E_ENCODE",
            Self::Application(_) => "E_APPLICATION",
        }
    }

    /// Text shown in the error panel.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<form::DecodeError> for SubmitError {
    fn from(err: form::DecodeError) -> Self {
        match err {
            form::DecodeError::Empty => Self::EmptyBody,
            form::DecodeError::Malformed(source) => Self::MalformedBody {
                detail: source.to_string(),
            },
        }
    }
}
