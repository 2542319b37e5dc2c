//! Transport seam and reply classification for `POST /api/activities`.
//!
//! DESIGN
//! ======
//! A [`Transport`] only moves bytes: one POST, one status, one body. Turning
//! that into activities or a [`SubmitError`] happens once, in
//! [`classify_reply`], so the browser and native transports agree on every
//! edge case. Futures are not required to be `Send`; the controller runs on a
//! single-threaded event loop.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use form::ActivityRequest;

use super::error::SubmitError;

/// Status and body of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs the single HTTP POST of a submission.
#[async_trait(?Send)]
pub trait Transport {
    /// POST `body` as `application/json` to `url`.
    ///
    /// Implementations return `Err` only when no response was received
    /// (connection failure, timeout). Any status, including 5xx, is an `Ok`.
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, SubmitError>;
}

/// Send `request` through `transport` and classify the reply.
///
/// # Errors
///
/// Returns a [`SubmitError`] for transport failures, non-2xx statuses, blank or
/// malformed bodies, and `success: false` replies.
pub async fn submit<T: Transport + ?Sized>(
    transport: &T,
    url: &str,
    request: &ActivityRequest,
) -> Result<String, SubmitError> {
    let body = request
        .to_json()
        .map_err(|e| SubmitError::Encode(e.to_string()))?;
    tracing::debug!(%url, num_children = request.num_children(), "posting activity request");
    let reply = transport.post_json(url, body).await?;
    classify_reply(&reply)
}

/// Map an HTTP reply to the activities text or a [`SubmitError`].
///
/// Checks run status first, then body, then the `success` flag.
///
/// # Errors
///
/// See [`submit`].
pub fn classify_reply(reply: &HttpReply) -> Result<String, SubmitError> {
    if !reply.is_success() {
        return Err(SubmitError::Status {
            status: reply.status,
        });
    }
    form::decode_response(&reply.body)?
        .into_activities()
        .map_err(SubmitError::Application)
}
