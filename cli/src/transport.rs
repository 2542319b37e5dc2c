//! Native HTTP transport for the activity form, backed by `reqwest`.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use async_trait::async_trait;
use client::config::Timeouts;
use client::net::api::{HttpReply, Transport};
use client::net::error::SubmitError;
use reqwest::header::CONTENT_TYPE;

pub struct ReqwestTransport {
    http: reqwest::Client,
    request_secs: u64,
}

impl ReqwestTransport {
    /// Build a client enforcing `timeouts` on every request.
    ///
    /// # Errors
    ///
    /// Returns the builder error when the TLS backend cannot initialise.
    pub fn new(timeouts: Timeouts) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(timeouts.request())
            .connect_timeout(timeouts.connect())
            .build()?;
        Ok(Self::with_client(http, timeouts.request_secs))
    }

    /// Wrap a preconfigured client. `request_secs` is only used in timeout messages.
    pub fn with_client(http: reqwest::Client, request_secs: u64) -> Self {
        Self { http, request_secs }
    }

    fn map_error(&self, err: reqwest::Error) -> SubmitError {
        if err.is_timeout() {
            SubmitError::Timeout {
                secs: self.request_secs,
            }
        } else {
            SubmitError::Transport(err.to_string())
        }
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, SubmitError> {
        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.map_error(e))?;
        tracing::debug!(status, bytes = body.len(), "activity reply received");
        Ok(HttpReply { status, body })
    }
}
