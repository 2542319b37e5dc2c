//! Browser transport backed by `fetch` via `gloo-net`.
//!
//! `fetch` has no built-in deadline, so the request is raced against a
//! `gloo-timers` sleep. Losing the race drops the fetch future.

use std::time::Duration;

use async_trait::async_trait;
use futures::future::{Either, select};

use super::api::{HttpReply, Transport};
use super::error::SubmitError;

pub struct FetchTransport {
    timeout: Duration,
}

impl FetchTransport {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, SubmitError> {
        let request = gloo_net::http::Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let exchange = async move {
            let resp = request
                .send()
                .await
                .map_err(|e| SubmitError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| SubmitError::Transport(e.to_string()))?;
            Ok(HttpReply { status, body })
        };
        let deadline = gloo_timers::future::sleep(self.timeout);

        match select(Box::pin(exchange), Box::pin(deadline)).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => {
                tracing::warn!(%url, secs = self.timeout.as_secs(), "activity request timed out");
                Err(SubmitError::Timeout {
                    secs: self.timeout.as_secs(),
                })
            }
        }
    }
}
