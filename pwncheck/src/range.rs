use std::time::Duration;

use reqwest::header;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::config::Config;
use crate::error::{Error, Result};

const RANGE_URL: &str = "https://api.pwnedpasswords.com/range/";

/// Client for the k-anonymity range endpoint.
///
/// Owns one long-lived `reqwest::Client` shared by every call, so connections
/// are reused and the client stays safe to use from concurrent tasks.
#[derive(Debug, Clone)]
pub(crate) struct RangeClient {
    http: reqwest::Client,
    user_agent: String,
    api_key: Option<String>,
    add_padding: bool,
    max_retry_attempts: u8,
    initial_backoff: Duration,
    max_backoff: Duration,
}

impl RangeClient {
    pub(crate) fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            user_agent: config.user_agent.clone(),
            api_key: config.api_key.clone(),
            add_padding: config.add_padding,
            max_retry_attempts: config.max_retry_attempts,
            initial_backoff: config.initial_backoff,
            max_backoff: config.max_backoff,
        })
    }

    /// Fetch the raw (still compressed) payload for a query prefix, retrying
    /// transient failures with exponential backoff.
    ///
    /// Fatal failures (401, 403) and terminal ones (429, 503) are surfaced
    /// immediately; exhausting the retry budget surfaces the last failure.
    /// Cancellation aborts the in-flight attempt and any pending backoff wait.
    pub(crate) async fn fetch(&self, cancel: &CancellationToken, prefix: &str) -> Result<Vec<u8>> {
        let mut backoff = self.initial_backoff;
        let mut attempt: u32 = 0;
        loop {
            if cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }
            match self.attempt(cancel, prefix).await {
                Ok(body) => return Ok(body),
                Err(err) if err.is_retryable() && attempt < u32::from(self.max_retry_attempts) => {
                    attempt += 1;
                    warn!(attempt, error = %err, "range query failed, backing off");
                    tokio::select! {
                        _ = cancel.cancelled() => return Err(Error::Cancelled),
                        _ = tokio::time::sleep(backoff) => {}
                    }
                    backoff = (backoff * 2).min(self.max_backoff);
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn attempt(&self, cancel: &CancellationToken, prefix: &str) -> Result<Vec<u8>> {
        let mut request = self
            .http
            .get(format!("{}{}", RANGE_URL, prefix))
            // the body stays compressed; the decoder downstream reverses it
            .header(header::ACCEPT_ENCODING, "br")
            .header(header::USER_AGENT, self.user_agent.as_str());
        if let Some(key) = &self.api_key {
            request = request.header("hibp-api-key", key.as_str());
        }
        if self.add_padding {
            request = request.header("Add-Padding", "true");
        }

        let response = tokio::select! {
            _ = cancel.cancelled() => return Err(Error::Cancelled),
            response = request.send() => response?,
        };

        // https://haveibeenpwned.com/API/v3#ResponseCodes
        match response.status().as_u16() {
            200 => {
                let body = tokio::select! {
                    _ = cancel.cancelled() => return Err(Error::Cancelled),
                    body = response.bytes() => body?,
                };
                Ok(body.to_vec())
            }
            400 => Err(Error::MalformedRequest),
            401 => Err(Error::Unauthorized),
            403 => Err(Error::MissingUserAgent),
            // every prefix from 00000 to FFFFF is documented to return 200,
            // so a 404 is an anomaly worth another attempt
            404 => Err(Error::UnexpectedStatus(404)),
            429 => Err(Error::TooManyRequests),
            503 => Err(Error::ServiceUnavailable),
            status => Err(Error::UnexpectedStatus(status)),
        }
    }
}
