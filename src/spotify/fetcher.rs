use std::time::Duration;

use reqwest::{Client, Response, StatusCode, header::HeaderMap};
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::{
    debug,
    error::{DigestError, Res},
    warning,
};

/// Waits above this are honoured but reported.
const LONG_WAIT: Duration = Duration::from_secs(120);

/// How many times a read is attempted and how long to back off when the
/// server does not say.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub default_wait: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            default_wait: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Backoff for a 429 response: `Retry-After` in whole seconds, or
    /// `default_wait` when the header is absent or unreadable.
    pub fn wait_for(&self, headers: &HeaderMap) -> Duration {
        headers
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(self.default_wait)
    }

    fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

/// Issues authenticated GET requests, retrying only on HTTP 429.
///
/// Every 429 consumes one attempt of the policy budget. Any other non-success
/// status is returned as [`DigestError::Status`] right away.
#[derive(Debug, Clone)]
pub struct RateLimitedFetcher {
    http: Client,
    bearer: String,
    policy: RetryPolicy,
}

impl RateLimitedFetcher {
    pub fn new(http: Client, bearer: impl Into<String>, policy: RetryPolicy) -> Self {
        Self {
            http,
            bearer: bearer.into(),
            policy,
        }
    }

    pub fn http(&self) -> &Client {
        &self.http
    }

    pub fn bearer(&self) -> &str {
        &self.bearer
    }

    /// Sends a GET to `url` until it gets a non-429 answer or the attempt
    /// budget runs out.
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute request URL
    /// * `params` - Query parameters
    ///
    /// # Returns
    ///
    /// - `Ok(Response)` - First successful response
    /// - `Err(DigestError::RateLimited)` - Every attempt answered 429
    /// - `Err(DigestError::Status)` - Any other non-success status, not retried
    pub async fn fetch(&self, url: &str, params: &[(&str, &str)]) -> Res<Response> {
        let max_attempts = self.policy.attempts();
        let mut attempt = 0;

        loop {
            attempt += 1;
            debug!("GET {} (attempt {}/{})", url, attempt, max_attempts);

            let response = self
                .http
                .get(url)
                .bearer_auth(&self.bearer)
                .query(params)
                .send()
                .await?;

            let status = response.status();
            if status == StatusCode::TOO_MANY_REQUESTS {
                let wait = self.policy.wait_for(response.headers());
                if attempt >= max_attempts {
                    return Err(DigestError::RateLimited {
                        url: url.to_string(),
                        attempts: attempt,
                        retry_after: wait.as_secs(),
                    });
                }

                if wait > LONG_WAIT {
                    warning!(
                        "Spotify asked to wait {} seconds before retrying {}",
                        wait.as_secs(),
                        url
                    );
                }
                debug!("rate limited, sleeping {}s", wait.as_secs());
                sleep(wait).await;
                continue;
            }

            if !status.is_success() {
                return Err(status_error(url, response).await);
            }

            return Ok(response);
        }
    }

    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Res<T> {
        let response = self.fetch(url, params).await?;
        Ok(response.json::<T>().await?)
    }
}

/// Turns a non-success response into [`DigestError::Status`], keeping the
/// body for the diagnostic.
pub async fn status_error(url: &str, response: Response) -> DigestError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    DigestError::Status {
        url: url.to_string(),
        status,
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, RETRY_AFTER};

    #[test]
    fn wait_reads_retry_after_seconds() {
        let policy = RetryPolicy::default();
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_static("7"));
        assert_eq!(policy.wait_for(&headers), Duration::from_secs(7));
    }

    #[test]
    fn wait_defaults_when_header_missing_or_garbage() {
        let policy = RetryPolicy {
            max_attempts: 3,
            default_wait: Duration::from_millis(250),
        };
        assert_eq!(policy.wait_for(&HeaderMap::new()), Duration::from_millis(250));

        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_static("soon"));
        assert_eq!(policy.wait_for(&headers), Duration::from_millis(250));
    }

    #[test]
    fn zero_attempts_still_tries_once() {
        let policy = RetryPolicy {
            max_attempts: 0,
            ..RetryPolicy::default()
        };
        assert_eq!(policy.attempts(), 1);
    }
}
