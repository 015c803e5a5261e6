use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    config::Settings,
    error::Res,
    spotify::{RateLimitedFetcher, RetryPolicy, auth},
    types::Token,
};

/// Per-run connection context: one HTTP client, one bearer token, one API
/// base URL. Built once and borrowed by every endpoint call.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    fetcher: RateLimitedFetcher,
    api_url: String,
}

impl SpotifyClient {
    pub fn new(http: Client, api_url: &str, access_token: &str, policy: RetryPolicy) -> Self {
        Self {
            fetcher: RateLimitedFetcher::new(http, access_token, policy),
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Builds the HTTP client, exchanges the refresh token and returns a
    /// ready-to-use context together with the token that was issued.
    ///
    /// # Errors
    ///
    /// [`DigestError::Auth`](crate::DigestError::Auth) when the token
    /// endpoint rejects the credentials, or a transport error.
    ///
    /// # Example
    ///
    /// ```
    /// let (client, token) = SpotifyClient::connect(&settings).await?;
    /// let user = spotify::users::current_user(&client).await?;
    /// ```
    pub async fn connect(settings: &Settings) -> Res<(Self, Token)> {
        let http = Client::builder()
            .timeout(settings.request_timeout())
            .build()?;

        let token = auth::refresh_access_token(&http, &settings.token_url, &settings.credentials)
            .await?;

        let client = Self::new(http, &settings.api_url, &token.access_token, settings.retry);
        Ok((client, token))
    }

    /// Absolute API URL for `path` (no leading slash).
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    pub fn fetcher(&self) -> &RateLimitedFetcher {
        &self.fetcher
    }

    /// Rate-limited GET of `path`, decoded as JSON.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, params: &[(&str, &str)]) -> Res<T> {
        self.fetcher.fetch_json(&self.url(path), params).await
    }
}
