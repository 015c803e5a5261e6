use reqwest::Client;

use crate::{
    debug,
    error::{DigestError, Res},
    types::{Credentials, Token},
};

/// Exchanges the long-lived refresh token for a fresh access token.
///
/// Uses the `refresh_token` grant with HTTP Basic client authentication.
/// A rejected exchange is an operator error (bad or revoked refresh token,
/// wrong client secret) and is returned as [`DigestError::Auth`] without any
/// retry, rate limiting included.
///
/// # Arguments
///
/// * `http` - Client shared with every later request of the run
/// * `token_url` - Spotify accounts token endpoint
/// * `credentials` - Client id, client secret and refresh token
///
/// # Example
///
/// ```
/// let token = refresh_access_token(&http, DEFAULT_TOKEN_URL, &settings.credentials).await?;
/// println!("token valid for {}s", token.expires_in);
/// ```
pub async fn refresh_access_token(
    http: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Res<Token> {
    debug!("POST {} (refresh_token grant)", token_url);

    let response = http
        .post(token_url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", credentials.refresh_token.as_str()),
        ])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(DigestError::Auth { status, body });
    }

    Ok(response.json::<Token>().await?)
}
