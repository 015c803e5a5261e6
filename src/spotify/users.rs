use crate::{error::Res, spotify::SpotifyClient, types::CurrentUser};

/// Identity the access token acts on behalf of.
///
/// Doubles as a check that the token actually works before any show is
/// scanned.
///
/// # Returns
///
/// The user behind the refresh token; `display_name` may be missing.
pub async fn current_user(client: &SpotifyClient) -> Res<CurrentUser> {
    client.get("me", &[]).await
}
