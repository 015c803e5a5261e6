use crate::{
    debug,
    error::Res,
    spotify::{SpotifyClient, fetcher::status_error},
    types::{Playlist, ReplacePlaylistRequest, ReplacePlaylistResponse},
};

/// Fetches id, name and owner of a playlist.
///
/// Only the fields the summary needs are requested.
///
/// # Arguments
///
/// * `client` - Authenticated Spotify client
/// * `playlist_id` - Spotify ID of the playlist
///
/// # Returns
///
/// The playlist, or [`DigestError::Status`](crate::DigestError::Status) when
/// the ID is unknown or not visible to the token.
///
/// # Example
///
/// ```
/// let playlist = get_playlist(&client, &settings.playlist_id).await?;
/// info!("Target playlist \"{}\"", playlist.name);
/// ```
pub async fn get_playlist(client: &SpotifyClient, playlist_id: &str) -> Res<Playlist> {
    client
        .get(
            &format!("playlists/{}", playlist_id),
            &[("fields", "id,name,owner(id,display_name)")],
        )
        .await
}

/// Replaces the full contents of a playlist with `uris`, in order.
///
/// Whatever the playlist held before is discarded. This is the only write of
/// a run and it is never retried: any non-success status comes back as an
/// error so a failed publish cannot go unnoticed.
///
/// # Returns
///
/// The new `snapshot_id` of the playlist, when Spotify reports one.
pub async fn replace(
    client: &SpotifyClient,
    playlist_id: &str,
    uris: &[String],
) -> Res<Option<String>> {
    let url = client.url(&format!("playlists/{}/tracks", playlist_id));
    let body = ReplacePlaylistRequest {
        uris: uris.to_vec(),
    };

    debug!("PUT {} ({} uris)", url, uris.len());

    let fetcher = client.fetcher();
    let response = fetcher
        .http()
        .put(&url)
        .bearer_auth(fetcher.bearer())
        .json(&body)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(status_error(&url, response).await);
    }

    // The body is informational, an empty or odd one does not undo the write.
    let text = response.text().await?;
    Ok(serde_json::from_str::<ReplacePlaylistResponse>(&text)
        .ok()
        .and_then(|r| r.snapshot_id))
}
