use crate::{
    error::Res,
    spotify::SpotifyClient,
    types::{Episode, EpisodesResponse, ShowResponse},
};

/// Fetches name and publisher of a show.
///
/// # Arguments
///
/// * `client` - Authenticated Spotify client
/// * `show_id` - Spotify ID of the show
/// * `market` - ISO 3166-1 alpha-2 market the show must be available in
///
/// # Returns
///
/// The show metadata. A 404 or any other failure is an error; callers decide
/// whether that is fatal.
///
/// # Example
///
/// ```
/// let meta = get_show(&client, "4orGHEysjCAWvGEbHzeL9A", "US").await?;
/// println!("{} by {}", meta.name, meta.publisher.unwrap_or_default());
/// ```
pub async fn get_show(client: &SpotifyClient, show_id: &str, market: &str) -> Res<ShowResponse> {
    client
        .get(&format!("shows/{}", show_id), &[("market", market)])
        .await
}

/// Fetches the most recent episodes of a show, newest first.
///
/// Spotify orders `/shows/{id}/episodes` by release, newest first, so the
/// first `limit` items are the latest batch. `null` entries are dropped.
///
/// # Arguments
///
/// * `client` - Connection context of the current run
/// * `show_id` - Spotify show id
/// * `limit` - Batch size (1-50)
/// * `market` - ISO 3166-1 country code the episodes must be available in
pub async fn get_recent_episodes(
    client: &SpotifyClient,
    show_id: &str,
    limit: u32,
    market: &str,
) -> Res<Vec<Episode>> {
    let limit = limit.to_string();
    let response: EpisodesResponse = client
        .get(
            &format!("shows/{}/episodes", show_id),
            &[("limit", limit.as_str()), ("market", market)],
        )
        .await?;

    Ok(response.into_episodes())
}
