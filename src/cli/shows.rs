use tabled::Table;

use crate::{
    config::Settings,
    error,
    error::Res,
    spotify::{self, SpotifyClient},
    types::{Show, ShowTableRow},
    warning,
};

/// Prints the configured shows with their resolved Spotify metadata.
///
/// Unlike a digest run, a failed lookup here only warns and keeps the
/// configured label, so one broken id does not hide the rest of the list.
///
/// # Arguments
///
/// * `settings` - Loaded run settings, the show list and market are used
///
/// # Example
///
/// ```bash
/// podigest shows
/// ```
pub async fn shows(settings: Settings) {
    let client = match SpotifyClient::connect(&settings).await {
        Ok((client, _)) => client,
        Err(e) => error!("Authentication failed: {}", e),
    };

    let mut shows = Vec::with_capacity(settings.shows.len());
    for show in &settings.shows {
        match resolve_show(&client, show, &settings.market).await {
            Ok(resolved) => shows.push(resolved),
            Err(e) => {
                warning!(
                    "Cannot resolve show {} ({}), using configured label. Err: {}",
                    show.label,
                    show.id,
                    e
                );
                shows.push(show.clone());
            }
        }
    }

    println!("{}", Table::new(show_rows(&shows)));
}

/// Resolves display metadata for every show, in order.
///
/// The configured id is never replaced, only `name` and `publisher` are
/// filled in.
///
/// # Errors
///
/// The first failed lookup is returned as is ([`crate::DigestError::Status`],
/// [`crate::DigestError::RateLimited`] or a transport error). Shows after it
/// are not looked up.
pub async fn resolve_shows(client: &SpotifyClient, shows: &[Show], market: &str) -> Res<Vec<Show>> {
    let mut resolved = Vec::with_capacity(shows.len());
    for show in shows {
        resolved.push(resolve_show(client, show, market).await?);
    }
    Ok(resolved)
}

async fn resolve_show(client: &SpotifyClient, show: &Show, market: &str) -> Res<Show> {
    let meta = spotify::shows::get_show(client, &show.id, market).await?;
    Ok(show.clone().resolved(meta))
}

pub fn show_rows(shows: &[Show]) -> Vec<ShowTableRow> {
    shows
        .iter()
        .map(|s| ShowTableRow {
            id: s.id.clone(),
            name: s.display_name().to_string(),
            publisher: s.publisher.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}
