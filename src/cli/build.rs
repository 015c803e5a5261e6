use std::time::Duration;

use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    cli::shows::{resolve_shows, show_rows},
    config::Settings,
    digest::{Lineup, SelectionMode, ShowBatch, build_lineup},
    error,
    error::{DigestError, Res},
    info,
    spotify::{self, SpotifyClient},
    success,
    types::{CurrentUser, Playlist, Show},
    utils, warning,
};

#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Select and report, but leave the playlist untouched.
    pub dry_run: bool,
    /// Reference date override (`YYYY-MM-DD`).
    pub date: Option<String>,
}

/// Outcome of a run, used for the summary.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub user: CurrentUser,
    pub playlist: Playlist,
    pub shows: Vec<Show>,
    pub reference_date: NaiveDate,
    pub lineup: Lineup,
    pub published: bool,
    pub snapshot_id: Option<String>,
}

/// Entry point of `podigest build`. Prints the summary or exits with
/// status 1 and a diagnostic on stderr.
pub async fn build(settings: Settings, options: BuildOptions) {
    match run(&settings, &options).await {
        Ok(report) => print_report(&report),
        Err(DigestError::NoEpisodes) => error!(
            "No episodes found for any of the {} configured shows, playlist left unchanged.",
            settings.shows.len()
        ),
        Err(e @ DigestError::Auth { .. }) => error!("Authentication failed: {}", e),
        Err(e) => error!("Digest run failed: {}", e),
    }
}

/// Runs the whole digest: authenticate, resolve shows, select, publish.
///
/// Nothing is written unless a non-empty lineup was selected, and the write
/// is the last step.
///
/// # Errors
///
/// - [`DigestError::Auth`] when the refresh token exchange is rejected
/// - [`DigestError::RateLimited`] / [`DigestError::Status`] when any read fails,
///   show metadata lookups included
/// - [`DigestError::NoEpisodes`] when both selection passes are empty
/// - [`DigestError::Status`] when the playlist replace is rejected
pub async fn run(settings: &Settings, options: &BuildOptions) -> Res<BuildReport> {
    let (client, token) = SpotifyClient::connect(settings).await?;
    success!("Authenticated, access token valid for {}s", token.expires_in);

    let user = spotify::users::current_user(&client).await?;
    let playlist = spotify::playlist::get_playlist(&client, &settings.playlist_id).await?;
    info!(
        "Acting as {}, target playlist \"{}\" ({})",
        user.display_name(),
        playlist.name,
        playlist.id
    );

    let shows = resolve_shows(&client, &settings.shows, &settings.market).await?;

    let reference_date = utils::get_date_from_string(options.date.clone(), settings.timezone);
    info!(
        "Looking for episodes released on {} ({})",
        reference_date, settings.timezone
    );

    let batches = fetch_batches(&client, &shows, settings).await?;

    let lineup = build_lineup(&batches, reference_date)?;
    if lineup.mode == SelectionMode::Fallback {
        warning!(
            "No show released an episode on {}, using the newest episode of each show",
            reference_date
        );
    }

    let (published, snapshot_id) = if options.dry_run {
        (false, None)
    } else {
        let snapshot =
            spotify::playlist::replace(&client, &settings.playlist_id, &lineup.uris()).await?;
        (true, snapshot)
    };

    Ok(BuildReport {
        user,
        playlist,
        shows,
        reference_date,
        lineup,
        published,
        snapshot_id,
    })
}

async fn fetch_batches(
    client: &SpotifyClient,
    shows: &[Show],
    settings: &Settings,
) -> Res<Vec<ShowBatch>> {
    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let mut batches = Vec::with_capacity(shows.len());
    for (i, show) in shows.iter().enumerate() {
        pb.set_message(format!(
            "Fetching episodes of {} ({}/{})...",
            show.display_name(),
            i + 1,
            shows.len()
        ));

        let episodes = match spotify::shows::get_recent_episodes(
            client,
            &show.id,
            settings.episode_limit,
            &settings.market,
        )
        .await
        {
            Ok(episodes) => episodes,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };

        batches.push(ShowBatch {
            show: show.clone(),
            episodes,
        });
    }

    pb.finish_and_clear();
    Ok(batches)
}

fn print_report(report: &BuildReport) {
    info!("User: {} ({})", report.user.display_name(), report.user.id);
    info!("Playlist: {} ({})", report.playlist.name, report.playlist.id);
    info!("Shows:");
    println!("{}", Table::new(show_rows(&report.shows)));

    info!(
        "Lineup for {} ({} selection):",
        report.reference_date, report.lineup.mode
    );
    println!("{}", Table::new(report.lineup.table_rows()));

    if report.published {
        match &report.snapshot_id {
            Some(snapshot) => success!(
                "Playlist updated with {} episodes (snapshot {})",
                report.lineup.len(),
                snapshot
            ),
            None => success!("Playlist updated with {} episodes", report.lineup.len()),
        }
    } else {
        info!(
            "Dry run: {} episodes selected, playlist not modified",
            report.lineup.len()
        );
    }
}
