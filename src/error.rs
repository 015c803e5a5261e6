use reqwest::StatusCode;
use thiserror::Error;

/// Result alias used by every fallible operation in the crate.
pub type Res<T> = std::result::Result<T, DigestError>;

/// Everything that can abort a digest run.
#[derive(Error, Debug)]
pub enum DigestError {
    /// A required environment variable is not set.
    #[error("{0} must be set")]
    MissingConfig(&'static str),

    /// An environment variable is set to something unusable.
    #[error("invalid value for {key}: {reason}")]
    InvalidConfig { key: &'static str, reason: String },

    /// The refresh token exchange was rejected. Never retried.
    #[error("token exchange rejected with {status}: {body}")]
    Auth { status: StatusCode, body: String },

    /// The server kept answering 429 until the attempt budget ran out.
    #[error("rate limited on {url} after {attempts} attempts (last Retry-After: {retry_after}s)")]
    RateLimited {
        url: String,
        attempts: u32,
        retry_after: u64,
    },

    /// Any other non-success response.
    #[error("request to {url} failed with {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    /// Connection, timeout or body decoding failure.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Neither the strict nor the fallback pass found a single episode.
    #[error("no episodes found for any show")]
    NoEpisodes,
}

impl DigestError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Auth { status, .. } | Self::Status { status, .. } => Some(*status),
            Self::RateLimited { .. } => Some(StatusCode::TOO_MANY_REQUESTS),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }
}
