//! Error types for repograph

use thiserror::Error;

/// Errors raised around the commit graph core (fetching, parsing, persistence)
#[derive(Debug, Error)]
pub enum Error {
    /// Repository does not exist or is not visible with the current credentials
    #[error("repository not found: {0}")]
    RepositoryNotFound(String),

    /// GitHub API rate limit exhausted
    #[error("GitHub API rate limit exceeded{}", rate_limit_hint(*.reset))]
    RateLimited {
        /// Unix timestamp when the limit resets, if the API reported one
        reset: Option<i64>,
    },

    /// Any other GitHub API failure
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Authentication failure
    #[error("authentication error: {0}")]
    Auth(String),

    /// Input could not be understood as a repository reference
    #[error("invalid repository: {0}")]
    InvalidRepoSpec(String),

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// octocrab client failure
    #[error("GitHub client error: {0}")]
    Octocrab(#[from] octocrab::Error),

    /// JSON (de)serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn rate_limit_hint(reset: Option<i64>) -> String {
    match reset.and_then(|ts| chrono::DateTime::from_timestamp(ts, 0)) {
        Some(at) => format!(" (resets at {} UTC); set GITHUB_TOKEN to raise the limit", at.format("%H:%M")),
        None => "; set GITHUB_TOKEN to raise the limit".to_string(),
    }
}

/// Result alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
