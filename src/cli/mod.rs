//! CLI commands
//!
//! Command implementations for the `repograph` binary.

mod auth;
mod fetch;
mod graph;
mod info;
pub mod style;

pub use auth::run_auth;
pub use fetch::run_fetch;
pub use graph::run_graph;
pub use info::run_info;

use indicatif::ProgressBar;
use repograph::error::{Error, Result};
use repograph::platform::{create_repository_source, parse_repo_spec};
use repograph::snapshot::{FetchOptions, fetch_snapshot};
use repograph::types::RepoSnapshot;
use std::path::Path;
use std::time::Duration;

/// Where a command reads its repository data from
pub enum SnapshotInput<'a> {
    /// Fetch live from GitHub
    Remote(&'a str),
    /// Read a file written by `repograph fetch`
    File(&'a Path),
}

impl<'a> SnapshotInput<'a> {
    /// Pick the input from the `<REPO>` argument and `--from-file` flag
    pub fn from_args(repo: Option<&'a str>, from_file: Option<&'a Path>) -> Result<Self> {
        match (from_file, repo) {
            (Some(path), _) => Ok(Self::File(path)),
            (None, Some(repo)) => Ok(Self::Remote(repo)),
            (None, None) => Err(Error::InvalidRepoSpec(
                "provide a repository (owner/repo) or --from-file".to_string(),
            )),
        }
    }
}

/// Fetch or load a snapshot, showing a spinner while the network is busy
///
/// A `commit_limit` also trims snapshots loaded from disk, so a saved window
/// can be viewed at a smaller size.
pub async fn load_snapshot(input: SnapshotInput<'_>, commit_limit: Option<u8>) -> Result<RepoSnapshot> {
    match input {
        SnapshotInput::File(path) => {
            let mut snapshot = RepoSnapshot::load(path)?;
            if let Some(limit) = commit_limit {
                snapshot.commits.truncate(usize::from(limit));
            }
            Ok(snapshot)
        }
        SnapshotInput::Remote(repo) => {
            let spec = parse_repo_spec(repo)?;
            let source = create_repository_source(&spec).await?;
            let options = FetchOptions {
                commit_limit: commit_limit.unwrap_or(FetchOptions::default().commit_limit),
                ..FetchOptions::default()
            };

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(style::spinner_style());
            spinner.set_message(format!("Fetching {spec}..."));
            spinner.enable_steady_tick(Duration::from_millis(80));

            let result = fetch_snapshot(source.as_ref(), &options).await;
            spinner.finish_and_clear();
            result
        }
    }
}
