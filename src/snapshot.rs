//! Batch fetching and persistence of repository snapshots
//!
//! The graph core runs once per complete commit window, so all repository
//! data is fetched as one batch: either every request succeeds or the whole
//! snapshot fails with the first error.

use crate::error::Result;
use crate::graph::build_commit_graph;
use crate::platform::RepositorySource;
use crate::types::{CommitGraph, RepoSnapshot};
use chrono::Utc;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Default commit window
pub const DEFAULT_COMMIT_LIMIT: u8 = 100;

/// Default number of branches fetched
pub const DEFAULT_BRANCH_LIMIT: u8 = 100;

/// Default number of contributors fetched
pub const DEFAULT_CONTRIBUTOR_LIMIT: u8 = 20;

/// How much to fetch
///
/// `commit_limit` is the graph window: a larger window shows more history and
/// builds slower, a smaller one drops more edges to out-of-window parents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Most recent commits to fetch (1..=100)
    pub commit_limit: u8,
    /// Branches to fetch (1..=100)
    pub branch_limit: u8,
    /// Contributors to fetch (1..=100)
    pub contributor_limit: u8,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            commit_limit: DEFAULT_COMMIT_LIMIT,
            branch_limit: DEFAULT_BRANCH_LIMIT,
            contributor_limit: DEFAULT_CONTRIBUTOR_LIMIT,
        }
    }
}

/// Fetch everything for one repository concurrently
pub async fn fetch_snapshot(
    source: &dyn RepositorySource,
    options: &FetchOptions,
) -> Result<RepoSnapshot> {
    debug!("Fetching snapshot of {} ({:?})", source.spec(), options);

    let (repository, commits, branches, contributors, activity) = tokio::try_join!(
        source.fetch_repository(),
        source.fetch_commits(options.commit_limit),
        source.fetch_branches(options.branch_limit),
        source.fetch_contributors(options.contributor_limit),
        source.fetch_commit_activity(),
    )?;

    debug!(
        "Fetched {} commits, {} branches, {} contributors, {} activity weeks",
        commits.len(),
        branches.len(),
        contributors.len(),
        activity.len()
    );

    Ok(RepoSnapshot {
        spec: source.spec().clone(),
        repository,
        commits,
        branches,
        contributors,
        activity,
        fetched_at: Utc::now(),
    })
}

impl RepoSnapshot {
    /// Build the commit graph for this snapshot's window
    pub fn build_graph(&self) -> CommitGraph {
        build_commit_graph(&self.commits)
    }

    /// Write the snapshot as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        debug!("Saved snapshot of {} to {}", self.spec, path.display());
        Ok(())
    }

    /// Read a snapshot written by [`RepoSnapshot::save`]
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let snapshot: Self = serde_json::from_str(&json)?;
        debug!(
            "Loaded snapshot of {} ({} commits) from {}",
            snapshot.spec,
            snapshot.commits.len(),
            path.display()
        );
        Ok(snapshot)
    }
}
