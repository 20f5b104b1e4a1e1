//! Repository data sources
//!
//! The fetch boundary: loosely shaped API responses come in, the typed
//! records in [`crate::types`] go out.

mod detection;
mod factory;
mod github;

pub use detection::{is_github_host, parse_repo_spec};
pub use factory::create_repository_source;
pub use github::GitHubService;

use crate::error::Result;
use crate::types::{Branch, Commit, CommitActivity, Contributor, RepoSpec, Repository};
use async_trait::async_trait;

/// Read-only access to one repository's history and metadata
///
/// Implementations return commits newest first and already typed; callers
/// never see raw API payloads.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// Fetch repository metadata
    async fn fetch_repository(&self) -> Result<Repository>;

    /// Fetch up to `limit` most recent commits on the default branch, newest first
    async fn fetch_commits(&self, limit: u8) -> Result<Vec<Commit>>;

    /// Fetch up to `limit` branches
    async fn fetch_branches(&self, limit: u8) -> Result<Vec<Branch>>;

    /// Fetch up to `limit` contributors, most active first
    async fn fetch_contributors(&self, limit: u8) -> Result<Vec<Contributor>>;

    /// Fetch the weekly commit activity for the last year
    async fn fetch_commit_activity(&self) -> Result<Vec<CommitActivity>>;

    /// The repository this source reads
    fn spec(&self) -> &RepoSpec;
}
