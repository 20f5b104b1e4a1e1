//! Repository source factory
//!
//! Creates repository sources based on a parsed spec.

use crate::auth::get_github_auth;
use crate::error::Result;
use crate::platform::{GitHubService, RepositorySource};
use crate::types::RepoSpec;

/// Create a repository source for a spec
///
/// Picks up a token when one is configured; otherwise the source reads
/// anonymously.
pub async fn create_repository_source(spec: &RepoSpec) -> Result<Box<dyn RepositorySource>> {
    let auth = get_github_auth().await;
    let token = auth.as_ref().map(|a| a.token.as_str());
    Ok(Box::new(GitHubService::new(spec.clone(), token)?))
}
