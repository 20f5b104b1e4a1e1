//! GitHub authentication

use crate::auth::AuthSource;
use crate::error::{Error, Result};
use std::env;
use tokio::process::Command;
use tracing::debug;

/// Environment variables consulted for a token, in priority order
const TOKEN_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// A token and where it came from
#[derive(Debug, Clone)]
pub struct GitHubAuthConfig {
    /// Personal access or OAuth token
    pub token: String,
    /// Which lookup produced it
    pub source: AuthSource,
}

/// Find a GitHub token: the gh CLI first, then `GITHUB_TOKEN`, then `GH_TOKEN`
///
/// `None` is not an error here; every read this crate does works anonymously.
pub async fn get_github_auth() -> Option<GitHubAuthConfig> {
    if let Some(token) = get_gh_cli_token().await {
        debug!("Using GitHub token from gh CLI");
        return Some(GitHubAuthConfig {
            token,
            source: AuthSource::Cli,
        });
    }

    let auth = token_from_env(|name| env::var(name).ok());
    if auth.is_none() {
        debug!("No GitHub token found, requests will be anonymous");
    }
    auth
}

/// Like [`get_github_auth`], but failing when no token is available
pub async fn require_github_auth() -> Result<GitHubAuthConfig> {
    get_github_auth().await.ok_or_else(|| {
        Error::Auth(
            "No GitHub authentication found. Run `gh auth login` or set GITHUB_TOKEN".to_string(),
        )
    })
}

/// Pick a token from environment-style lookups; blank values are skipped
pub fn token_from_env<F>(lookup: F) -> Option<GitHubAuthConfig>
where
    F: Fn(&str) -> Option<String>,
{
    TOKEN_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .map(|token| token.trim().to_string())
        .find(|token| !token.is_empty())
        .map(|token| GitHubAuthConfig {
            token,
            source: AuthSource::EnvVar,
        })
}

/// Ask the gh CLI for its token, scoped to `GH_HOST` when set
///
/// A missing binary, a logged-out host and an empty answer all mean "no token".
async fn get_gh_cli_token() -> Option<String> {
    let mut gh = Command::new("gh");
    gh.args(["auth", "token"]);
    if let Some(host) = env::var("GH_HOST").ok().filter(|h| !h.is_empty()) {
        gh.args(["--hostname", &host]);
    }

    let output = gh.output().await.ok()?;
    if !output.status.success() {
        debug!("gh CLI has no token ({})", output.status);
        return None;
    }

    Some(String::from_utf8_lossy(&output.stdout).trim().to_string()).filter(|t| !t.is_empty())
}

/// Test GitHub authentication, returning the authenticated login
///
/// `host` selects a GitHub Enterprise instance.
pub async fn test_github_auth(config: &GitHubAuthConfig, host: Option<&str>) -> Result<String> {
    let mut builder = octocrab::Octocrab::builder().personal_token(config.token.clone());

    if let Some(h) = host {
        builder = builder
            .base_uri(format!("https://{h}/api/v3"))
            .map_err(|e| Error::GitHubApi(e.to_string()))?;
    }

    let me = builder
        .build()?
        .current()
        .user()
        .await
        .map_err(|e| Error::Auth(format!("token rejected by GitHub: {e}")))?;
    debug!("Token belongs to {}", me.login);

    Ok(me.login)
}
