//! Repository spec parsing from user input and remote URLs

use crate::error::{Error, Result};
use crate::types::RepoSpec;
use regex::Regex;
use std::env;
use std::sync::LazyLock;

static SSH_REMOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^git@([^:]+):([^/]+)/([^/]+?)(?:\.git)?/?$").expect("valid SSH remote regex")
});

static SHORTHAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9][A-Za-z0-9-]*)/([A-Za-z0-9._-]+?)(?:\.git)?(?:/.*)?$")
        .expect("valid shorthand regex")
});

/// Check whether a hostname is GitHub (github.com or the `GH_HOST` instance)
pub fn is_github_host(hostname: &str) -> bool {
    let gh_host = env::var("GH_HOST").ok();
    hostname == "github.com"
        || hostname == "www.github.com"
        || gh_host.as_deref().is_some_and(|h| hostname == h)
}

/// Parse a repository reference
///
/// Accepts:
/// - `owner/repo[/tree/main/...]`
/// - `https://github.com/owner/repo[.git][/tree/main/...]`
/// - `github.com/owner/repo`
/// - `git@github.com:owner/repo.git`
///
/// Hosts other than github.com are accepted when they match `GH_HOST` and are
/// recorded as GitHub Enterprise hosts.
pub fn parse_repo_spec(input: &str) -> Result<RepoSpec> {
    let input = input.trim();
    if input.is_empty() {
        return Err(invalid(input));
    }

    if let Some(caps) = SSH_REMOTE.captures(input) {
        return spec_for_host(&caps[1], &caps[2], &caps[3], input);
    }

    if input.contains("://") {
        return parse_url(input);
    }

    // Scheme-less URL, e.g. github.com/owner/repo
    if let Some((host, _)) = input.split_once('/') {
        if host.contains('.') {
            return parse_url(&format!("https://{input}"));
        }
    }

    let caps = SHORTHAND.captures(input).ok_or_else(|| invalid(input))?;
    Ok(RepoSpec {
        owner: caps[1].to_string(),
        repo: caps[2].to_string(),
        host: None,
    })
}

fn parse_url(input: &str) -> Result<RepoSpec> {
    let url = url::Url::parse(input).map_err(|_| invalid(input))?;
    let host = url.host_str().ok_or_else(|| invalid(input))?;

    let mut segments = url
        .path_segments()
        .ok_or_else(|| invalid(input))?
        .filter(|s| !s.is_empty());

    let owner = segments.next().ok_or_else(|| invalid(input))?;
    let repo = segments.next().ok_or_else(|| invalid(input))?;

    spec_for_host(host, owner, repo, input)
}

fn spec_for_host(host: &str, owner: &str, repo: &str, input: &str) -> Result<RepoSpec> {
    if !is_github_host(host) {
        return Err(Error::InvalidRepoSpec(format!(
            "{input} is not a GitHub repository (set GH_HOST for GitHub Enterprise)"
        )));
    }

    let repo = repo.strip_suffix(".git").unwrap_or(repo);
    if owner.is_empty() || repo.is_empty() {
        return Err(invalid(input));
    }

    Ok(RepoSpec {
        owner: owner.to_string(),
        repo: repo.to_string(),
        host: if host == "github.com" || host == "www.github.com" {
            None
        } else {
            Some(host.to_string())
        },
    })
}

fn invalid(input: &str) -> Error {
    Error::InvalidRepoSpec(format!(
        "cannot parse '{input}', expected owner/repo or a GitHub URL"
    ))
}
