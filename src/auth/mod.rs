//! Authentication for GitHub
//!
//! Supports CLI-based auth (gh) and environment variables. Every read this
//! crate performs also works anonymously, at a much lower rate limit.

mod github;

pub use github::{
    GitHubAuthConfig, get_github_auth, require_github_auth, test_github_auth, token_from_env,
};

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token from the gh CLI
    Cli,
    /// Token from environment variable
    EnvVar,
}
