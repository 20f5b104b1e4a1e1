//! End-to-end tests with real GitHub API
//!
//! These tests require:
//! - `REPOGRAPH_E2E_TESTS=1` environment variable
//! - Network access to api.github.com
//! - Optionally `gh` CLI authenticated (anonymous requests are rate limited)
//!
//! Run with: `REPOGRAPH_E2E_TESTS=1 cargo test --test e2e_tests -- --include-ignored`

use repograph::auth::get_github_auth;
use repograph::platform::{GitHubService, RepositorySource, parse_repo_spec};
use repograph::snapshot::{FetchOptions, fetch_snapshot};
use repograph::types::EdgeKind;
use std::env;

/// A public repository with plenty of merge commits
const TEST_REPO: &str = "rust-lang/rustlings";

/// Check if E2E tests should run
fn e2e_enabled() -> bool {
    env::var("REPOGRAPH_E2E_TESTS").is_ok()
}

async fn service() -> GitHubService {
    let spec = parse_repo_spec(TEST_REPO).expect("valid test repo spec");
    let auth = get_github_auth().await;
    GitHubService::new(spec, auth.as_ref().map(|a| a.token.as_str()))
        .expect("failed to create GitHub service")
}

#[tokio::test]
#[ignore = "requires REPOGRAPH_E2E_TESTS=1 and network access"]
async fn test_fetch_repository() {
    if !e2e_enabled() {
        return;
    }

    let repo = service().await.fetch_repository().await.unwrap();

    assert_eq!(repo.full_name, TEST_REPO);
    assert!(!repo.default_branch.is_empty());
}

#[tokio::test]
#[ignore = "requires REPOGRAPH_E2E_TESTS=1 and network access"]
async fn test_live_snapshot_builds_graph() {
    if !e2e_enabled() {
        return;
    }

    let source = service().await;
    let options = FetchOptions {
        commit_limit: 50,
        ..FetchOptions::default()
    };
    let snapshot = fetch_snapshot(&source, &options).await.unwrap();
    let graph = snapshot.build_graph();

    assert_eq!(graph.nodes.len(), snapshot.commits.len());
    assert!(snapshot.commits.len() <= 50);
    assert!(graph.lineage_count >= 1);
    for edge in graph.edges.iter().filter(|e| e.kind == EdgeKind::Merge) {
        assert!(edge.emphasized);
    }
}

#[tokio::test]
#[ignore = "requires REPOGRAPH_E2E_TESTS=1 and network access"]
async fn test_unknown_repository() {
    if !e2e_enabled() {
        return;
    }

    let spec = parse_repo_spec("repograph-e2e/does-not-exist-0000").unwrap();
    let source = GitHubService::new(spec, None).unwrap();
    let err = source.fetch_repository().await.unwrap_err();

    assert!(matches!(
        err,
        repograph::error::Error::RepositoryNotFound(_) | repograph::error::Error::RateLimited { .. }
    ));
}
