//! Snapshot fetching and persistence

mod common;

use common::{FetchCall, MockSource, make_snapshot};
use repograph::error::Error;
use repograph::snapshot::{FetchOptions, fetch_snapshot};
use repograph::types::RepoSnapshot;
use tempfile::TempDir;

#[tokio::test]
async fn test_fetch_snapshot_collects_everything() {
    let source = MockSource::with_snapshot(make_snapshot());

    let snapshot = fetch_snapshot(&source, &FetchOptions::default())
        .await
        .unwrap();

    assert_eq!(snapshot.spec.to_string(), "testowner/testrepo");
    assert_eq!(snapshot.repository.full_name, "testowner/testrepo");
    assert_eq!(snapshot.commits.len(), 6);
    assert_eq!(snapshot.branches.len(), 2);
    assert_eq!(snapshot.contributors.len(), 2);
    assert_eq!(snapshot.activity.len(), 2);

    let calls = source.calls();
    assert_eq!(calls.len(), 5);
    assert!(calls.contains(&FetchCall::Commits(100)));
    assert!(calls.contains(&FetchCall::Branches(100)));
    assert!(calls.contains(&FetchCall::Contributors(20)));
}

#[tokio::test]
async fn test_fetch_snapshot_passes_limits() {
    let source = MockSource::with_snapshot(make_snapshot());
    let options = FetchOptions {
        commit_limit: 3,
        branch_limit: 1,
        contributor_limit: 1,
    };

    let snapshot = fetch_snapshot(&source, &options).await.unwrap();

    assert_eq!(snapshot.commits.len(), 3);
    assert_eq!(snapshot.branches.len(), 1);
    assert_eq!(snapshot.contributors.len(), 1);
    assert!(source.calls().contains(&FetchCall::Commits(3)));

    // m2's first parent m1 is outside a 3-commit window
    let graph = snapshot.build_graph();
    assert!(graph.edges.iter().all(|e| e.target != "m1"));
}

#[tokio::test]
async fn test_fetch_snapshot_fails_as_a_whole() {
    let source = MockSource::with_snapshot(make_snapshot());
    source.fail_commits("boom");

    let err = fetch_snapshot(&source, &FetchOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::GitHubApi(ref m) if m == "boom"));
}

#[tokio::test]
async fn test_fetch_snapshot_fails_on_activity_error() {
    let source = MockSource::with_snapshot(make_snapshot());
    source.fail_activity("stats unavailable");

    let result = fetch_snapshot(&source, &FetchOptions::default()).await;

    assert!(result.is_err());
}

#[test]
fn test_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");
    let snapshot = make_snapshot();

    snapshot.save(&path).unwrap();
    let loaded = RepoSnapshot::load(&path).unwrap();

    assert_eq!(loaded, snapshot);
    assert_eq!(loaded.build_graph(), snapshot.build_graph());
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = RepoSnapshot::load(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_load_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{\"spec\": 1}").unwrap();

    let err = RepoSnapshot::load(&path).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}
