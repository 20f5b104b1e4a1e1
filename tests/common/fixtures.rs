//! Test data factories for repograph types
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use repograph::types::{
    Branch, BranchCommit, Commit, CommitActivity, CommitAuthor, Contributor, RepoOwner,
    RepoSnapshot, RepoSpec, Repository,
};

/// Create a commit with the given parents
pub fn make_commit(sha: &str, parents: &[&str]) -> Commit {
    Commit {
        sha: sha.to_string(),
        parents: parents.iter().map(ToString::to_string).collect(),
        message: format!("Commit {sha}\n\nBody of {sha}"),
        author: CommitAuthor {
            name: "Test Author".to_string(),
            email: "test@example.com".to_string(),
            date: "2024-01-05T15:07:00Z".to_string(),
            avatar_url: None,
        },
        url: format!("https://github.com/testowner/testrepo/commit/{sha}"),
    }
}

/// Linear history, newest first: `c{n-1} -> ... -> c0`
pub fn linear_history(n: usize) -> Vec<Commit> {
    (0..n)
        .rev()
        .map(|i| {
            let sha = format!("c{i}");
            if i == 0 {
                make_commit(&sha, &[])
            } else {
                make_commit(&sha, &[&format!("c{}", i - 1)])
            }
        })
        .collect()
}

/// Two feature branches merged into main, newest first
///
/// ```text
/// m2 ─┬─ m1 ─┬─ base
///     │      └─ f1 ── base
///     └─ g2 ── g1 ── m1
/// ```
pub fn feature_merges() -> Vec<Commit> {
    vec![
        make_commit("m2", &["m1", "g2"]),
        make_commit("g2", &["g1"]),
        make_commit("g1", &["m1"]),
        make_commit("m1", &["base", "f1"]),
        make_commit("f1", &["base"]),
        make_commit("base", &[]),
    ]
}

/// A history whose oldest commits point outside the window
pub fn truncated_window() -> Vec<Commit> {
    vec![
        make_commit("w3", &["w2", "old-feature"]),
        make_commit("w2", &["w1"]),
        make_commit("w1", &["old-main"]),
    ]
}

/// Octopus merge with three parents
pub fn octopus() -> Vec<Commit> {
    vec![
        make_commit("oct", &["p1", "p2", "p3"]),
        make_commit("p3", &["root"]),
        make_commit("p2", &["root"]),
        make_commit("p1", &["root"]),
        make_commit("root", &[]),
    ]
}

/// Test repository spec
pub fn test_spec() -> RepoSpec {
    RepoSpec {
        owner: "testowner".to_string(),
        repo: "testrepo".to_string(),
        host: None,
    }
}

/// Repository metadata for the test spec
pub fn make_repository() -> Repository {
    Repository {
        id: 42,
        name: "testrepo".to_string(),
        full_name: "testowner/testrepo".to_string(),
        description: Some("A repository for tests".to_string()),
        html_url: "https://github.com/testowner/testrepo".to_string(),
        stargazers_count: 10,
        forks_count: 2,
        watchers_count: 10,
        language: Some("Rust".to_string()),
        created_at: "2020-01-01T00:00:00Z".to_string(),
        updated_at: "2024-01-05T15:07:00Z".to_string(),
        pushed_at: "2024-01-05T15:07:00Z".to_string(),
        default_branch: "main".to_string(),
        owner: RepoOwner {
            login: "testowner".to_string(),
            avatar_url: "https://avatars.example/testowner".to_string(),
        },
    }
}

/// Create a branch
pub fn make_branch(name: &str, sha: &str, protected: bool) -> Branch {
    Branch {
        name: name.to_string(),
        commit: BranchCommit {
            sha: sha.to_string(),
            url: format!("https://api.github.com/repos/testowner/testrepo/commits/{sha}"),
        },
        protected,
    }
}

/// Create a contributor
pub fn make_contributor(login: &str, contributions: u64) -> Contributor {
    Contributor {
        login: login.to_string(),
        avatar_url: format!("https://avatars.example/{login}"),
        contributions,
        html_url: format!("https://github.com/{login}"),
    }
}

/// Create an activity week
pub fn make_week(week: i64, days: [u64; 7]) -> CommitActivity {
    CommitActivity {
        week,
        total: days.iter().sum(),
        days: days.to_vec(),
    }
}

/// A full snapshot built around `feature_merges`
pub fn make_snapshot() -> RepoSnapshot {
    RepoSnapshot {
        spec: test_spec(),
        repository: make_repository(),
        commits: feature_merges(),
        branches: vec![
            make_branch("main", "m2", true),
            make_branch("feature-g", "g2", false),
        ],
        contributors: vec![make_contributor("ada", 30), make_contributor("linus", 12)],
        activity: vec![
            make_week(1_703_980_800, [0, 2, 1, 0, 0, 0, 0]),
            make_week(1_704_585_600, [1, 0, 0, 4, 0, 0, 0]),
        ],
        fetched_at: Utc.with_ymd_and_hms(2024, 1, 6, 12, 0, 0).unwrap(),
    }
}
