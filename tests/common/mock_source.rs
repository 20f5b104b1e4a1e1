//! Mock repository source for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use repograph::error::{Error, Result};
use repograph::platform::RepositorySource;
use repograph::types::{
    Branch, Commit, CommitActivity, Contributor, RepoSnapshot, RepoSpec, Repository,
};
use std::sync::Mutex;

/// Which fetch a recorded call was
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchCall {
    Repository,
    Commits(u8),
    Branches(u8),
    Contributors(u8),
    Activity,
}

/// Simple mock source serving canned data
///
/// Features:
/// - Responses taken from a snapshot (limits applied like the API would)
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockSource {
    spec: RepoSpec,
    data: RepoSnapshot,
    calls: Mutex<Vec<FetchCall>>,
    fail_commits: Mutex<Option<String>>,
    fail_activity: Mutex<Option<String>>,
}

impl MockSource {
    /// Create a mock serving the given snapshot's data
    pub fn with_snapshot(data: RepoSnapshot) -> Self {
        Self {
            spec: data.spec.clone(),
            data,
            calls: Mutex::new(Vec::new()),
            fail_commits: Mutex::new(None),
            fail_activity: Mutex::new(None),
        }
    }

    // === Error injection methods ===

    /// Make `fetch_commits` return an error
    pub fn fail_commits(&self, msg: &str) {
        *self.fail_commits.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `fetch_commit_activity` return an error
    pub fn fail_activity(&self, msg: &str) {
        *self.fail_activity.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification methods ===

    /// All fetches performed, in completion order
    pub fn calls(&self) -> Vec<FetchCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: FetchCall) {
        self.calls.lock().unwrap().push(call);
    }
}

fn take<T: Clone>(items: &[T], limit: u8) -> Vec<T> {
    items.iter().take(usize::from(limit)).cloned().collect()
}

#[async_trait]
impl RepositorySource for MockSource {
    async fn fetch_repository(&self) -> Result<Repository> {
        self.record(FetchCall::Repository);
        Ok(self.data.repository.clone())
    }

    async fn fetch_commits(&self, limit: u8) -> Result<Vec<Commit>> {
        self.record(FetchCall::Commits(limit));
        if let Some(msg) = self.fail_commits.lock().unwrap().clone() {
            return Err(Error::GitHubApi(msg));
        }
        Ok(take(&self.data.commits, limit))
    }

    async fn fetch_branches(&self, limit: u8) -> Result<Vec<Branch>> {
        self.record(FetchCall::Branches(limit));
        Ok(take(&self.data.branches, limit))
    }

    async fn fetch_contributors(&self, limit: u8) -> Result<Vec<Contributor>> {
        self.record(FetchCall::Contributors(limit));
        Ok(take(&self.data.contributors, limit))
    }

    async fn fetch_commit_activity(&self) -> Result<Vec<CommitActivity>> {
        self.record(FetchCall::Activity);
        if let Some(msg) = self.fail_activity.lock().unwrap().clone() {
            return Err(Error::GitHubApi(msg));
        }
        Ok(self.data.activity.clone())
    }

    fn spec(&self) -> &RepoSpec {
        &self.spec
    }
}
