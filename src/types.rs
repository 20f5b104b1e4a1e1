//! Core types for repograph

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Author of a commit as reported by the commits endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommitAuthor {
    /// Author name (`"Unknown"` when the API omits it)
    pub name: String,
    /// Author email (empty when the API omits it)
    pub email: String,
    /// ISO-8601 authored timestamp (empty when the API omits it)
    pub date: String,
    /// Avatar of the linked GitHub account, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// A commit in the fetched history window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Commit {
    /// Full commit SHA (unique within one window)
    pub sha: String,
    /// Parent SHAs; the first entry is the mainline parent
    pub parents: Vec<String>,
    /// Full commit message
    pub message: String,
    /// Commit author
    pub author: CommitAuthor,
    /// Web URL of the commit
    pub url: String,
}

impl Commit {
    /// Check if this is a merge commit (two or more parents)
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    /// Check if this is a root commit (no parents)
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}

/// Owner of a repository
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepoOwner {
    /// User or organization login
    pub login: String,
    /// Avatar URL
    pub avatar_url: String,
}

/// Repository metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Repository {
    /// Numeric GitHub id
    pub id: u64,
    /// Repository name
    pub name: String,
    /// `owner/name`
    pub full_name: String,
    /// Description, if set
    pub description: Option<String>,
    /// Web URL
    pub html_url: String,
    /// Star count
    pub stargazers_count: u64,
    /// Fork count
    pub forks_count: u64,
    /// Watcher count
    pub watchers_count: u64,
    /// Primary language, if detected
    pub language: Option<String>,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
    /// Last push timestamp
    pub pushed_at: String,
    /// Default branch name
    pub default_branch: String,
    /// Repository owner
    pub owner: RepoOwner,
}

/// Tip commit of a branch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BranchCommit {
    /// Tip SHA
    pub sha: String,
    /// API URL of the tip commit
    pub url: String,
}

/// A branch reference
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Branch {
    /// Branch name
    pub name: String,
    /// Tip commit
    pub commit: BranchCommit,
    /// Whether branch protection is enabled
    pub protected: bool,
}

/// A repository contributor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contributor {
    /// GitHub login
    pub login: String,
    /// Avatar URL (may be empty)
    pub avatar_url: String,
    /// Number of contributions
    pub contributions: u64,
    /// Profile URL (may be empty)
    pub html_url: String,
}

/// One week of the commit activity calendar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommitActivity {
    /// Week start as a unix timestamp (Sunday 00:00 UTC)
    pub week: i64,
    /// Commits in the week
    pub total: u64,
    /// Commits per day, Sunday first
    pub days: Vec<u64>,
}

/// A GitHub repository reference
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepoSpec {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// GitHub Enterprise host (None for github.com)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

impl fmt::Display for RepoSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Inferred lineage ("branch") of a commit
///
/// Ids are handed out in order of first use within one graph build, starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineageId(pub usize);

impl LineageId {
    /// Display label, e.g. `branch-2`
    pub fn label(self) -> String {
        format!("branch-{}", self.0)
    }
}

impl fmt::Display for LineageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Node kind in the commit graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Ordinary commit
    Commit,
    /// Commit with two or more parents
    Merge,
}

/// Grid position of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate (lane)
    pub x: u64,
    /// Vertical coordinate (row)
    pub y: u64,
}

/// A commit placed in the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Commit SHA
    pub id: String,
    /// Commit or merge
    pub kind: NodeKind,
    /// Grid position
    pub position: Position,
    /// The commit itself
    pub commit: Commit,
    /// Inferred lineage
    pub lineage: LineageId,
    /// Lineage label (`branch-N`)
    pub label: String,
    /// Lineage color (hex)
    pub color: String,
}

/// Edge kind in the commit graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Link to the first parent (mainline continuation)
    Default,
    /// Link to a merged-in parent
    Merge,
}

/// A child → parent link between two commits in the window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// `{child_sha}-{parent_sha}`
    pub id: String,
    /// Child SHA
    pub source: String,
    /// Parent SHA
    pub target: String,
    /// Mainline or merge
    pub kind: EdgeKind,
    /// Stroke color (hex)
    pub color: String,
    /// Highlighted by renderers (set on merge edges)
    pub emphasized: bool,
}

/// Renderable commit graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitGraph {
    /// One node per input commit, in input order
    pub nodes: Vec<GraphNode>,
    /// Edges in commit × parent scan order
    pub edges: Vec<GraphEdge>,
    /// Number of lineages minted during the build
    pub lineage_count: usize,
}

impl CommitGraph {
    /// Look up a node by SHA
    pub fn node(&self, sha: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == sha)
    }

    /// Check if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Everything fetched for one repository in a single batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSnapshot {
    /// Which repository this is
    pub spec: RepoSpec,
    /// Repository metadata
    pub repository: Repository,
    /// Commit window, newest first
    pub commits: Vec<Commit>,
    /// Branches
    pub branches: Vec<Branch>,
    /// Contributors
    pub contributors: Vec<Contributor>,
    /// Weekly commit activity (oldest week first)
    pub activity: Vec<CommitActivity>,
    /// When the batch completed
    pub fetched_at: DateTime<Utc>,
}
