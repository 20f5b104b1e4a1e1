//! repograph - commit graphs for GitHub repositories
//!
//! Fetches a window of a repository's history and turns the flat,
//! newest-first commit list into a graph: every commit gets an inferred
//! lineage, a lane color and a grid position, and every parent link inside the
//! window becomes a mainline or merge edge.
//!
//! ```
//! use repograph::graph::build_commit_graph;
//! use repograph::types::{Commit, CommitAuthor};
//!
//! let author = CommitAuthor {
//!     name: "Ada".into(),
//!     email: "ada@example.com".into(),
//!     date: "2024-01-05T15:07:00Z".into(),
//!     avatar_url: None,
//! };
//! let commit = |sha: &str, parents: &[&str]| Commit {
//!     sha: sha.into(),
//!     parents: parents.iter().map(|p| p.to_string()).collect(),
//!     message: String::new(),
//!     author: author.clone(),
//!     url: String::new(),
//! };
//!
//! let graph = build_commit_graph(&[commit("b", &["a"]), commit("a", &[])]);
//! assert_eq!(graph.nodes.len(), 2);
//! assert_eq!(graph.edges[0].id, "b-a");
//! ```

pub mod auth;
pub mod error;
pub mod format;
pub mod graph;
pub mod platform;
pub mod snapshot;
pub mod stats;
pub mod types;
