//! Repository summary figures

use crate::types::{CommitActivity, CommitGraph, EdgeKind, NodeKind, RepoSnapshot};
use serde::Serialize;

/// Busiest week of the activity calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BusiestWeek {
    /// Week start (unix seconds)
    pub week: i64,
    /// Commits in that week
    pub total: u64,
}

/// Counts derived from a snapshot and its commit graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoSummary {
    /// Commits in the graph window
    pub commits: usize,
    /// Merge commits in the window
    pub merge_commits: usize,
    /// Root commits in the window
    pub root_commits: usize,
    /// Lineages inferred for the window
    pub lineages: usize,
    /// Edges between commits in the window
    pub edges: usize,
    /// Edges to merged-in parents
    pub merge_edges: usize,
    /// Branches fetched
    pub branches: usize,
    /// Protected branches among them
    pub protected_branches: usize,
    /// Contributors fetched
    pub contributors: usize,
    /// Sum of their contributions
    pub contributions: u64,
    /// Commits in the activity calendar
    pub activity_total: u64,
    /// Days with at least one commit
    pub active_days: usize,
    /// Week with the most commits (earliest on ties)
    pub busiest_week: Option<BusiestWeek>,
}

impl RepoSummary {
    /// Summarize a snapshot, given the graph built from its commits
    pub fn new(snapshot: &RepoSnapshot, graph: &CommitGraph) -> Self {
        let merge_commits = graph
            .nodes
            .iter()
            .filter(|n| n.kind == NodeKind::Merge)
            .count();

        Self {
            commits: graph.nodes.len(),
            merge_commits,
            root_commits: graph.nodes.iter().filter(|n| n.commit.is_root()).count(),
            lineages: graph.lineage_count,
            edges: graph.edges.len(),
            merge_edges: graph
                .edges
                .iter()
                .filter(|e| e.kind == EdgeKind::Merge)
                .count(),
            branches: snapshot.branches.len(),
            protected_branches: snapshot.branches.iter().filter(|b| b.protected).count(),
            contributors: snapshot.contributors.len(),
            contributions: snapshot.contributors.iter().map(|c| c.contributions).sum(),
            activity_total: snapshot.activity.iter().map(|w| w.total).sum(),
            active_days: active_days(&snapshot.activity),
            busiest_week: busiest_week(&snapshot.activity),
        }
    }
}

fn active_days(activity: &[CommitActivity]) -> usize {
    activity
        .iter()
        .flat_map(|w| w.days.iter())
        .filter(|&&count| count > 0)
        .count()
}

fn busiest_week(activity: &[CommitActivity]) -> Option<BusiestWeek> {
    activity
        .iter()
        .filter(|w| w.total > 0)
        .fold(None, |best: Option<&CommitActivity>, w| match best {
            Some(b) if b.total >= w.total => Some(b),
            _ => Some(w),
        })
        .map(|w| BusiestWeek {
            week: w.week,
            total: w.total,
        })
}
