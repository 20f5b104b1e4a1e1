//! Commit graph builder
//!
//! Builds a `CommitGraph` from a newest-first commit window in a single pass.

use crate::graph::layout::LayoutConfig;
use crate::graph::lineage::LineageAssigner;
use crate::graph::palette::lineage_color;
use crate::types::{Commit, CommitGraph, EdgeKind, GraphEdge, GraphNode, LineageId, NodeKind};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Build a commit graph on the default grid
///
/// `commits` must be ordered newest first, the way the commits endpoint returns
/// them. The order is the traversal order for lineage inference and the row
/// order of the layout; a shuffled slice yields a different (still valid) graph.
///
/// Parents missing from `commits` get no edge. Building the same slice twice
/// produces identical graphs.
pub fn build_commit_graph(commits: &[Commit]) -> CommitGraph {
    build_commit_graph_with(commits, &LayoutConfig::default())
}

/// Build a commit graph on a custom grid
///
/// Same contract as [`build_commit_graph`].
pub fn build_commit_graph_with(commits: &[Commit], layout: &LayoutConfig) -> CommitGraph {
    debug!("Building commit graph from {} commits", commits.len());

    let window: HashSet<&str> = commits.iter().map(|c| c.sha.as_str()).collect();
    let mut lineages = LineageAssigner::new();
    let mut nodes = Vec::with_capacity(commits.len());
    let mut edges = Vec::new();
    let mut dropped = 0usize;

    for (row, commit) in commits.iter().enumerate() {
        let lineage = lineages.assign(commit);
        let color = lineage_color(lineage);

        nodes.push(GraphNode {
            id: commit.sha.clone(),
            kind: if commit.is_merge() {
                NodeKind::Merge
            } else {
                NodeKind::Commit
            },
            position: layout.position(row, lineage),
            commit: commit.clone(),
            lineage,
            label: lineage.label(),
            color: color.to_string(),
        });

        for (index, parent) in commit.parents.iter().enumerate() {
            if !window.contains(parent.as_str()) {
                trace!("Dropping edge {} -> {} (outside window)", commit.sha, parent);
                dropped += 1;
                continue;
            }
            edges.push(parent_edge(commit, parent, index, lineage, &lineages));
        }
    }

    debug!(
        "Built {} nodes, {} edges, {} lineages ({} out-of-window parents)",
        nodes.len(),
        edges.len(),
        lineages.count(),
        dropped
    );

    CommitGraph {
        nodes,
        edges,
        lineage_count: lineages.count(),
    }
}

/// Edge from `commit` to its parent at `index`
///
/// The first parent continues the commit's own lineage. Later parents are
/// merged in and take their own lineage's color, falling back to the child's
/// when the parent was never tagged (octopus parents beyond the second).
fn parent_edge(
    commit: &Commit,
    parent: &str,
    index: usize,
    lineage: LineageId,
    lineages: &LineageAssigner,
) -> GraphEdge {
    let (kind, color) = if index == 0 {
        (EdgeKind::Default, lineage_color(lineage))
    } else {
        let parent_lineage = lineages.lineage_of(parent).unwrap_or(lineage);
        (EdgeKind::Merge, lineage_color(parent_lineage))
    };

    GraphEdge {
        id: format!("{}-{}", commit.sha, parent),
        source: commit.sha.clone(),
        target: parent.to_string(),
        kind,
        color: color.to_string(),
        emphasized: kind == EdgeKind::Merge,
    }
}
