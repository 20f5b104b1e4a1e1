//! Graph command - print the commit graph as lanes or JSON

use crate::cli::style::{self, Stream, Stylize, hyperlink, lineage};
use crate::cli::{SnapshotInput, load_snapshot};
use anstream::println;
use chrono::Local;
use repograph::error::Result;
use repograph::format::{DEFAULT_MESSAGE_LIMIT, format_commit_date_in, shorten_sha, truncate_message};
use repograph::types::{CommitGraph, EdgeKind, NodeKind};
use std::collections::HashMap;
use std::path::Path;

/// What occupies one lane in one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LaneCell<'a> {
    Empty,
    /// A line passing through, in the given color
    Pass(&'a str),
    /// The row's own commit
    Node(NodeKind, &'a str),
}

/// Lay out lane cells for every row of the graph
///
/// Mainline edges are drawn in the child's lane, merge edges in the merged
/// parent's lane, for every row strictly between the two commits.
fn lane_rows(graph: &CommitGraph) -> Vec<Vec<LaneCell<'_>>> {
    let width = graph
        .nodes
        .iter()
        .map(|n| n.lineage.0 + 1)
        .max()
        .unwrap_or(0);
    let mut rows = vec![vec![LaneCell::Empty; width]; graph.nodes.len()];

    let row_of: HashMap<&str, usize> = graph
        .nodes
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id.as_str(), i))
        .collect();

    for edge in &graph.edges {
        let (Some(&from), Some(&to)) = (row_of.get(edge.source.as_str()), row_of.get(edge.target.as_str())) else {
            continue;
        };
        let lane_node = match edge.kind {
            EdgeKind::Default => &graph.nodes[from],
            EdgeKind::Merge => &graph.nodes[to],
        };
        let lane = lane_node.lineage.0;
        for row in rows.iter_mut().take(to).skip(from + 1) {
            if row[lane] == LaneCell::Empty {
                row[lane] = LaneCell::Pass(lane_node.color.as_str());
            }
        }
    }

    for (row, node) in rows.iter_mut().zip(&graph.nodes) {
        row[node.lineage.0] = LaneCell::Node(node.kind, node.color.as_str());
    }

    rows
}

fn render_lanes(cells: &[LaneCell<'_>]) -> String {
    cells
        .iter()
        .map(|cell| match cell {
            LaneCell::Empty => "  ".to_string(),
            LaneCell::Pass(color) => format!("{} ", lineage(style::PIPE, color)),
            LaneCell::Node(NodeKind::Commit, color) => format!("{} ", lineage(style::COMMIT, color)),
            LaneCell::Node(NodeKind::Merge, color) => format!("{} ", lineage(style::MERGE, color)),
        })
        .collect()
}

/// Run the graph command
pub async fn run_graph(
    repo: Option<&str>,
    from_file: Option<&Path>,
    limit: Option<u8>,
    json: bool,
) -> Result<()> {
    let input = SnapshotInput::from_args(repo, from_file)?;
    let snapshot = load_snapshot(input, limit).await?;
    let graph = snapshot.build_graph();

    if json {
        println!("{}", serde_json::to_string_pretty(&graph)?);
        return Ok(());
    }

    if graph.is_empty() {
        println!("{}", format!("No commits found in {}", snapshot.spec).muted());
        return Ok(());
    }

    println!(
        "{} {}",
        snapshot.spec.to_string().emphasis(),
        format!(
            "· {} commits · {} lineages · default branch {}",
            graph.nodes.len(),
            graph.lineage_count,
            snapshot.repository.default_branch
        )
        .muted()
    );
    println!();

    for (cells, node) in lane_rows(&graph).iter().zip(&graph.nodes) {
        let commit = &node.commit;
        println!(
            "{} {} {}  {}",
            render_lanes(cells),
            hyperlink(Stream::Stdout, shorten_sha(&commit.sha), &commit.url).accent(),
            truncate_message(&commit.message, DEFAULT_MESSAGE_LIMIT),
            format!(
                "{} · {}",
                commit.author.name,
                format_commit_date_in(&commit.author.date, &Local)
            )
            .muted()
        );
    }

    let dropped = graph
        .nodes
        .iter()
        .map(|n| n.commit.parents.len())
        .sum::<usize>()
        - graph.edges.len();
    if dropped > 0 {
        println!();
        println!(
            "{}",
            format!("{dropped} parent link(s) lead outside the {}-commit window", graph.nodes.len())
                .muted()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use repograph::graph::build_commit_graph;
    use repograph::types::{Commit, CommitAuthor};

    fn commit(sha: &str, parents: &[&str]) -> Commit {
        Commit {
            sha: sha.to_string(),
            parents: parents.iter().map(ToString::to_string).collect(),
            message: String::new(),
            author: CommitAuthor {
                name: "Test Author".to_string(),
                email: "test@example.com".to_string(),
                date: String::new(),
                avatar_url: None,
            },
            url: String::new(),
        }
    }

    fn glyphs(rows: &[Vec<LaneCell<'_>>]) -> Vec<String> {
        rows.iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        LaneCell::Empty => ' ',
                        LaneCell::Pass(_) => '|',
                        LaneCell::Node(NodeKind::Commit, _) => '*',
                        LaneCell::Node(NodeKind::Merge, _) => 'M',
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_merge_lanes() {
        let graph = build_commit_graph(&[
            commit("m", &["a", "b"]),
            commit("a", &["root"]),
            commit("b", &["root"]),
            commit("root", &[]),
        ]);
        assert_eq!(
            glyphs(&lane_rows(&graph)),
            vec!["M ", "*|", "|*", "* "]
        );
    }

    #[test]
    fn test_linear_single_lane() {
        let graph = build_commit_graph(&[commit("c", &["b"]), commit("b", &["a"]), commit("a", &[])]);
        assert_eq!(glyphs(&lane_rows(&graph)), vec!["*", "*", "*"]);
    }

    #[test]
    fn test_empty_graph_has_no_rows() {
        let graph = build_commit_graph(&[]);
        assert!(lane_rows(&graph).is_empty());
    }
}
