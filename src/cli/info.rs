//! Info command - repository card and summary figures

use crate::cli::style::{self, Stream, Stylize, hyperlink};
use crate::cli::{SnapshotInput, load_snapshot};
use anstream::println;
use chrono::{DateTime, Local};
use repograph::error::Result;
use repograph::format::format_commit_date_in;
use repograph::stats::RepoSummary;
use std::path::Path;

/// Contributors listed by the info command
const TOP_CONTRIBUTORS: usize = 5;

/// Branches listed by the info command
const LISTED_BRANCHES: usize = 10;

/// Run the info command
#[allow(clippy::too_many_lines)]
pub async fn run_info(repo: Option<&str>, from_file: Option<&Path>) -> Result<()> {
    let input = SnapshotInput::from_args(repo, from_file)?;
    let snapshot = load_snapshot(input, None).await?;
    let graph = snapshot.build_graph();
    let summary = RepoSummary::new(&snapshot, &graph);
    let repository = &snapshot.repository;

    // Repository card
    println!(
        "{}",
        hyperlink(Stream::Stdout, &repository.full_name, &repository.html_url).emphasis()
    );
    if let Some(description) = repository.description.as_deref().filter(|d| !d.is_empty()) {
        println!("{}", description.muted());
    }
    println!();
    println!(
        "  ★ {}  ⑂ {}  ◉ {}  {}",
        repository.stargazers_count.accent(),
        repository.forks_count.accent(),
        repository.watchers_count.accent(),
        repository.language.as_deref().unwrap_or("unknown language").muted()
    );
    println!(
        "  {} {}  {} {}",
        "created".muted(),
        format_commit_date_in(&repository.created_at, &Local),
        "last push".muted(),
        format_commit_date_in(&repository.pushed_at, &Local)
    );
    println!();

    // Commit window
    println!("{}", "Commit window".emphasis());
    println!(
        "  {} commits ({} merges, {} roots) across {} lineages",
        summary.commits.accent(),
        summary.merge_commits.accent(),
        summary.root_commits.accent(),
        summary.lineages.accent()
    );
    println!(
        "  {} edges, {} of them merge edges",
        summary.edges.accent(),
        summary.merge_edges.accent()
    );
    println!();

    // Branches
    println!(
        "{} {}",
        "Branches".emphasis(),
        format!("({} fetched, {} protected)", summary.branches, summary.protected_branches).muted()
    );
    for branch in snapshot.branches.iter().take(LISTED_BRANCHES) {
        let marker = if branch.protected { style::LOCK } else { " " };
        let default = if branch.name == repository.default_branch {
            " (default)"
        } else {
            ""
        };
        println!(
            "  {} {}{}",
            marker,
            branch.name.accent(),
            default.muted()
        );
    }
    if snapshot.branches.len() > LISTED_BRANCHES {
        println!(
            "  {}",
            format!("... and {} more", snapshot.branches.len() - LISTED_BRANCHES).muted()
        );
    }
    println!();

    // Contributors
    println!(
        "{} {}",
        "Contributors".emphasis(),
        format!("({} contributions)", summary.contributions).muted()
    );
    for contributor in snapshot.contributors.iter().take(TOP_CONTRIBUTORS) {
        println!(
            "  {} {}",
            hyperlink(Stream::Stdout, &contributor.login, &contributor.html_url).accent(),
            contributor.contributions.muted()
        );
    }
    println!();

    // Activity
    println!("{}", "Activity (last year)".emphasis());
    if snapshot.activity.is_empty() {
        println!(
            "  {}",
            "GitHub is still computing commit statistics; try again shortly".muted()
        );
    } else {
        println!(
            "  {} commits on {} active days",
            summary.activity_total.accent(),
            summary.active_days.accent()
        );
        if let Some(busiest) = summary.busiest_week {
            let week = DateTime::from_timestamp(busiest.week, 0)
                .map(|d| d.with_timezone(&Local).format("%b %-d, %Y").to_string())
                .unwrap_or_default();
            println!(
                "  busiest week of {} with {} commits",
                week,
                busiest.total.accent()
            );
        }
    }

    Ok(())
}
