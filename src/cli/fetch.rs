//! Fetch command - save a repository snapshot for offline use

use crate::cli::style::{Stylize, check};
use crate::cli::{SnapshotInput, load_snapshot};
use anstream::println;
use repograph::error::Result;
use std::path::Path;

/// Run the fetch command
pub async fn run_fetch(repo: &str, output: &Path, limit: Option<u8>) -> Result<()> {
    let snapshot = load_snapshot(SnapshotInput::Remote(repo), limit).await?;
    snapshot.save(output)?;

    println!(
        "{} Saved {} commits of {} to {}",
        check(),
        snapshot.commits.len().accent(),
        snapshot.spec.to_string().accent(),
        output.display()
    );
    println!(
        "{}",
        format!("View it with: repograph graph --from-file {}", output.display()).muted()
    );

    Ok(())
}
