//! Lineage inference from parent pointers

use crate::types::{Commit, LineageId};
use std::collections::HashMap;
use tracing::trace;

/// Assigns lineages to commits visited in a fixed order
///
/// A commit takes the lineage its earliest-visited child tagged it with, or a
/// fresh one if no child referenced it. Tags are never overwritten: the first
/// child to reference a parent decides that parent's lineage. Only the second
/// parent of a merge mints a new lineage; octopus parents beyond it never do.
///
/// One assigner belongs to one graph build and is dropped with it.
#[derive(Debug, Default)]
pub struct LineageAssigner {
    tags: HashMap<String, LineageId>,
    next: usize,
}

impl LineageAssigner {
    /// Create an empty assigner
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `commit` its lineage and tag its first two parents
    ///
    /// Must be called once per commit, in input order.
    pub fn assign(&mut self, commit: &Commit) -> LineageId {
        let lineage = match self.tags.get(&commit.sha) {
            Some(&tagged) => tagged,
            None => {
                let fresh = self.mint();
                self.tags.insert(commit.sha.clone(), fresh);
                fresh
            }
        };

        if let Some(first) = commit.parents.first() {
            self.tags.entry(first.clone()).or_insert(lineage);
        }

        if let Some(second) = commit.parents.get(1) {
            if !self.tags.contains_key(second) {
                let merged = self.mint();
                trace!("{} merges in new lineage {}", commit.sha, merged);
                self.tags.insert(second.clone(), merged);
            }
        }

        lineage
    }

    /// Lineage tagged on a SHA so far, if any
    pub fn lineage_of(&self, sha: &str) -> Option<LineageId> {
        self.tags.get(sha).copied()
    }

    /// Number of lineages minted so far
    pub const fn count(&self) -> usize {
        self.next
    }

    fn mint(&mut self) -> LineageId {
        let id = LineageId(self.next);
        self.next += 1;
        id
    }
}
