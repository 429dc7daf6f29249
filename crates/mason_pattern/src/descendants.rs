//! An index from directories to their known descendants.

use std::collections::{BTreeSet, HashMap, HashSet};

use mason_common::CellName;
use mason_path::{CellPath, RelPath};

/// An immutable index answering "all known paths at or below X" queries.
///
/// Built once from a set of leaf paths (typically the known build-file
/// directories of a session), then shared read-only across arbitrarily many
/// query threads. There is no update API; adding paths means rebuilding.
///
/// Every prefix of every leaf, down to the leaf's cell root, is a key in the
/// index, so querying any ancestor of a leaf returns that leaf plus all
/// intermediate directories.
#[derive(Debug)]
pub struct DescendantIndex {
    /// Links each path to its direct children as observed from the leaves.
    children: HashMap<CellPath, BTreeSet<CellPath>>,
}

impl DescendantIndex {
    /// Builds the index from the given leaf paths.
    ///
    /// Each leaf is walked upward to its cell root, recording a parent→child
    /// edge at every step. The walk stops early once it reaches a prefix
    /// already visited for that cell: the remaining chain up to the root was
    /// completed by an earlier leaf, which bounds total work by the number of
    /// distinct prefixes rather than leaves × depth.
    pub fn from_leaf_paths(leaves: impl IntoIterator<Item = CellPath>) -> Self {
        let mut children: HashMap<CellPath, BTreeSet<CellPath>> = HashMap::new();
        let mut seen: HashMap<CellName, HashSet<RelPath>> = HashMap::new();

        for leaf in leaves {
            let seen_for_cell = seen.entry(leaf.cell).or_default();
            let mut current = leaf;
            loop {
                if !seen_for_cell.insert(current.path.clone()) {
                    break;
                }
                match current.parent() {
                    Some(parent) => {
                        children.entry(parent.clone()).or_default().insert(current);
                        current = parent;
                    }
                    // `current` is the cell root; the chain is complete.
                    None => break,
                }
            }
        }

        Self { children }
    }

    /// Returns `root` plus every indexed path transitively below it.
    ///
    /// Uses an explicit work stack with a visited set, so the traversal stays
    /// correct (and bounded) even if the child graph contains shapes where a
    /// path is reachable more than once. A root the index has never seen has
    /// no known descendants and yields just `{root}`.
    pub fn descendants(&self, root: &CellPath) -> BTreeSet<CellPath> {
        let mut result = BTreeSet::new();
        let mut stack = vec![root.clone()];

        while let Some(path) = stack.pop() {
            if !result.insert(path.clone()) {
                continue;
            }
            if let Some(direct) = self.children.get(&path) {
                stack.extend(direct.iter().cloned());
            }
        }

        result
    }
}
