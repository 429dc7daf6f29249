//! Cell-qualified relative paths.

use std::fmt;

use mason_common::CellName;
use serde::{Deserialize, Serialize};

use crate::rel_path::RelPath;

/// A path qualified by the cell it belongs to.
///
/// Paths are only unambiguous across multiple source roots when paired with
/// their cell, so `CellPath` is the key used everywhere paths cross cell
/// boundaries. Equality, hashing, and ordering cover both components.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct CellPath {
    /// The cell this path is relative to.
    pub cell: CellName,
    /// The path within the cell; the empty path is the cell root.
    pub path: RelPath,
}

impl CellPath {
    /// Creates a `CellPath` from a cell and a path within it.
    pub fn new(cell: CellName, path: RelPath) -> Self {
        Self { cell, path }
    }

    /// Returns the root path of the given cell.
    pub fn cell_root(cell: CellName) -> Self {
        Self {
            cell,
            path: RelPath::root(),
        }
    }

    /// Derives the parent path within the same cell, or `None` when this is
    /// already the cell root.
    pub fn parent(&self) -> Option<CellPath> {
        self.path.parent().map(|parent| Self {
            cell: self.cell,
            path: parent,
        })
    }

    /// Joins a relative path onto this one, staying in the same cell.
    pub fn join(&self, path: &RelPath) -> CellPath {
        Self {
            cell: self.cell,
            path: self.path.join(path),
        }
    }
}

impl fmt::Display for CellPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}//{}", self.cell, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(cell: &str, p: &str) -> CellPath {
        CellPath::new(CellName::new(cell), RelPath::parse(p).unwrap())
    }

    #[test]
    fn display_form() {
        assert_eq!(path("root", "foo/bar").to_string(), "root//foo/bar");
        assert_eq!(
            CellPath::cell_root(CellName::new("root")).to_string(),
            "root//"
        );
    }

    #[test]
    fn equality_covers_cell_and_path() {
        assert_eq!(path("root", "a/b"), path("root", "a/b"));
        assert_ne!(path("root", "a/b"), path("other", "a/b"));
        assert_ne!(path("root", "a/b"), path("root", "a/c"));
    }

    #[test]
    fn parent_stays_in_cell() {
        let p = path("root", "a/b");
        let parent = p.parent().unwrap();
        assert_eq!(parent, path("root", "a"));
        let root = parent.parent().unwrap();
        assert_eq!(root, CellPath::cell_root(CellName::new("root")));
        assert_eq!(root.parent(), None);
    }

    #[test]
    fn join() {
        let base = path("root", "pkg");
        let joined = base.join(&RelPath::parse("src/main.c").unwrap());
        assert_eq!(joined, path("root", "pkg/src/main.c"));
    }

    #[test]
    fn serde_roundtrip() {
        let p = path("root", "a/b");
        let json = serde_json::to_string(&p).unwrap();
        let back: CellPath = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
