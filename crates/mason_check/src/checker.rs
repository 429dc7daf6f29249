//! The cached validator for declared build-rule paths.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use mason_path::{ProjectRoot, RelPath, TargetLabel};

use crate::error::CheckError;

/// Maximum number of per-root caches retained per check kind.
///
/// Reclamation is whole-root only: when a new root would exceed the bound,
/// one existing root's entire cache is dropped. Individual path entries are
/// never removed for the lifetime of a root's cache.
const MAX_ROOTS: usize = 64;

/// The filesystem kind a declaration requires a path to have.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PathKind {
    /// The path must be a regular file.
    File,
    /// The path must be a directory.
    Directory,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKind::File => f.write_str("regular file"),
            PathKind::Directory => f.write_str("directory"),
        }
    }
}

/// The set of paths already validated successfully for one root and one
/// check kind.
///
/// Membership is tested and recorded under a short-lived lock that is never
/// held across filesystem I/O, so concurrent callers checking a new path may
/// each perform the read (best-effort dedup) but are never blocked waiting on
/// another caller's in-flight check.
#[derive(Default)]
struct CheckedSet {
    paths: Mutex<HashSet<RelPath>>,
}

impl CheckedSet {
    fn contains(&self, path: &RelPath) -> bool {
        self.paths.lock().unwrap().contains(path)
    }

    fn insert(&self, path: RelPath) {
        self.paths.lock().unwrap().insert(path);
    }
}

/// One check kind's caches, keyed by project root.
struct RootCaches {
    roots: Mutex<HashMap<PathBuf, Arc<CheckedSet>>>,
}

impl RootCaches {
    fn new() -> Self {
        Self {
            roots: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the checked set for `root`, creating it on first use.
    ///
    /// Enforces the [`MAX_ROOTS`] bound by evicting a whole root's cache
    /// before inserting a new one.
    fn for_root(&self, root: &ProjectRoot) -> Arc<CheckedSet> {
        let mut roots = self.roots.lock().unwrap();
        if let Some(set) = roots.get(root.as_path()) {
            return Arc::clone(set);
        }
        if roots.len() >= MAX_ROOTS {
            if let Some(victim) = roots.keys().next().cloned() {
                roots.remove(&victim);
            }
        }
        let set = Arc::new(CheckedSet::default());
        roots.insert(root.as_path().to_path_buf(), Arc::clone(&set));
        set
    }
}

/// Validates that declared paths exist and have the declared kind, memoizing
/// successful checks.
///
/// One `PathChecker` is shared by all build-file-parsing threads of a
/// session. It keeps three independent caches (plain existence, must-be-file,
/// must-be-directory) per project root; a path validated for one kind is not
/// thereby validated for any other. Only successful checks are recorded, so a
/// transient I/O failure is retried the next time the same path is declared.
pub struct PathChecker {
    exists: RootCaches,
    files: RootCaches,
    dirs: RootCaches,
}

impl PathChecker {
    /// Creates a checker with empty caches.
    pub fn new() -> Self {
        Self {
            exists: RootCaches::new(),
            files: RootCaches::new(),
            dirs: RootCaches::new(),
        }
    }

    /// Checks three independent sets of paths declared by `target` against
    /// the filesystem under `root`.
    ///
    /// `paths` must exist; `file_paths` must exist and be regular files;
    /// `dir_paths` must exist and be directories. The first failure aborts
    /// the check and is returned; an error is binding for the enclosing
    /// build-file parse.
    pub fn check_paths(
        &self,
        root: &ProjectRoot,
        target: &TargetLabel,
        paths: &BTreeSet<RelPath>,
        file_paths: &BTreeSet<RelPath>,
        dir_paths: &BTreeSet<RelPath>,
    ) -> Result<(), CheckError> {
        Self::check_set(&self.exists, root, target, paths, None)?;
        Self::check_set(&self.files, root, target, file_paths, Some(PathKind::File))?;
        Self::check_set(&self.dirs, root, target, dir_paths, Some(PathKind::Directory))?;
        Ok(())
    }

    fn check_set(
        caches: &RootCaches,
        root: &ProjectRoot,
        target: &TargetLabel,
        paths: &BTreeSet<RelPath>,
        expected: Option<PathKind>,
    ) -> Result<(), CheckError> {
        if paths.is_empty() {
            return Ok(());
        }
        let checked = caches.for_root(root);
        for path in paths {
            if checked.contains(path) {
                continue;
            }
            let metadata = fs::metadata(root.resolve(path)).map_err(|source| {
                if source.kind() == io::ErrorKind::NotFound {
                    CheckError::PathNotFound {
                        target: target.clone(),
                        path: path.clone(),
                    }
                } else {
                    CheckError::PathInaccessible {
                        target: target.clone(),
                        path: path.clone(),
                        source,
                    }
                }
            })?;
            if let Some(expected) = expected {
                let kind_ok = match expected {
                    PathKind::File => metadata.is_file(),
                    PathKind::Directory => metadata.is_dir(),
                };
                if !kind_ok {
                    return Err(CheckError::PathKindMismatch {
                        target: target.clone(),
                        path: path.clone(),
                        expected,
                    });
                }
            }
            checked.insert(path.clone());
        }
        Ok(())
    }
}

impl Default for PathChecker {
    fn default() -> Self {
        Self::new()
    }
}
