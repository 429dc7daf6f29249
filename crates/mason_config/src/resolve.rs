//! Resolution of configured cells to filesystem roots.

use std::collections::BTreeMap;
use std::path::Path;

use mason_common::CellName;
use mason_path::ProjectRoot;

use crate::types::WorkspaceConfig;

/// Resolves every configured cell to its filesystem root.
///
/// Relative cell roots are resolved against `workspace_dir`; absolute roots
/// are taken as-is. The result maps interned cell names to the
/// [`ProjectRoot`]s the path validator keys its caches by.
pub fn resolve_cells(
    config: &WorkspaceConfig,
    workspace_dir: &Path,
) -> BTreeMap<CellName, ProjectRoot> {
    config
        .cells
        .iter()
        .map(|(name, cell)| {
            let root = Path::new(&cell.root);
            let resolved = if root.is_absolute() {
                root.to_path_buf()
            } else {
                workspace_dir.join(root)
            };
            (CellName::new(name), ProjectRoot::new(resolved))
        })
        .collect()
}
