//! Configuration types deserialized from `mason.toml`.

use std::collections::BTreeMap;

use serde::Deserialize;

/// The top-level workspace configuration parsed from `mason.toml`.
///
/// Describes the workspace and the cells participating in the build: each
/// cell is an independently rooted source tree, named so that paths and
/// targets can be qualified unambiguously.
#[derive(Debug, Deserialize)]
pub struct WorkspaceConfig {
    /// Workspace metadata.
    pub workspace: WorkspaceMeta,
    /// Cell definitions, keyed by cell name.
    #[serde(default)]
    pub cells: BTreeMap<String, CellConfig>,
}

/// Workspace metadata required in every `mason.toml`.
#[derive(Debug, Deserialize)]
pub struct WorkspaceMeta {
    /// The workspace name.
    pub name: String,
    /// A brief description of the workspace.
    #[serde(default)]
    pub description: String,
}

/// The definition of one cell.
#[derive(Debug, Clone, Deserialize)]
pub struct CellConfig {
    /// The cell's root directory, relative to the workspace directory (or
    /// absolute).
    pub root: String,
}
