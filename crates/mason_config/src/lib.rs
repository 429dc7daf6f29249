//! Parsing and validation of mason workspace configuration.
//!
//! This crate reads the `mason.toml` workspace file into a strongly-typed
//! [`WorkspaceConfig`] describing the cell layout, resolves cell roots to
//! filesystem locations, and reads the optional focused-targets JSON file
//! used to narrow debug-symbol handling.

#![warn(missing_docs)]

pub mod error;
pub mod focused;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use focused::{parse_focused_targets, read_focused_targets};
pub use loader::{load_workspace_config, load_workspace_config_from_str};
pub use resolve::resolve_cells;
pub use types::{CellConfig, WorkspaceConfig, WorkspaceMeta};
