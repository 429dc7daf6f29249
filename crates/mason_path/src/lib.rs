//! The mason path model: normalized relative paths, cell-qualified paths,
//! target labels, and filesystem roots.
//!
//! This crate provides [`RelPath`] for normalized forward-slash relative
//! paths, [`CellPath`] for paths qualified by their owning cell,
//! [`TargetLabel`] for identifying declared build rules in error messages,
//! and [`ProjectRoot`] for resolving relative paths against a cell's
//! filesystem root.

#![warn(missing_docs)]

pub mod cell_path;
pub mod label;
pub mod project_root;
pub mod rel_path;

pub use cell_path::CellPath;
pub use label::TargetLabel;
pub use project_root::ProjectRoot;
pub use rel_path::{PathParseError, RelPath};
