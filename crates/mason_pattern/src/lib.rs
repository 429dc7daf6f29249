//! Directory indexing for recursive target-pattern resolution.
//!
//! This crate provides the [`DescendantIndex`], built once from the set of
//! known build-file locations and queried to resolve `cell//dir/...`-style
//! recursive patterns without re-walking the filesystem.

#![warn(missing_docs)]

pub mod descendants;

pub use descendants::DescendantIndex;
