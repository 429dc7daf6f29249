//! Cached filesystem validation of declared build-rule paths.
//!
//! This crate provides the [`PathChecker`], which verifies that paths
//! declared by build rules exist (and optionally are regular files or
//! directories), memoizing successful checks per filesystem root so that
//! repeated declarations across many rules hit the filesystem only once.

#![warn(missing_docs)]

pub mod checker;
pub mod error;

pub use checker::{PathChecker, PathKind};
pub use error::CheckError;
