//! Shared foundational types used across the mason build tool.
//!
//! This crate provides the interned [`CellName`] identifier used to qualify
//! every path and target that crosses a cell boundary.

#![warn(missing_docs)]

pub mod cell;

pub use cell::CellName;
