//! Coercion of untyped build-file values into typed rule attributes.
//!
//! Build-file evaluation hands this crate raw, untyped values ([`RawValue`]);
//! a schema of composable [`Coercer`]s turns them into strongly typed
//! attribute values, discovers the paths they reference (traversal), and
//! merges values assembled from multiple declaration fragments
//! (concatenation).
//!
//! Coercers nest to mirror the attribute's shape: an "optional list of
//! paths" attribute is an [`OptionalCoercer`] wrapping a [`ListCoercer`]
//! wrapping a [`PathCoercer`]. Each coercer is stateless and is built once
//! when the rule schema is defined, then reused across every build-file
//! parse.

#![warn(missing_docs)]

pub mod coercer;
pub mod error;
pub mod list;
pub mod optional;
pub mod path;
pub mod primitive;
pub mod raw;

pub use coercer::{Coercer, CoerceContext, Concat, PathCollector, Traversal};
pub use error::{CoerceError, InvalidCoercerComposition};
pub use list::ListCoercer;
pub use optional::OptionalCoercer;
pub use path::PathCoercer;
pub use primitive::{IntCoercer, StringCoercer};
pub use raw::RawValue;
