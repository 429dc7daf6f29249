//! Interned cell names for cheap cloning and O(1) equality comparison.

use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;

use lasso::ThreadedRodeo;
use serde::de::{Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// The name of a cell: one independently rooted source tree participating in
/// a build.
///
/// Cell names are interned strings represented as a `u32` index into a global
/// string interner. This provides O(1) equality comparison and O(1) cloning
/// for the identifier that keys every cross-cell path map. A name is only
/// meaningful within one process; serialization uses the string form so that
/// serialized paths stay stable across invocations.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CellName(u32);

// SAFETY: `CellName` wraps a `u32` which is always a valid `usize` on 32-bit
// and 64-bit platforms. `try_from_usize` rejects values that don't fit in `u32`.
unsafe impl lasso::Key for CellName {
    fn into_usize(self) -> usize {
        self.0 as usize
    }

    fn try_from_usize(int: usize) -> Option<Self> {
        u32::try_from(int).ok().map(CellName)
    }
}

/// The process-global cell-name interner.
///
/// All cell names in one build session share a single interner so that a
/// `CellName` obtained anywhere compares equal to the same name obtained
/// anywhere else.
fn interner() -> &'static ThreadedRodeo<CellName> {
    static INTERNER: OnceLock<ThreadedRodeo<CellName>> = OnceLock::new();
    INTERNER.get_or_init(ThreadedRodeo::new)
}

impl CellName {
    /// Interns `name`, returning its `CellName`. If the name was already
    /// interned, returns the existing identifier without allocating.
    pub fn new(name: &str) -> Self {
        interner().get_or_intern(name)
    }

    /// Resolves this cell name back to its string value.
    pub fn as_str(self) -> &'static str {
        interner().resolve(&self)
    }
}

impl fmt::Display for CellName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Ordering is by resolved string, not intern index, so that sorted path sets
// come out deterministic regardless of interning order.
impl Ord for CellName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for CellName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for CellName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CellName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CellNameVisitor;

        impl Visitor<'_> for CellNameVisitor {
            type Value = CellName;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a cell name string")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<CellName, E> {
                Ok(CellName::new(v))
            }
        }

        deserializer.deserialize_str(CellNameVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_same_cell() {
        let a = CellName::new("root");
        let b = CellName::new("root");
        assert_eq!(a, b);
    }

    #[test]
    fn different_names_different_cells() {
        let a = CellName::new("root");
        let b = CellName::new("third_party");
        assert_ne!(a, b);
    }

    #[test]
    fn resolve_roundtrip() {
        let cell = CellName::new("workspace");
        assert_eq!(cell.as_str(), "workspace");
        assert_eq!(cell.to_string(), "workspace");
    }

    #[test]
    fn ordering_is_by_string() {
        // Intern in reverse order to make sure ordering ignores intern indices.
        let z = CellName::new("zzz_cell");
        let a = CellName::new("aaa_cell");
        assert!(a < z);
    }

    #[test]
    fn serde_roundtrip_is_stringly() {
        let cell = CellName::new("prelude");
        let json = serde_json::to_string(&cell).unwrap();
        assert_eq!(json, "\"prelude\"");
        let back: CellName = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, back);
    }
}
