//! The composable coercer abstraction: coerce, traverse, concat.

use mason_path::CellPath;

use crate::error::CoerceError;
use crate::raw::RawValue;

/// The context a coercion runs in.
///
/// Carries the package whose build file declared the raw value; relative
/// path literals are anchored at this package.
#[derive(Clone, Debug)]
pub struct CoerceContext {
    /// The declaring package.
    pub package: CellPath,
}

impl CoerceContext {
    /// Creates a context for values declared in `package`.
    pub fn new(package: CellPath) -> Self {
        Self { package }
    }
}

/// A visitor over the references reachable from a coerced value.
///
/// Traversal is how the framework discovers declared paths nested anywhere
/// inside a composite attribute without the caller knowing the attribute's
/// shape.
pub trait Traversal {
    /// Called once for every declared path reachable from the value.
    fn path(&mut self, path: &CellPath);
}

/// A [`Traversal`] that collects every visited path.
#[derive(Default, Debug)]
pub struct PathCollector {
    /// The paths visited so far, in visit order.
    pub paths: Vec<CellPath>,
}

impl Traversal for PathCollector {
    fn path(&mut self, path: &CellPath) {
        self.paths.push(path.clone());
    }
}

/// The result of concatenating several values of one attribute.
///
/// An explicit tri-state: "no input values", "merge is undefined for this
/// attribute", and "merged value" are distinct outcomes, never folded into
/// one sentinel that could be confused with a legitimately absent value.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Concat<T> {
    /// The merged value.
    Merged(T),
    /// There were no input values to merge.
    Empty,
    /// The attribute does not support concatenation; the caller must apply
    /// a different merge policy (such as last-value-wins).
    NotApplicable,
}

/// A stateless converter from raw build-file values to one typed attribute
/// value.
///
/// Coercers compose by holding typed references to inner coercers, mirroring
/// the attribute type's shape. They are constructed once at schema-definition
/// time, hold no per-invocation state, and are shared freely across parser
/// threads.
pub trait Coercer: Send + Sync {
    /// The typed attribute value this coercer produces.
    type Value;

    /// Converts a raw value into the typed attribute value.
    ///
    /// Errors name the offending raw value and, for nested coercers, where
    /// inside the attribute it sits.
    fn coerce(&self, ctx: &CoerceContext, raw: &RawValue) -> Result<Self::Value, CoerceError>;

    /// Visits every reference reachable from an already-coerced value.
    fn traverse(&self, value: &Self::Value, traversal: &mut dyn Traversal);

    /// Merges multiple coerced values of the same attribute into one, as
    /// when an attribute is assembled from several declaration fragments.
    fn concat(&self, values: Vec<Self::Value>) -> Concat<Self::Value>;

    /// `true` when [`Self::Value`] is itself optional.
    ///
    /// Used to reject nested optionality when coercers are composed.
    fn output_is_optional(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mason_common::CellName;
    use mason_path::RelPath;

    #[test]
    fn path_collector_collects_in_order() {
        let a = CellPath::new(CellName::new("root"), RelPath::parse("a").unwrap());
        let b = CellPath::new(CellName::new("root"), RelPath::parse("b").unwrap());
        let mut collector = PathCollector::default();
        collector.path(&a);
        collector.path(&b);
        assert_eq!(collector.paths, vec![a, b]);
    }

    #[test]
    fn concat_variants_are_distinct() {
        let merged: Concat<i64> = Concat::Merged(1);
        assert_ne!(merged, Concat::Empty);
        assert_ne!(merged, Concat::NotApplicable);
        assert_ne!(Concat::<i64>::Empty, Concat::NotApplicable);
    }
}
