//! Coercion of optional attribute values.

use crate::coercer::{CoerceContext, Coercer, Concat, Traversal};
use crate::error::{CoerceError, InvalidCoercerComposition};
use crate::raw::RawValue;

/// Wraps an inner coercer for `T`, producing `Option<T>`.
///
/// An absent raw value (`null`) coerces to `None`; anything else is
/// delegated to the inner coercer and wrapped in `Some`. Construction
/// rejects an inner coercer whose output is itself optional: a missing raw
/// value would be ambiguous between "absent" and "present but empty", so
/// nested optionality has no well-defined coercion semantics.
#[derive(Clone, Copy, Debug)]
pub struct OptionalCoercer<C> {
    inner: C,
}

impl<C: Coercer> OptionalCoercer<C> {
    /// Wraps `inner`, failing fast at schema-definition time when `inner`
    /// already produces an optional value.
    pub fn new(inner: C) -> Result<Self, InvalidCoercerComposition> {
        if inner.output_is_optional() {
            return Err(InvalidCoercerComposition::new(
                "nested optional attributes are ambiguous",
            ));
        }
        Ok(Self { inner })
    }
}

impl<C: Coercer> Coercer for OptionalCoercer<C> {
    type Value = Option<C::Value>;

    fn coerce(&self, ctx: &CoerceContext, raw: &RawValue) -> Result<Self::Value, CoerceError> {
        if raw.is_null() {
            return Ok(None);
        }
        Ok(Some(self.inner.coerce(ctx, raw)?))
    }

    fn traverse(&self, value: &Self::Value, traversal: &mut dyn Traversal) {
        if let Some(value) = value {
            self.inner.traverse(value, traversal);
        }
    }

    /// Concatenates by filtering to the present values.
    ///
    /// An input with no present values merges to absent. Otherwise the
    /// unwrapped values are delegated to the inner coercer; if it reports
    /// concatenation as not applicable, so does this coercer rather than
    /// fabricating a value.
    fn concat(&self, values: Vec<Self::Value>) -> Concat<Self::Value> {
        let present: Vec<C::Value> = values.into_iter().flatten().collect();
        if present.is_empty() {
            return Concat::Merged(None);
        }
        match self.inner.concat(present) {
            Concat::Merged(merged) => Concat::Merged(Some(merged)),
            Concat::NotApplicable => Concat::NotApplicable,
            // The delegated sequence was non-empty; an inner Empty can only
            // mean "nothing to merge", which for an optional is absence.
            Concat::Empty => Concat::Merged(None),
        }
    }

    fn output_is_optional(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coercer::PathCollector;
    use crate::list::ListCoercer;
    use crate::path::PathCoercer;
    use crate::primitive::StringCoercer;
    use mason_common::CellName;
    use mason_path::{CellPath, RelPath};

    fn ctx() -> CoerceContext {
        CoerceContext::new(CellPath::new(
            CellName::new("root"),
            RelPath::parse("pkg").unwrap(),
        ))
    }

    #[test]
    fn null_coerces_to_absent() {
        let coercer = OptionalCoercer::new(StringCoercer).unwrap();
        assert_eq!(coercer.coerce(&ctx(), &RawValue::Null).unwrap(), None);
    }

    #[test]
    fn present_value_wraps_inner_coercion() {
        let coercer = OptionalCoercer::new(StringCoercer).unwrap();
        let got = coercer
            .coerce(&ctx(), &RawValue::String("v".into()))
            .unwrap();
        assert_eq!(got, Some("v".to_string()));
    }

    #[test]
    fn inner_errors_propagate_unchanged() {
        let coercer = OptionalCoercer::new(StringCoercer).unwrap();
        let err = coercer.coerce(&ctx(), &RawValue::Int(1)).unwrap_err();
        assert_eq!(format!("{err}"), "expected a string, got 1");
    }

    #[test]
    fn traverse_absent_visits_nothing() {
        let coercer = OptionalCoercer::new(PathCoercer).unwrap();
        let mut collector = PathCollector::default();
        coercer.traverse(&None, &mut collector);
        assert!(collector.paths.is_empty());
    }

    #[test]
    fn traverse_present_delegates_to_inner() {
        let coercer = OptionalCoercer::new(PathCoercer).unwrap();
        let value = coercer
            .coerce(&ctx(), &RawValue::String("src/x.c".into()))
            .unwrap();
        let mut collector = PathCollector::default();
        coercer.traverse(&value, &mut collector);
        assert_eq!(
            collector.paths,
            vec![CellPath::new(
                CellName::new("root"),
                RelPath::parse("pkg/src/x.c").unwrap()
            )]
        );
    }

    #[test]
    fn concat_filters_to_present_values() {
        let coercer = OptionalCoercer::new(ListCoercer::new(StringCoercer)).unwrap();
        let got = coercer.concat(vec![
            None,
            Some(vec!["x".to_string()]),
            None,
            Some(vec!["y".to_string()]),
        ]);
        assert_eq!(
            got,
            Concat::Merged(Some(vec!["x".to_string(), "y".to_string()]))
        );
    }

    #[test]
    fn concat_all_absent_is_absent() {
        let coercer = OptionalCoercer::new(ListCoercer::new(StringCoercer)).unwrap();
        assert_eq!(coercer.concat(vec![None, None]), Concat::Merged(None));
        assert_eq!(coercer.concat(vec![]), Concat::Merged(None));
    }

    #[test]
    fn concat_propagates_not_applicable() {
        // Strings do not concatenate; the optional wrapper must not invent
        // a value.
        let coercer = OptionalCoercer::new(StringCoercer).unwrap();
        let got = coercer.concat(vec![Some("a".to_string()), Some("b".to_string())]);
        assert_eq!(got, Concat::NotApplicable);
    }

    #[test]
    fn nested_optional_is_rejected_at_construction() {
        let inner = OptionalCoercer::new(StringCoercer).unwrap();
        let err = OptionalCoercer::new(inner).unwrap_err();
        assert_eq!(
            format!("{err}"),
            "invalid coercer composition: nested optional attributes are ambiguous"
        );
    }

    #[test]
    fn optional_list_of_paths_end_to_end() {
        let coercer =
            OptionalCoercer::new(ListCoercer::new(PathCoercer)).unwrap();
        let raw = RawValue::from(serde_json::json!(["hdr/a.h", "hdr/b.h"]));
        let value = coercer.coerce(&ctx(), &raw).unwrap();

        let mut collector = PathCollector::default();
        coercer.traverse(&value, &mut collector);
        let cell = CellName::new("root");
        assert_eq!(
            collector.paths,
            vec![
                CellPath::new(cell, RelPath::parse("pkg/hdr/a.h").unwrap()),
                CellPath::new(cell, RelPath::parse("pkg/hdr/b.h").unwrap()),
            ]
        );
    }
}
