//! Coercion of declared path attributes.

use mason_path::{CellPath, RelPath};

use crate::coercer::{CoerceContext, Coercer, Concat, Traversal};
use crate::error::CoerceError;
use crate::raw::RawValue;

/// Coerces a raw path literal into a [`CellPath`], anchored at the declaring
/// package.
///
/// The literal must be a normalized relative path; it is resolved within the
/// package's cell. Traversal reports the coerced path to the visitor, which
/// is how declared paths surface for filesystem validation.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathCoercer;

impl Coercer for PathCoercer {
    type Value = CellPath;

    fn coerce(&self, ctx: &CoerceContext, raw: &RawValue) -> Result<CellPath, CoerceError> {
        let RawValue::String(literal) = raw else {
            return Err(CoerceError::mismatch("a path string", raw));
        };
        let rel = RelPath::parse(literal).map_err(|source| CoerceError::InvalidPath {
            value: literal.clone(),
            source,
        })?;
        Ok(ctx.package.join(&rel))
    }

    fn traverse(&self, value: &CellPath, traversal: &mut dyn Traversal) {
        traversal.path(value);
    }

    fn concat(&self, _values: Vec<CellPath>) -> Concat<CellPath> {
        Concat::NotApplicable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coercer::PathCollector;
    use mason_common::CellName;

    fn ctx() -> CoerceContext {
        CoerceContext::new(CellPath::new(
            CellName::new("root"),
            RelPath::parse("lib/json").unwrap(),
        ))
    }

    #[test]
    fn anchors_at_the_declaring_package() {
        let got = PathCoercer
            .coerce(&ctx(), &RawValue::String("src/parse.c".into()))
            .unwrap();
        assert_eq!(
            got,
            CellPath::new(
                CellName::new("root"),
                RelPath::parse("lib/json/src/parse.c").unwrap()
            )
        );
    }

    #[test]
    fn rejects_non_strings() {
        let err = PathCoercer.coerce(&ctx(), &RawValue::Bool(true)).unwrap_err();
        assert_eq!(format!("{err}"), "expected a path string, got true");
    }

    #[test]
    fn rejects_escaping_literals() {
        let err = PathCoercer
            .coerce(&ctx(), &RawValue::String("../secrets".into()))
            .unwrap_err();
        assert!(matches!(err, CoerceError::InvalidPath { .. }));
        let msg = format!("{err}");
        assert!(msg.contains("../secrets"));
    }

    #[test]
    fn traverse_reports_the_path() {
        let value = PathCoercer
            .coerce(&ctx(), &RawValue::String("data.bin".into()))
            .unwrap();
        let mut collector = PathCollector::default();
        PathCoercer.traverse(&value, &mut collector);
        assert_eq!(collector.paths, vec![value]);
    }

    #[test]
    fn paths_do_not_concat() {
        assert_eq!(PathCoercer.concat(vec![]), Concat::NotApplicable);
    }
}
