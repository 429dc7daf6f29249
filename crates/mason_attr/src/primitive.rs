//! Coercers for scalar attribute values.

use crate::coercer::{CoerceContext, Coercer, Concat, Traversal};
use crate::error::CoerceError;
use crate::raw::RawValue;

/// Coerces a raw string into a `String` attribute.
#[derive(Clone, Copy, Debug, Default)]
pub struct StringCoercer;

impl Coercer for StringCoercer {
    type Value = String;

    fn coerce(&self, _ctx: &CoerceContext, raw: &RawValue) -> Result<String, CoerceError> {
        match raw {
            RawValue::String(s) => Ok(s.clone()),
            other => Err(CoerceError::mismatch("a string", other)),
        }
    }

    fn traverse(&self, _value: &String, _traversal: &mut dyn Traversal) {}

    fn concat(&self, _values: Vec<String>) -> Concat<String> {
        Concat::NotApplicable
    }
}

/// Coerces a raw integer into an `i64` attribute.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntCoercer;

impl Coercer for IntCoercer {
    type Value = i64;

    fn coerce(&self, _ctx: &CoerceContext, raw: &RawValue) -> Result<i64, CoerceError> {
        match raw {
            RawValue::Int(i) => Ok(*i),
            other => Err(CoerceError::mismatch("an integer", other)),
        }
    }

    fn traverse(&self, _value: &i64, _traversal: &mut dyn Traversal) {}

    fn concat(&self, _values: Vec<i64>) -> Concat<i64> {
        Concat::NotApplicable
    }
}
