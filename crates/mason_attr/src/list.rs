//! Coercion of list attributes.

use crate::coercer::{CoerceContext, Coercer, Concat, Traversal};
use crate::error::CoerceError;
use crate::raw::RawValue;

/// Coerces a raw list into a `Vec` by coercing each element.
///
/// Element failures are wrapped with their index so the error names the
/// position inside the attribute. Concatenation flattens the input lists in
/// order, which is what multi-fragment list attributes expect.
#[derive(Clone, Copy, Debug)]
pub struct ListCoercer<C> {
    element: C,
}

impl<C> ListCoercer<C> {
    /// Creates a list coercer from the element coercer.
    pub fn new(element: C) -> Self {
        Self { element }
    }
}

impl<C: Coercer> Coercer for ListCoercer<C> {
    type Value = Vec<C::Value>;

    fn coerce(&self, ctx: &CoerceContext, raw: &RawValue) -> Result<Self::Value, CoerceError> {
        match raw {
            RawValue::List(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    self.element.coerce(ctx, item).map_err(|source| CoerceError::Element {
                        index,
                        source: Box::new(source),
                    })
                })
                .collect(),
            other => Err(CoerceError::mismatch("a list", other)),
        }
    }

    fn traverse(&self, value: &Self::Value, traversal: &mut dyn Traversal) {
        for element in value {
            self.element.traverse(element, traversal);
        }
    }

    fn concat(&self, values: Vec<Self::Value>) -> Concat<Self::Value> {
        if values.is_empty() {
            Concat::Empty
        } else {
            Concat::Merged(values.into_iter().flatten().collect())
        }
    }
}
