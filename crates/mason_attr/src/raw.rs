//! Untyped attribute values as handed over by build-file evaluation.

use std::collections::BTreeMap;
use std::fmt;

/// An untyped value parsed out of a build file.
///
/// This is the boundary representation between build-file evaluation and the
/// coercion framework: numbers, strings, lists, string-keyed dictionaries,
/// or nested combinations thereof. `Null` doubles as the absent value for
/// optional attributes. There is no float variant; build attributes do not
/// use them, and the JSON conversion stringifies non-integral numbers so a
/// coercer can reject them with the offending literal in the message.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum RawValue {
    /// The absent value.
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A string.
    String(String),
    /// An ordered list of values.
    List(Vec<RawValue>),
    /// A string-keyed dictionary.
    Dict(BTreeMap<String, RawValue>),
}

impl RawValue {
    /// Returns `true` for the absent value.
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }

    /// A short name for the value's shape, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Bool(_) => "a bool",
            RawValue::Int(_) => "an integer",
            RawValue::String(_) => "a string",
            RawValue::List(_) => "a list",
            RawValue::Dict(_) => "a dict",
        }
    }
}

impl fmt::Display for RawValue {
    /// Renders a compact literal for error messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Null => f.write_str("null"),
            RawValue::Bool(b) => write!(f, "{b}"),
            RawValue::Int(i) => write!(f, "{i}"),
            RawValue::String(s) => write!(f, "{s:?}"),
            RawValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            RawValue::Dict(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => RawValue::Null,
            serde_json::Value::Bool(b) => RawValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => RawValue::Int(i),
                // Non-integral or out-of-range numbers carry their literal
                // form so coercion errors can name them.
                None => RawValue::String(n.to_string()),
            },
            serde_json::Value::String(s) => RawValue::String(s),
            serde_json::Value::Array(items) => {
                RawValue::List(items.into_iter().map(RawValue::from).collect())
            }
            serde_json::Value::Object(entries) => RawValue::Dict(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, RawValue::from(v)))
                    .collect(),
            ),
        }
    }
}
