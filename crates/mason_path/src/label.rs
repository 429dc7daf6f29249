//! Build-target labels used for error attribution.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cell_path::CellPath;

/// The identifier of one declared build rule: the package it lives in plus
/// its name within the package.
///
/// Displayed as `cell//package/path:name`. Every validation and coercion
/// failure is attributed to the label of the rule that declared the offending
/// value, so users can locate the faulty declaration.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct TargetLabel {
    /// The package (build-file directory) declaring the target.
    pub package: CellPath,
    /// The target's name within the package.
    pub name: String,
}

impl TargetLabel {
    /// Creates a label from a package path and a target name.
    pub fn new(package: CellPath, name: impl Into<String>) -> Self {
        Self {
            package,
            name: name.into(),
        }
    }
}

impl fmt::Display for TargetLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.package, self.name)
    }
}
