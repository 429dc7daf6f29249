//! Reading the focused-targets file.
//!
//! When configured, a JSON file of "focused" target labels narrows
//! debug-symbol handling to the targets a developer is actively working on.
//! The reader is deliberately thin: it is only consulted when the setting is
//! present, and any problem with the file is a hard error rather than a
//! silent fallback to an empty set.

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::ConfigError;

/// Reads and parses a focused-targets JSON file.
///
/// The file must contain an object with a `targets` key holding a list of
/// target-label strings: `{"targets": ["cell//pkg:name", ...]}`.
pub fn read_focused_targets(path: &Path) -> Result<BTreeSet<String>, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_focused_targets(&content)
}

/// Parses focused targets from a JSON string.
pub fn parse_focused_targets(content: &str) -> Result<BTreeSet<String>, ConfigError> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    let targets = value
        .get("targets")
        .ok_or_else(|| ConfigError::MissingField("targets".to_string()))?;
    let list = targets.as_array().ok_or_else(|| {
        ConfigError::ValidationError("`targets` must be a list of target labels".to_string())
    })?;
    list.iter()
        .map(|item| {
            item.as_str().map(String::from).ok_or_else(|| {
                ConfigError::ValidationError(format!("`targets` entry {item} is not a string"))
            })
        })
        .collect()
}
