//! Normalized forward-slash relative paths.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors produced when parsing a string into a [`RelPath`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathParseError {
    /// The path starts with `/`; only relative paths are representable.
    #[error("path `{0}` is absolute; expected a relative path")]
    Absolute(String),

    /// The path contains a backslash; the forward-slash convention is
    /// mandatory on every platform.
    #[error("path `{0}` contains `\\`; use `/` as the separator")]
    Backslash(String),

    /// The path contains an empty segment (doubled or trailing slash).
    #[error("path `{0}` contains an empty segment")]
    EmptySegment(String),

    /// The path contains a `.` or `..` segment.
    #[error("path `{0}` contains a `.` or `..` segment; paths must be normalized")]
    DotSegment(String),
}

/// A normalized relative path: an ordered sequence of non-empty segments
/// joined by `/`, with no `.` or `..` segments.
///
/// The empty path (zero segments) denotes the root of the tree the path is
/// relative to. `RelPath` is a value type: equality, hashing, and ordering
/// are structural. Serialization uses the plain string form.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct RelPath(String);

impl RelPath {
    /// Returns the empty path denoting the root.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Parses a string into a `RelPath`, validating the normalization
    /// invariants. The empty string parses to the root path.
    pub fn parse(s: &str) -> Result<Self, PathParseError> {
        if s.is_empty() {
            return Ok(Self::root());
        }
        if s.starts_with('/') {
            return Err(PathParseError::Absolute(s.to_string()));
        }
        if s.contains('\\') {
            return Err(PathParseError::Backslash(s.to_string()));
        }
        for segment in s.split('/') {
            if segment.is_empty() {
                return Err(PathParseError::EmptySegment(s.to_string()));
            }
            if segment == "." || segment == ".." {
                return Err(PathParseError::DotSegment(s.to_string()));
            }
        }
        Ok(Self(s.to_string()))
    }

    /// Returns `true` for the empty root path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the path as its `/`-joined string form. The root path is the
    /// empty string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the path's segments in order. The root path has no segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Derives the parent path, or `None` for the root path.
    ///
    /// The parent of a single-segment path is the root.
    pub fn parent(&self) -> Option<RelPath> {
        if self.is_root() {
            return None;
        }
        match self.0.rfind('/') {
            Some(idx) => Some(Self(self.0[..idx].to_string())),
            None => Some(Self::root()),
        }
    }

    /// Returns the final segment, or `None` for the root path.
    pub fn file_name(&self) -> Option<&str> {
        if self.is_root() {
            return None;
        }
        Some(match self.0.rfind('/') {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        })
    }

    /// Joins another relative path onto this one.
    pub fn join(&self, other: &RelPath) -> RelPath {
        if self.is_root() {
            other.clone()
        } else if other.is_root() {
            self.clone()
        } else {
            Self(format!("{}/{}", self.0, other.0))
        }
    }

    /// Views the path as a borrowed [`std::path::Path`] for filesystem
    /// resolution. The `/` separator is understood on all supported
    /// platforms.
    pub fn as_std_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl TryFrom<String> for RelPath {
    type Error = PathParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        RelPath::parse(&s)
    }
}

impl fmt::Display for RelPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
