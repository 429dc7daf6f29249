//! Error types for declared-path validation.

use std::io;

use mason_path::{RelPath, TargetLabel};

use crate::checker::PathKind;

/// Errors produced when a declared path fails validation.
///
/// Every variant is attributed to the target that declared the path. Missing
/// and wrongly-kinded paths are build-definition defects and are never
/// retried; I/O failures other than not-found carry their underlying cause
/// and are left to higher layers to retry if they choose.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The declared path does not exist under the project root.
    #[error("{target} references non-existing file or directory `{path}`")]
    PathNotFound {
        /// The target declaring the path.
        target: TargetLabel,
        /// The missing path, relative to the project root.
        path: RelPath,
    },

    /// The declared path exists but is not of the expected kind.
    #[error("in {target}, expected {expected}: `{path}`")]
    PathKindMismatch {
        /// The target declaring the path.
        target: TargetLabel,
        /// The offending path, relative to the project root.
        path: RelPath,
        /// The kind the declaration required.
        expected: PathKind,
    },

    /// The declared path could not be inspected for a reason other than
    /// not existing (permissions, transient filesystem errors).
    #[error("{target} references inaccessible file or directory `{path}`: {source}")]
    PathInaccessible {
        /// The target declaring the path.
        target: TargetLabel,
        /// The inaccessible path, relative to the project root.
        path: RelPath,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use mason_common::CellName;
    use mason_path::CellPath;

    fn target() -> TargetLabel {
        TargetLabel::new(
            CellPath::new(CellName::new("root"), RelPath::parse("lib").unwrap()),
            "core",
        )
    }

    #[test]
    fn display_not_found() {
        let err = CheckError::PathNotFound {
            target: target(),
            path: RelPath::parse("src/missing.c").unwrap(),
        };
        assert_eq!(
            format!("{err}"),
            "root//lib:core references non-existing file or directory `src/missing.c`"
        );
    }

    #[test]
    fn display_kind_mismatch() {
        let err = CheckError::PathKindMismatch {
            target: target(),
            path: RelPath::parse("srcdir").unwrap(),
            expected: PathKind::File,
        };
        assert_eq!(
            format!("{err}"),
            "in root//lib:core, expected regular file: `srcdir`"
        );
    }

    #[test]
    fn display_inaccessible_includes_cause() {
        let err = CheckError::PathInaccessible {
            target: target(),
            path: RelPath::parse("locked").unwrap(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        let msg = format!("{err}");
        assert!(msg.contains("inaccessible"));
        assert!(msg.contains("permission denied"));
    }
}
