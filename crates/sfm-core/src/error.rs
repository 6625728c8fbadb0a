//! Error types for `sfm-core`.
//!
//! Collaborators (backend, lister, launcher, config loader) return
//! [`CoreResult<T>`], an alias for `Result<T, CoreError>`. The controller
//! never lets a `CoreError` escape: it is converted into an
//! [`crate::ActionOutcome`] at the action boundary.

use std::path::{Path, PathBuf};

/// Unified error type for all core operations.
///
/// Each variant captures just enough context for logging. User-facing
/// messages are generic and built by the controller instead.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// A directory was expected but the path points to something else.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The destination already exists and overwriting was not requested.
    #[error("already exists: {0}")]
    AlreadyExists(PathBuf),

    /// A file or directory name is invalid (empty, contains path separators, etc.).
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// A directory cannot be copied or moved into itself or a descendant.
    #[error("cannot copy or move into itself: {0}")]
    SelfReference(PathBuf),

    /// A recursive copy went deeper than the allowed limit (likely a loop).
    #[error("maximum recursion depth ({0}) exceeded")]
    RecursionLimit(usize),

    /// The platform default handler could not be launched.
    #[error("failed to launch {path}: {reason}")]
    Launch {
        /// The path that was being opened.
        path: PathBuf,
        /// The underlying launcher error.
        reason: String,
    },

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Maps an I/O error on `path` to the most specific variant.
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            std::io::ErrorKind::AlreadyExists => Self::AlreadyExists(path.to_path_buf()),
            _ => Self::Io(err),
        }
    }
}

/// Convenience alias used throughout `sfm-core`.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn not_found_displays_path() {
        let err = CoreError::NotFound(PathBuf::from("/missing/file"));
        assert_eq!(err.to_string(), "path not found: /missing/file");
    }

    #[test]
    fn already_exists_displays_path() {
        let err = CoreError::AlreadyExists(PathBuf::from("/home/u/notes"));
        assert_eq!(err.to_string(), "already exists: /home/u/notes");
    }

    #[test]
    fn invalid_name_displays_message() {
        let err = CoreError::InvalidName("bad/name".to_string());
        assert_eq!(err.to_string(), "invalid name: bad/name");
    }

    #[test]
    fn self_reference_displays_path() {
        let err = CoreError::SelfReference(PathBuf::from("/a/b"));
        assert_eq!(err.to_string(), "cannot copy or move into itself: /a/b");
    }

    #[test]
    fn recursion_limit_displays_depth() {
        let err = CoreError::RecursionLimit(64);
        assert_eq!(err.to_string(), "maximum recursion depth (64) exceeded");
    }

    #[test]
    fn launch_displays_path_and_reason() {
        let err = CoreError::Launch {
            path: PathBuf::from("/tmp/a.pdf"),
            reason: "no handler".to_string(),
        };
        assert_eq!(err.to_string(), "failed to launch /tmp/a.pdf: no handler");
    }

    #[test]
    fn from_io_maps_known_kinds() {
        let path = Path::new("/x");
        let nf = CoreError::from_io(path, std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(matches!(nf, CoreError::NotFound(_)));

        let pd = CoreError::from_io(
            path,
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(pd, CoreError::PermissionDenied(_)));

        let ae = CoreError::from_io(path, std::io::Error::from(std::io::ErrorKind::AlreadyExists));
        assert!(matches!(ae, CoreError::AlreadyExists(_)));
    }

    #[test]
    fn from_io_falls_back_to_io() {
        let err = CoreError::from_io(
            Path::new("/x"),
            std::io::Error::new(std::io::ErrorKind::Other, "boom"),
        );
        assert!(matches!(err, CoreError::Io(_)));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn io_error_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let core_err: CoreError = io_err.into();
        assert!(matches!(core_err, CoreError::Io(_)));
        assert!(core_err.to_string().contains("gone"));
    }
}
