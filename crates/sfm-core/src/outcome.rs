//! Results handed back to the presentation layer.

use std::fmt;
use std::path::{Path, PathBuf};

/// Why an action failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The action needs a selected entry and none was given.
    Selection,
    /// Paste was requested with nothing on the clipboard.
    EmptyClipboard,
    /// A filesystem primitive reported failure.
    Backend,
    /// A directory could not be opened; the current directory is unchanged.
    Navigation,
    /// The default application could not be started.
    Launch,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Selection => "selection",
            Self::EmptyClipboard => "empty clipboard",
            Self::Backend => "filesystem",
            Self::Navigation => "navigation",
            Self::Launch => "launch",
        };
        f.write_str(label)
    }
}

/// The result of a controller action.
///
/// Carries no UI state: front ends render `message` and, when present,
/// reset their path field to `current_dir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    success: bool,
    message: Option<String>,
    current_dir: Option<PathBuf>,
    failure: Option<FailureKind>,
}

impl ActionOutcome {
    /// A successful outcome with a message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            current_dir: None,
            failure: None,
        }
    }

    /// A failed outcome of the given kind.
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            current_dir: None,
            failure: Some(kind),
        }
    }

    /// Attaches the directory the caller should display.
    pub fn with_current_dir(self, dir: PathBuf) -> Self {
        Self {
            current_dir: Some(dir),
            ..self
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The current directory after a navigation, successful or not.
    pub fn current_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_has_no_failure_kind() {
        let outcome = ActionOutcome::success("Refreshed");
        assert!(outcome.is_success());
        assert_eq!(outcome.message(), Some("Refreshed"));
        assert_eq!(outcome.failure_kind(), None);
        assert!(outcome.current_dir().is_none());
    }

    #[test]
    fn failure_carries_kind() {
        let outcome = ActionOutcome::failure(FailureKind::Selection, "Nothing selected");
        assert!(!outcome.is_success());
        assert_eq!(outcome.failure_kind(), Some(FailureKind::Selection));
    }

    #[test]
    fn with_current_dir_keeps_status() {
        let outcome = ActionOutcome::failure(FailureKind::Navigation, "Cannot open")
            .with_current_dir(PathBuf::from("/home/u"));
        assert!(!outcome.is_success());
        assert_eq!(outcome.current_dir(), Some(Path::new("/home/u")));
    }

    #[test]
    fn failure_kind_display() {
        assert_eq!(FailureKind::Backend.to_string(), "filesystem");
        assert_eq!(FailureKind::EmptyClipboard.to_string(), "empty clipboard");
    }
}
