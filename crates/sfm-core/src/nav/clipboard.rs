//! Single-slot clipboard for the copy/cut/paste workflow.

use std::fmt;
use std::path::{Path, PathBuf};

/// How a pending paste treats its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardMode {
    /// Duplicate the source; it stays where it is.
    Copy,
    /// Relocate the source on paste.
    Cut,
}

impl fmt::Display for ClipboardMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copy => write!(f, "copy"),
            Self::Cut => write!(f, "cut"),
        }
    }
}

/// The item marked for a pending paste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardItem {
    path: PathBuf,
    mode: ClipboardMode,
}

impl ClipboardItem {
    /// Absolute path of the marked item.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the paste copies or moves.
    pub fn mode(&self) -> ClipboardMode {
        self.mode
    }
}

/// Clipboard holding at most one pending item.
///
/// Immutable like the rest of the navigation state: [`Clipboard::with_item`]
/// and [`Clipboard::cleared`] return a new value. Marking a new item always
/// replaces the old one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clipboard {
    slot: Option<ClipboardItem>,
}

impl Clipboard {
    /// Creates an empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a clipboard holding `path` in `mode`, discarding any previous item.
    pub fn with_item(self, path: PathBuf, mode: ClipboardMode) -> Self {
        Self {
            slot: Some(ClipboardItem { path, mode }),
        }
    }

    /// Returns an empty clipboard.
    pub fn cleared(self) -> Self {
        Self { slot: None }
    }

    /// The pending item, if any.
    pub fn item(&self) -> Option<&ClipboardItem> {
        self.slot.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}
