//! Directory entry representation.

use std::path::{Path, PathBuf};

use unicode_normalization::UnicodeNormalization;

/// A single file or directory entry as produced by a [`crate::Lister`].
///
/// `FileEntry` is immutable. [`FileEntry::name`] is the normalised display
/// name; [`FileEntry::path`] keeps the on-disk name and is what file
/// operations act on.
///
/// # Examples
///
/// ```
/// use sfm_core::FileEntry;
///
/// let entry = FileEntry::from_parts("/home/u/reports".into(), "reports".into(), true);
/// assert_eq!(entry.name(), "reports");
/// assert_eq!(entry.type_label(), "Directory");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: PathBuf,
    name: String,
    is_dir: bool,
    is_hidden: bool,
}

impl FileEntry {
    /// Creates a new `FileEntry` from a path and its metadata.
    ///
    /// The name is NFC-normalised so that decomposed file names (as stored
    /// by macOS) compare equal to what the user types.
    pub fn new(path: PathBuf, metadata: &std::fs::Metadata) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().nfc().collect::<String>())
            .unwrap_or_default();
        Self::from_parts(path, name, metadata.is_dir())
    }

    /// Creates a `FileEntry` without touching the filesystem.
    ///
    /// Hidden entries are detected by a leading `.` in `name`.
    pub fn from_parts(path: PathBuf, name: String, is_dir: bool) -> Self {
        let is_hidden = name.starts_with('.');
        Self {
            path,
            name,
            is_dir,
            is_hidden,
        }
    }

    /// Returns the full path of this entry, using the name as stored on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file or directory name (last component of the path).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if `name` refers to this entry.
    ///
    /// Composed and decomposed spellings of the same name match, so input
    /// typed by the user finds an entry whose on-disk name is NFD.
    pub fn matches(&self, name: &str) -> bool {
        self.name == name || self.name.chars().eq(name.nfc())
    }

    /// Returns `true` if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Returns `true` if the name starts with `.`.
    pub fn is_hidden(&self) -> bool {
        self.is_hidden
    }

    /// Returns the label shown in the listing's type column.
    pub fn type_label(&self) -> &'static str {
        if self.is_dir {
            "Directory"
        } else {
            "File"
        }
    }
}
