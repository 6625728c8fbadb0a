//! Directory listing.
//!
//! The [`Lister`] trait is the Listing Provider seam: given a path it either
//! opens the directory and returns its entries, or fails. [`LocalLister`]
//! reads the local filesystem.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::FileEntry;

/// A successfully opened directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// The directory in the normalised form the lister accepts.
    pub path: PathBuf,
    /// The entries to display, in presentation order.
    pub entries: Vec<FileEntry>,
}

/// Listing Provider consumed by the [`crate::Controller`].
pub trait Lister {
    /// Opens `path` and returns its entries.
    ///
    /// # Errors
    ///
    /// Any error means the directory could not be opened; the controller
    /// keeps its current directory in that case.
    fn list(&self, path: &Path) -> CoreResult<Listing>;
}

/// [`Lister`] reading the local filesystem.
///
/// Paths are canonicalised so that `..` and symlinks resolve to the real
/// directory. Hidden entries are dropped unless `show_hidden` is set.
#[derive(Debug, Clone, Copy)]
pub struct LocalLister {
    show_hidden: bool,
    dirs_first: bool,
}

impl Default for LocalLister {
    fn default() -> Self {
        Self {
            show_hidden: false,
            dirs_first: true,
        }
    }
}

impl LocalLister {
    /// Creates a lister with the given visibility and ordering options.
    pub fn new(show_hidden: bool, dirs_first: bool) -> Self {
        Self {
            show_hidden,
            dirs_first,
        }
    }

    /// Returns `true` if dot-files are listed.
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }
}

impl Lister for LocalLister {
    fn list(&self, path: &Path) -> CoreResult<Listing> {
        let path = path.canonicalize().map_err(|e| CoreError::from_io(path, e))?;
        let mut entries = read_directory(&path)?;
        if !self.show_hidden {
            entries.retain(|e| !e.is_hidden());
        }
        sort_entries(&mut entries, self.dirs_first);
        Ok(Listing { path, entries })
    }
}

/// Reads the immediate contents of a directory and returns them as [`FileEntry`] values.
///
/// The returned entries are **unsorted**. Entries whose metadata cannot be
/// read are skipped.
///
/// # Errors
///
/// - [`CoreError::NotFound`]: the path does not exist.
/// - [`CoreError::NotADirectory`]: the path is not a directory.
/// - [`CoreError::PermissionDenied`]: read access is denied.
/// - [`CoreError::Io`]: any other I/O error.
pub fn read_directory(path: &Path) -> CoreResult<Vec<FileEntry>> {
    if !path.exists() {
        return Err(CoreError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(CoreError::NotADirectory(path.to_path_buf()));
    }

    let read_dir = std::fs::read_dir(path).map_err(|e| CoreError::from_io(path, e))?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        // metadata() on the path follows symlinks so a link to a directory
        // is listed (and activated) as a directory
        let metadata = match std::fs::metadata(dir_entry.path()).or_else(|_| dir_entry.metadata()) {
            Ok(m) => m,
            Err(_) => continue,
        };
        entries.push(FileEntry::new(dir_entry.path(), &metadata));
    }

    Ok(entries)
}

/// Sorts entries in place by case-insensitive name, directories first if requested.
pub fn sort_entries(entries: &mut [FileEntry], dirs_first: bool) {
    entries.sort_by(|a, b| {
        if dirs_first {
            let dir_cmp = b.is_dir().cmp(&a.is_dir());
            if dir_cmp != Ordering::Equal {
                return dir_cmp;
            }
        }
        a.name()
            .to_lowercase()
            .cmp(&b.name().to_lowercase())
            .then_with(|| a.name().cmp(b.name()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn names(listing: &Listing) -> Vec<&str> {
        listing.entries.iter().map(|e| e.name()).collect()
    }

    #[test]
    fn read_directory_returns_entries() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("file1.txt"), "hello").unwrap();
        fs::write(tmp.path().join("file2.txt"), "world").unwrap();
        fs::create_dir(tmp.path().join("subdir")).unwrap();

        let entries = read_directory(tmp.path()).unwrap();

        assert_eq!(entries.len(), 3);
        let names: Vec<&str> = entries.iter().map(|e| e.name()).collect();
        assert!(names.contains(&"file1.txt"));
        assert!(names.contains(&"file2.txt"));
        assert!(names.contains(&"subdir"));
    }

    #[test]
    fn read_directory_nonexistent_returns_not_found() {
        let result = read_directory(Path::new("/nonexistent/path/that/does/not/exist"));
        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }

    #[test]
    fn read_directory_on_file_returns_not_a_directory() {
        let tmp = TempDir::new().unwrap();
        let file_path = tmp.path().join("not_a_dir.txt");
        fs::write(&file_path, "content").unwrap();

        let result = read_directory(&file_path);
        assert!(matches!(result, Err(CoreError::NotADirectory(_))));
    }

    #[test]
    fn read_directory_is_shallow() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("subdir")).unwrap();
        fs::write(tmp.path().join("subdir").join("nested.txt"), "").unwrap();
        fs::write(tmp.path().join("top.txt"), "").unwrap();

        let entries = read_directory(tmp.path()).unwrap();

        let names: Vec<&str> = entries.iter().map(|e| e.name()).collect();
        assert_eq!(entries.len(), 2);
        assert!(!names.contains(&"nested.txt"));
    }

    #[test]
    fn local_lister_sorts_dirs_first_then_by_name() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.txt"), "").unwrap();
        fs::write(tmp.path().join("A.txt"), "").unwrap();
        fs::create_dir(tmp.path().join("zdir")).unwrap();
        fs::create_dir(tmp.path().join("adir")).unwrap();

        let listing = LocalLister::default().list(tmp.path()).unwrap();

        assert_eq!(names(&listing), vec!["adir", "zdir", "A.txt", "b.txt"]);
    }

    #[test]
    fn local_lister_mixed_order_without_dirs_first() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.txt"), "").unwrap();
        fs::create_dir(tmp.path().join("c")).unwrap();
        fs::write(tmp.path().join("a.txt"), "").unwrap();

        let listing = LocalLister::new(false, false).list(tmp.path()).unwrap();

        assert_eq!(names(&listing), vec!["a.txt", "b.txt", "c"]);
    }

    #[test]
    fn local_lister_hides_dot_files_by_default() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".hidden"), "").unwrap();
        fs::write(tmp.path().join("visible.txt"), "").unwrap();

        let hidden_off = LocalLister::default().list(tmp.path()).unwrap();
        assert_eq!(names(&hidden_off), vec!["visible.txt"]);

        let hidden_on = LocalLister::new(true, true).list(tmp.path()).unwrap();
        assert_eq!(hidden_on.entries.len(), 2);
    }

    #[test]
    fn local_lister_canonicalizes_path() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        let dotted = tmp.path().join("sub").join("..");

        let listing = LocalLister::default().list(&dotted).unwrap();

        assert_eq!(listing.path, tmp.path().canonicalize().unwrap());
    }

    #[test]
    fn local_lister_missing_path_fails() {
        let tmp = TempDir::new().unwrap();
        let result = LocalLister::default().list(&tmp.path().join("ghost"));
        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }

    #[test]
    fn local_lister_on_file_fails() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("f.txt");
        fs::write(&file, "").unwrap();

        let result = LocalLister::default().list(&file);
        assert!(matches!(result, Err(CoreError::NotADirectory(_))));
    }

    #[cfg(unix)]
    #[test]
    fn symlink_to_directory_lists_as_directory() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("real")).unwrap();
        std::os::unix::fs::symlink(tmp.path().join("real"), tmp.path().join("link")).unwrap();

        let listing = LocalLister::default().list(tmp.path()).unwrap();

        let link = listing.entries.iter().find(|e| e.name() == "link").unwrap();
        assert!(link.is_dir());
    }

    #[test]
    fn sort_entries_is_case_insensitive() {
        let mut entries = vec![
            FileEntry::from_parts("/d/b".into(), "b".into(), false),
            FileEntry::from_parts("/d/C".into(), "C".into(), false),
            FileEntry::from_parts("/d/a".into(), "a".into(), false),
        ];
        sort_entries(&mut entries, true);
        let names: Vec<&str> = entries.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["a", "b", "C"]);
    }
}
