//! Filesystem primitives used by the controller.
//!
//! [`FsBackend`] is the seam between the controller and the disk. Every
//! method takes full paths and reports plain success or failure; the
//! controller is responsible for sequencing and for turning failures into
//! user-facing messages. [`LocalBackend`] is the `std::fs` implementation.

use std::io;
use std::path::Path;

use crate::error::{CoreError, CoreResult};

/// Filesystem primitives consumed by the [`crate::Controller`].
///
/// An `Err` does not always mean nothing changed. With `overwrite` the
/// existing destination is removed before the new content is written, and
/// a failed recursive copy is cleaned up only as far as removal succeeds.
/// A failed `move_item` never leaves the item in both places if the
/// partial copy can be removed.
pub trait FsBackend {
    /// Creates a new empty directory at `path`.
    ///
    /// Fails if something already exists there or the parent is missing.
    fn create_dir(&self, path: &Path) -> CoreResult<()>;

    /// Renames `from` to `to`. Fails if `to` is already taken.
    fn rename(&self, from: &Path, to: &Path) -> CoreResult<()>;

    /// Removes `path` and, for directories, everything below it.
    fn delete_recursive(&self, path: &Path) -> CoreResult<()>;

    /// Copies `src` to `dest`.
    ///
    /// Without `overwrite` an existing `dest` is an error. Without
    /// `recursive` a directory source produces an empty directory.
    fn copy(&self, src: &Path, dest: &Path, overwrite: bool, recursive: bool) -> CoreResult<()>;

    /// Moves `src` to `dest`. With `overwrite` an existing `dest` is removed first.
    fn move_item(&self, src: &Path, dest: &Path, overwrite: bool) -> CoreResult<()>;

    /// Returns `true` if anything (including a dangling symlink) exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Returns `true` if `path` is a directory (following symlinks).
    fn is_dir(&self, path: &Path) -> bool;
}

/// [`FsBackend`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalBackend;

impl LocalBackend {
    /// Creates a new local backend.
    pub fn new() -> Self {
        Self
    }
}

impl FsBackend for LocalBackend {
    fn create_dir(&self, path: &Path) -> CoreResult<()> {
        std::fs::create_dir(path).map_err(|e| CoreError::from_io(path, e))
    }

    fn rename(&self, from: &Path, to: &Path) -> CoreResult<()> {
        // Use symlink_metadata to avoid TOCTOU and handle symlinks correctly
        std::fs::symlink_metadata(from).map_err(|e| CoreError::from_io(from, e))?;

        // std::fs::rename silently replaces files on unix
        if self.exists(to) && !is_same_file(from, to) {
            return Err(CoreError::AlreadyExists(to.to_path_buf()));
        }

        std::fs::rename(from, to).map_err(|e| CoreError::from_io(to, e))
    }

    fn delete_recursive(&self, path: &Path) -> CoreResult<()> {
        // symlink_metadata: a symlink to a directory is removed, not followed
        let meta = std::fs::symlink_metadata(path).map_err(|e| CoreError::from_io(path, e))?;

        if meta.is_dir() {
            std::fs::remove_dir_all(path)?;
        } else {
            std::fs::remove_file(path)?;
        }

        Ok(())
    }

    fn copy(&self, src: &Path, dest: &Path, overwrite: bool, recursive: bool) -> CoreResult<()> {
        let meta = std::fs::symlink_metadata(src).map_err(|e| CoreError::from_io(src, e))?;

        if dest == src || (meta.is_dir() && dest.starts_with(src)) {
            return Err(CoreError::SelfReference(dest.to_path_buf()));
        }

        if self.exists(dest) {
            if !overwrite {
                return Err(CoreError::AlreadyExists(dest.to_path_buf()));
            }
            self.delete_recursive(dest)?;
        }

        if meta.is_dir() {
            if recursive {
                copy_dir_recursive(src, dest, 0).inspect_err(|_| discard(dest))
            } else {
                std::fs::create_dir(dest).map_err(|e| CoreError::from_io(dest, e))
            }
        } else if meta.is_symlink() {
            copy_symlink(src, dest)
        } else {
            std::fs::copy(src, dest).map_err(|e| CoreError::from_io(dest, e))?;
            Ok(())
        }
    }

    fn move_item(&self, src: &Path, dest: &Path, overwrite: bool) -> CoreResult<()> {
        let meta = std::fs::symlink_metadata(src).map_err(|e| CoreError::from_io(src, e))?;

        if dest == src {
            return Ok(());
        }
        if meta.is_dir() && dest.starts_with(src) {
            return Err(CoreError::SelfReference(dest.to_path_buf()));
        }

        if self.exists(dest) {
            if !overwrite {
                return Err(CoreError::AlreadyExists(dest.to_path_buf()));
            }
            // rename onto an existing target fails on some platforms
            self.delete_recursive(dest)?;
        }

        match std::fs::rename(src, dest) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::CrossesDevices => {
                tracing::debug!(
                    "{} and {} are on different devices, falling back to copy + delete",
                    src.display(),
                    dest.display()
                );
                self.copy(src, dest, false, true)?;
                self.delete_recursive(src).inspect_err(|_| discard(dest))
            }
            Err(err) => Err(CoreError::from_io(dest, err)),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        std::fs::symlink_metadata(path).is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// Maximum recursion depth for copy_dir_recursive to prevent symlink loops.
const MAX_COPY_DEPTH: usize = 64;

fn copy_dir_recursive(src: &Path, dest: &Path, depth: usize) -> CoreResult<()> {
    if depth > MAX_COPY_DEPTH {
        return Err(CoreError::RecursionLimit(MAX_COPY_DEPTH));
    }

    std::fs::create_dir_all(dest)?;

    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let entry_path = entry.path();
        let target = dest.join(entry.file_name());

        // Use entry.file_type() which does NOT follow symlinks
        let ft = entry.file_type()?;

        if ft.is_symlink() {
            copy_symlink(&entry_path, &target)?;
        } else if ft.is_dir() {
            copy_dir_recursive(&entry_path, &target, depth + 1)?;
        } else {
            std::fs::copy(&entry_path, &target)?;
        }
    }

    Ok(())
}

/// Best-effort removal of a partial copy after a failure.
fn discard(path: &Path) {
    if let Err(e) = LocalBackend.delete_recursive(path) {
        tracing::warn!("could not remove partial copy {}: {e}", path.display());
    }
}

/// Copies a symlink as a symlink rather than following it.
fn copy_symlink(src: &Path, dest: &Path) -> CoreResult<()> {
    #[cfg(unix)]
    {
        let link_target = std::fs::read_link(src)?;
        std::os::unix::fs::symlink(&link_target, dest)?;
    }
    #[cfg(not(unix))]
    {
        std::fs::copy(src, dest)?;
    }
    Ok(())
}

#[cfg(unix)]
fn is_same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (std::fs::symlink_metadata(a), std::fs::symlink_metadata(b)) {
        (Ok(ma), Ok(mb)) => ma.dev() == mb.dev() && ma.ino() == mb.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(ca), Ok(cb)) => ca == cb,
        _ => false,
    }
}
