//! Path resolution helpers.
//!
//! Entry names from a listing are resolved against the current directory;
//! user-typed navigation targets additionally get `~` expansion and
//! relative-path resolution.

use std::path::{Path, PathBuf};

/// Joins an entry `name` onto `dir` with exactly one separator.
///
/// Leading separators on `name` are dropped so that a stray `/` can never
/// turn the result into an absolute path outside `dir`. A trailing
/// separator on `dir` is absorbed by [`Path::join`].
///
/// ```
/// use std::path::Path;
/// use sfm_core::nav::path::join_entry;
///
/// assert_eq!(join_entry(Path::new("/home/u/"), "a.txt"), Path::new("/home/u/a.txt"));
/// assert_eq!(join_entry(Path::new("/home/u"), "a.txt"), Path::new("/home/u/a.txt"));
/// ```
pub fn join_entry(dir: &Path, name: &str) -> PathBuf {
    dir.join(name.trim_start_matches(std::path::is_separator))
}

/// Returns the final component of `path` as a string, if it has one.
pub fn base_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

/// Expands a leading `~` to `home`. Other input is returned unchanged.
pub fn expand_tilde(input: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(input);
    };
    if input == "~" {
        return home.to_path_buf();
    }
    match input.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(input),
    }
}

/// Resolves a user-typed navigation target into an absolute path.
///
/// `~` expands to `home`; relative paths are resolved against `current`.
/// The result is not canonicalised, that is the lister's job.
pub fn resolve_target(current: &Path, input: &str, home: Option<&Path>) -> PathBuf {
    let expanded = expand_tilde(input, home);
    if expanded.is_absolute() {
        expanded
    } else {
        current.join(expanded)
    }
}

/// Returns `true` if `name` can be used as a single entry name.
pub fn is_valid_filename(name: &str) -> bool {
    if name.is_empty() || name == "." || name == ".." {
        return false;
    }
    if name.contains('/') || name.contains('\0') {
        return false;
    }
    #[cfg(windows)]
    if name.contains('\\') || name.contains(':') {
        return false;
    }
    true
}

/// Picks the entry an action applies to.
///
/// The activated (event) row always wins over the selection state; blank
/// names count as absent.
pub fn resolve_selection<'a>(activated: Option<&'a str>, selected: Option<&'a str>) -> Option<&'a str> {
    let usable = |name: &&str| !name.trim().is_empty();
    activated.filter(usable).or_else(|| selected.filter(usable))
}
