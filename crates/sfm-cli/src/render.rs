//! Plain-text rendering of listings and action results.

use std::io::{self, Write};
use std::path::Path;

use sfm_core::{ActionOutcome, Clipboard, FileEntry};

/// Writes the directory header followed by a Name / Type table.
pub fn listing<W: Write>(out: &mut W, dir: &Path, entries: &[FileEntry]) -> io::Result<()> {
    writeln!(out, "{}", dir.display())?;
    if entries.is_empty() {
        return writeln!(out, "  (empty)");
    }

    let width = entries
        .iter()
        .map(|e| e.name().chars().count() + usize::from(e.is_dir()))
        .max()
        .unwrap_or(0)
        .max("Name".len());

    writeln!(out, "  {:<width$}  Type", "Name")?;
    for entry in entries {
        let name = if entry.is_dir() {
            format!("{}/", entry.name())
        } else {
            entry.name().to_string()
        };
        writeln!(out, "  {:<width$}  {}", name, entry.type_label())?;
    }
    Ok(())
}

pub fn outcome<W: Write>(out: &mut W, outcome: &ActionOutcome) -> io::Result<()> {
    let tag = if outcome.is_success() { "ok" } else { "error" };
    match outcome.message() {
        Some(message) => writeln!(out, "{tag}: {message}"),
        None => writeln!(out, "{tag}"),
    }
}

pub fn clipboard<W: Write>(out: &mut W, clipboard: &Clipboard) -> io::Result<()> {
    match clipboard.item() {
        Some(item) => writeln!(out, "{}: {}", item.mode(), item.path().display()),
        None => writeln!(out, "clipboard is empty"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfm_core::{ClipboardMode, FailureKind};
    use std::path::PathBuf;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn listing_aligns_type_column() {
        let entries = vec![
            FileEntry::from_parts(PathBuf::from("/w/archive"), "archive".into(), true),
            FileEntry::from_parts(PathBuf::from("/w/a.txt"), "a.txt".into(), false),
        ];
        let text = render(|out| listing(out, Path::new("/w"), &entries));

        assert_eq!(
            text,
            "/w\n  Name      Type\n  archive/  Directory\n  a.txt     File\n"
        );
    }

    #[test]
    fn empty_listing() {
        let text = render(|out| listing(out, Path::new("/w"), &[]));
        assert_eq!(text, "/w\n  (empty)\n");
    }

    #[test]
    fn outcome_tags() {
        let ok = ActionOutcome::success("Created folder 'x'");
        let err = ActionOutcome::failure(FailureKind::EmptyClipboard, "Nothing to paste");

        assert_eq!(render(|out| outcome(out, &ok)), "ok: Created folder 'x'\n");
        assert_eq!(render(|out| outcome(out, &err)), "error: Nothing to paste\n");
    }

    #[test]
    fn clipboard_contents() {
        let empty = Clipboard::new();
        assert_eq!(render(|out| clipboard(out, &empty)), "clipboard is empty\n");

        let full = Clipboard::new().with_item(PathBuf::from("/w/a.txt"), ClipboardMode::Cut);
        assert_eq!(render(|out| clipboard(out, &full)), "cut: /w/a.txt\n");
    }
}
