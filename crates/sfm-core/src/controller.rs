//! Navigation and file-operation controller.
//!
//! [`Controller`] owns the current directory, the last listing and the
//! clipboard. Each user action is one method; every method runs to
//! completion (prompts included) and converts collaborator failures into an
//! [`ActionOutcome`]. Methods returning `Option` yield `None` when the user
//! cancelled a prompt, in which case nothing was changed.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::event::Command;
use crate::fs::entry::FileEntry;
use crate::fs::launch::Launcher;
use crate::fs::listing::{Lister, Listing};
use crate::fs::ops::FsBackend;
use crate::nav::clipboard::{Clipboard, ClipboardMode};
use crate::nav::path::{base_name, is_valid_filename, join_entry, resolve_target};
use crate::outcome::{ActionOutcome, FailureKind};
use crate::prompt::Prompt;

/// The navigation and file-operation controller.
///
/// Collaborators are injected at construction and owned by the controller;
/// accessors expose them by reference.
#[derive(Debug)]
pub struct Controller<B, L, P, X> {
    backend: B,
    lister: L,
    prompt: P,
    launcher: X,
    current_dir: PathBuf,
    entries: Vec<FileEntry>,
    clipboard: Clipboard,
    home: Option<PathBuf>,
}

impl<B, L, P, X> Controller<B, L, P, X>
where
    B: FsBackend,
    L: Lister,
    P: Prompt,
    X: Launcher,
{
    /// Creates a controller showing `start_dir`.
    ///
    /// # Errors
    ///
    /// Returns the lister's error if `start_dir` cannot be opened; there is
    /// no previous directory to fall back to at this point.
    pub fn new(backend: B, lister: L, prompt: P, launcher: X, start_dir: &Path) -> CoreResult<Self> {
        let Listing { path, entries } = lister.list(start_dir)?;
        tracing::debug!("controller started in {}", path.display());
        Ok(Self {
            backend,
            lister,
            prompt,
            launcher,
            current_dir: path,
            entries,
            clipboard: Clipboard::new(),
            home: dirs::home_dir(),
        })
    }

    /// Overrides the directory `~` expands to.
    pub fn with_home(self, home: Option<PathBuf>) -> Self {
        Self { home, ..self }
    }

    /// The last successfully opened directory.
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// Entries of the last successful listing.
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn lister(&self) -> &L {
        &self.lister
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// Mutable access for front ends that read their own input through the prompt.
    pub fn prompt_mut(&mut self) -> &mut P {
        &mut self.prompt
    }

    pub fn launcher(&self) -> &X {
        &self.launcher
    }

    /// Resolves an entry name of the current directory to a full path.
    pub fn full_path(&self, name: &str) -> PathBuf {
        join_entry(&self.current_dir, name)
    }

    /// Routes a [`Command`] to its action method.
    ///
    /// Returns `None` for [`Command::Exit`] and for cancelled actions.
    pub fn handle_command(&mut self, command: Command) -> Option<ActionOutcome> {
        tracing::debug!("handling command: {}", command.label());
        match command {
            Command::NewFolder => self.create_folder(),
            Command::Rename(name) => self.rename(name.as_deref()),
            Command::Delete(name) => self.delete(name.as_deref()),
            Command::Copy(name) => Some(self.copy(name.as_deref())),
            Command::Cut(name) => Some(self.cut(name.as_deref())),
            Command::Paste => self.paste(),
            Command::Refresh => Some(self.refresh()),
            Command::Navigate(target) => Some(self.navigate(&target)),
            Command::GoUp => Some(self.go_up()),
            Command::Activate(name) => Some(self.activate(&name)),
            Command::Exit => None,
        }
    }

    /// Opens a typed path.
    ///
    /// `~` expands to the home directory and relative input resolves against
    /// the current directory. On failure the current directory is kept and
    /// returned in the outcome so the caller can restore its path field.
    pub fn navigate(&mut self, target: &str) -> ActionOutcome {
        let path = resolve_target(&self.current_dir, target, self.home.as_deref());
        self.open_dir(&path, target)
    }

    /// Opens the parent of the current directory (the root re-lists itself).
    pub fn go_up(&mut self) -> ActionOutcome {
        let parent = self
            .current_dir
            .parent()
            .unwrap_or(self.current_dir.as_path())
            .to_path_buf();
        let shown = parent.display().to_string();
        self.open_dir(&parent, &shown)
    }

    /// Activates an entry of the current listing: directories are opened,
    /// anything else is handed to the launcher.
    pub fn activate(&mut self, name: &str) -> ActionOutcome {
        let entry = match self.lookup(Some(name)) {
            Ok(entry) => entry,
            Err(outcome) => return outcome,
        };
        let path = entry.path();

        if entry.is_dir() {
            let shown = path.display().to_string();
            return self.open_dir(path, &shown);
        }

        let name = entry.name();
        match self.launcher.launch(path) {
            Ok(()) => {
                tracing::info!("launched {}", path.display());
                ActionOutcome::success(format!("Opened '{name}'"))
            }
            Err(err) => {
                log_failure("launch", &err);
                ActionOutcome::failure(FailureKind::Launch, format!("Failed to open '{name}'"))
            }
        }
    }

    /// Prompts for a name and creates that folder in the current directory.
    pub fn create_folder(&mut self) -> Option<ActionOutcome> {
        let name = self.request_name("Enter folder name:", "New Folder", "")?;
        let path = self.full_path(&name);

        let result = if is_valid_filename(&name) {
            self.backend.create_dir(&path)
        } else {
            Err(CoreError::InvalidName(name.clone()))
        };

        Some(match result {
            Ok(()) => {
                tracing::info!("created folder {}", path.display());
                self.reload();
                ActionOutcome::success(format!("Created folder '{name}'"))
            }
            Err(err) => {
                log_failure("create folder", &err);
                ActionOutcome::failure(
                    FailureKind::Backend,
                    format!("Failed to create folder '{name}'. It may already exist."),
                )
            }
        })
    }

    /// Prompts for a new name for `selected` and renames it.
    pub fn rename(&mut self, selected: Option<&str>) -> Option<ActionOutcome> {
        let entry = match self.lookup(selected) {
            Ok(entry) => entry,
            Err(outcome) => return Some(outcome),
        };
        let old_name = entry.name();
        let new_name = self.request_name("Enter new name:", "Rename", old_name)?;
        if new_name == old_name {
            return None;
        }

        let old_path = entry.path();
        let new_path = self.full_path(&new_name);
        let result = if is_valid_filename(&new_name) {
            self.backend.rename(old_path, &new_path)
        } else {
            Err(CoreError::InvalidName(new_name.clone()))
        };

        Some(match result {
            Ok(()) => {
                tracing::info!("renamed {} -> {}", old_path.display(), new_path.display());
                self.reload();
                ActionOutcome::success(format!("Renamed '{old_name}' to '{new_name}'"))
            }
            Err(err) => {
                log_failure("rename", &err);
                ActionOutcome::failure(
                    FailureKind::Backend,
                    format!("Failed to rename '{old_name}' to '{new_name}'"),
                )
            }
        })
    }

    /// Asks for confirmation, then recursively deletes `selected`.
    pub fn delete(&mut self, selected: Option<&str>) -> Option<ActionOutcome> {
        let entry = match self.lookup(selected) {
            Ok(entry) => entry,
            Err(outcome) => return Some(outcome),
        };
        let name = entry.name();
        if !self.prompt.confirm(&format!("Delete '{name}'?"), true).is_yes() {
            tracing::debug!("delete of {name} declined");
            return None;
        }

        let path = entry.path();
        Some(match self.backend.delete_recursive(path) {
            Ok(()) => {
                tracing::info!("deleted {}", path.display());
                self.reload();
                ActionOutcome::success(format!("Deleted '{name}'"))
            }
            Err(err) => {
                log_failure("delete", &err);
                ActionOutcome::failure(FailureKind::Backend, format!("Failed to delete '{name}'"))
            }
        })
    }

    /// Marks `selected` for copying. No filesystem call is made.
    pub fn copy(&mut self, selected: Option<&str>) -> ActionOutcome {
        self.mark(selected, ClipboardMode::Copy)
    }

    /// Marks `selected` for moving. No filesystem call is made.
    pub fn cut(&mut self, selected: Option<&str>) -> ActionOutcome {
        self.mark(selected, ClipboardMode::Cut)
    }

    /// Pastes the clipboard item into the current directory under its own name.
    ///
    /// The clipboard is cleared only when the paste succeeds.
    pub fn paste(&mut self) -> Option<ActionOutcome> {
        let Some(item) = self.clipboard.item().cloned() else {
            return Some(ActionOutcome::failure(
                FailureKind::EmptyClipboard,
                "Nothing to paste",
            ));
        };
        let src = item.path();
        let (Some(file_name), Some(name)) = (src.file_name(), base_name(src)) else {
            return Some(ActionOutcome::failure(
                FailureKind::Backend,
                format!("Failed to paste '{}'", src.display()),
            ));
        };
        // Join the on-disk name; `name` is only for messages.
        let dest = self.current_dir.join(file_name);

        if dest.starts_with(src) {
            if dest == src && item.mode() == ClipboardMode::Cut {
                self.clipboard = std::mem::take(&mut self.clipboard).cleared();
                return Some(ActionOutcome::success(format!("'{name}' is already here")));
            }
            log_failure("paste", &CoreError::SelfReference(dest.clone()));
            return Some(ActionOutcome::failure(
                FailureKind::Backend,
                format!("Cannot paste '{name}' into itself"),
            ));
        }

        let overwrite = if self.backend.exists(&dest) {
            let question = format!("'{name}' already exists. Overwrite?");
            if !self.prompt.confirm(&question, true).is_yes() {
                tracing::debug!("overwrite of {} declined", dest.display());
                return None;
            }
            true
        } else {
            false
        };

        let result = match item.mode() {
            ClipboardMode::Cut => self.backend.move_item(src, &dest, overwrite),
            ClipboardMode::Copy => {
                let recursive = self.backend.is_dir(src);
                self.backend.copy(src, &dest, overwrite, recursive)
            }
        };

        Some(match result {
            Ok(()) => {
                tracing::info!(
                    "pasted ({}) {} -> {}",
                    item.mode(),
                    src.display(),
                    dest.display()
                );
                self.clipboard = std::mem::take(&mut self.clipboard).cleared();
                self.reload();
                ActionOutcome::success(format!("Pasted '{name}'"))
            }
            Err(err) => {
                log_failure("paste", &err);
                ActionOutcome::failure(FailureKind::Backend, format!("Failed to paste '{name}'"))
            }
        })
    }

    /// Re-reads the current directory.
    ///
    /// If it can no longer be opened the previous entries are kept and a
    /// navigation failure is reported; the current directory never changes.
    pub fn refresh(&mut self) -> ActionOutcome {
        match self.lister.list(&self.current_dir) {
            Ok(listing) => {
                self.entries = listing.entries;
                ActionOutcome::success("Refreshed").with_current_dir(self.current_dir.clone())
            }
            Err(err) => {
                log_failure("refresh", &err);
                ActionOutcome::failure(
                    FailureKind::Navigation,
                    format!("Cannot refresh '{}'", self.current_dir.display()),
                )
                .with_current_dir(self.current_dir.clone())
            }
        }
    }

    fn open_dir(&mut self, path: &Path, shown: &str) -> ActionOutcome {
        match self.lister.list(path) {
            Ok(listing) => {
                tracing::debug!("navigated to {}", listing.path.display());
                self.current_dir = listing.path;
                self.entries = listing.entries;
                ActionOutcome::success(format!("Opened {}", self.current_dir.display()))
                    .with_current_dir(self.current_dir.clone())
            }
            Err(err) => {
                log_failure("navigate", &err);
                ActionOutcome::failure(
                    FailureKind::Navigation,
                    format!("Cannot open directory '{shown}'"),
                )
                .with_current_dir(self.current_dir.clone())
            }
        }
    }

    fn mark(&mut self, selected: Option<&str>, mode: ClipboardMode) -> ActionOutcome {
        let entry = match self.lookup(selected) {
            Ok(entry) => entry,
            Err(outcome) => return outcome,
        };
        let name = entry.name();
        let path = entry.path().to_path_buf();
        tracing::debug!("clipboard <- {} ({mode})", path.display());
        self.clipboard = std::mem::take(&mut self.clipboard).with_item(path, mode);
        match mode {
            ClipboardMode::Copy => ActionOutcome::success(format!("Copied '{name}' to clipboard")),
            ClipboardMode::Cut => ActionOutcome::success(format!("Cut '{name}' to clipboard")),
        }
    }

    /// Resolves a selected name to an entry of the current listing.
    ///
    /// Blank input means nothing is selected. Anything that is not the name
    /// of a listed entry (`.`, `..`, `a/b`, a stale name) is rejected before
    /// any prompt or backend call.
    fn lookup(&self, selected: Option<&str>) -> Result<FileEntry, ActionOutcome> {
        let Some(name) = usable(selected) else {
            return Err(nothing_selected());
        };
        let found = is_valid_filename(name)
            .then(|| self.entries.iter().find(|e| e.matches(name)))
            .flatten();
        match found {
            Some(entry) => Ok(entry.clone()),
            None => {
                tracing::debug!("no entry named {name:?} in {}", self.current_dir.display());
                Err(ActionOutcome::failure(
                    FailureKind::Selection,
                    format!("No entry named '{name}'"),
                ))
            }
        }
    }

    /// Asks for a name; blank or cancelled input yields `None`.
    fn request_name(&mut self, prompt: &str, title: &str, prefill: &str) -> Option<String> {
        let text = self.prompt.request_text(prompt, title, prefill)?;
        let name = text.trim();
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }

    /// Refreshes entries after a mutation. A failing re-list keeps the old entries.
    fn reload(&mut self) {
        match self.lister.list(&self.current_dir) {
            Ok(listing) => self.entries = listing.entries,
            Err(err) => log_failure("reload", &err),
        }
    }
}

fn usable(selected: Option<&str>) -> Option<&str> {
    selected.filter(|name| !name.trim().is_empty())
}

fn nothing_selected() -> ActionOutcome {
    ActionOutcome::failure(FailureKind::Selection, "Nothing selected")
}

fn log_failure(action: &str, err: &CoreError) {
    tracing::warn!("{action} failed: {err}");
}
