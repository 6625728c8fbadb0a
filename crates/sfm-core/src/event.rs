//! Commands flowing from the front end into the controller.
//!
//! The front end translates user input into [`Command`]s and hands them to
//! [`crate::Controller::handle_command`], which answers with an
//! [`crate::ActionOutcome`]. Any frontend can drive the same core this way.

/// A user action the front end asks the controller to perform.
///
/// Commands that act on an entry carry the entry name as resolved by the
/// front end (see [`crate::nav::path::resolve_selection`]); `None` means
/// nothing was selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Prompt for a name and create a folder in the current directory.
    NewFolder,
    /// Prompt for a new name for the given entry.
    Rename(Option<String>),
    /// Confirm and recursively delete the given entry.
    Delete(Option<String>),
    /// Mark the given entry for copying.
    Copy(Option<String>),
    /// Mark the given entry for moving.
    Cut(Option<String>),
    /// Paste the clipboard item into the current directory.
    Paste,
    /// Re-read the current directory.
    Refresh,
    /// Open the typed path.
    Navigate(String),
    /// Move to the parent directory.
    GoUp,
    /// Activate (open) an entry of the current listing.
    Activate(String),
    /// Leave the application. The controller does nothing; the front end quits.
    Exit,
}

impl Command {
    /// Human-readable name used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NewFolder => "new folder",
            Self::Rename(_) => "rename",
            Self::Delete(_) => "delete",
            Self::Copy(_) => "copy",
            Self::Cut(_) => "cut",
            Self::Paste => "paste",
            Self::Refresh => "refresh",
            Self::Navigate(_) => "navigate",
            Self::GoUp => "go up",
            Self::Activate(_) => "activate",
            Self::Exit => "exit",
        }
    }
}
