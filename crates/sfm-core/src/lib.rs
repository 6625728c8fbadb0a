//! SFM core library: UI-agnostic navigation and file-operation logic.
//!
//! `sfm-core` owns the state of a file-browsing session (current directory,
//! last listing, single-slot clipboard) and turns user actions into
//! filesystem operations. Presentation is left to a front end such as
//! `sfm-cli`, which only renders listings and [`ActionOutcome`]s.
//!
//! # Modules
//!
//! - [`controller`]: [`Controller`], one method per user action.
//! - [`fs`]: collaborator traits ([`FsBackend`], [`Lister`], [`Launcher`]) and their local implementations.
//! - [`nav`]: the [`Clipboard`] state machine and path resolution helpers.
//! - [`prompt`]: the [`Prompt`] trait for confirmations and text input.
//! - [`outcome`]: [`ActionOutcome`] and [`FailureKind`].
//! - [`event`]: [`Command`], the user-facing action surface.
//! - [`config`]: TOML-based settings.
//! - [`error`]: Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod fs;
pub mod nav;
pub mod outcome;
pub mod prompt;

pub use config::settings::Config;
pub use controller::Controller;
pub use error::{CoreError, CoreResult};
pub use event::Command;
pub use fs::entry::FileEntry;
pub use fs::launch::{Launcher, SystemLauncher};
pub use fs::listing::{Lister, Listing, LocalLister};
pub use fs::ops::{FsBackend, LocalBackend};
pub use nav::clipboard::{Clipboard, ClipboardItem, ClipboardMode};
pub use outcome::{ActionOutcome, FailureKind};
pub use prompt::{Confirmation, Prompt};

/// A controller wired to the local filesystem and the desktop launcher.
pub type LocalController<P> = Controller<LocalBackend, LocalLister, P, SystemLauncher>;
