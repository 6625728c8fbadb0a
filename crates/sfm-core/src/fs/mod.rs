//! File system abstractions for SFM.
//!
//! This module holds the collaborator seams the controller drives:
//! [`ops::FsBackend`] for mutating primitives, [`listing::Lister`] for
//! directory listings and [`launch::Launcher`] for opening files, together
//! with their local implementations and the [`entry::FileEntry`] type.

pub mod entry;
pub mod launch;
pub mod listing;
pub mod ops;

pub use entry::FileEntry;
pub use launch::{Launcher, SystemLauncher};
pub use listing::{Lister, Listing, LocalLister};
pub use ops::{FsBackend, LocalBackend};
