//! Opening files with the platform's default application.

use std::path::Path;

use crate::error::{CoreError, CoreResult};

/// Launch capability consumed by the [`crate::Controller`] when a
/// non-directory entry is activated.
pub trait Launcher {
    /// Opens `path` with the default handler for its type.
    fn launch(&self, path: &Path) -> CoreResult<()>;
}

/// [`Launcher`] delegating to the desktop's default handler via `open`.
///
/// The child process is detached so the file manager keeps running while
/// the opened application is alive.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, path: &Path) -> CoreResult<()> {
        open::that_detached(path).map_err(|e| CoreError::Launch {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
