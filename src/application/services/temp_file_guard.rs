use std::io;
use std::path::{Path, PathBuf};

/// Owns the lifetime of a per-request scratch file (resampled audio, pending
/// transcript): the file is removed when the guard drops, whichever way the
/// pipeline step exits.
///
/// A file that was never created is fine. Other removal failures are logged and
/// otherwise ignored.
#[derive(Debug)]
pub struct TempFileGuard {
    path: PathBuf,
}

impl TempFileGuard {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::info!(path = %self.path.display(), "Deleted temp file"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No temp file to delete");
            }
            Err(e) => {
                tracing::warn!(error = %e, path = %self.path.display(), "Could not delete temp file");
            }
        }
    }
}
