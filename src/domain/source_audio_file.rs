use std::path::{Path, PathBuf};

/// An uploaded audio file that passed validation. Owned by whoever uploaded it;
/// the service only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceAudioFile {
    path: PathBuf,
    size_bytes: u64,
}

impl SourceAudioFile {
    pub fn new(path: PathBuf, size_bytes: u64) -> Self {
        Self { path, size_bytes }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }
}
