use std::path::Path;

use async_trait::async_trait;

use super::ProcessError;

/// Speech recognition with a file-in/file-out contract: on success the engine has
/// written `<output_stem>.txt`.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, audio: &Path, output_stem: &Path) -> Result<(), ProcessError>;
}
