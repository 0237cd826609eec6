use std::path::Path;

use async_trait::async_trait;

use super::ProcessError;

/// Converts a source recording into the waveform format the recognition tool reads.
#[async_trait]
pub trait AudioResampler: Send + Sync {
    async fn resample(&self, source: &Path, destination: &Path) -> Result<(), ProcessError>;
}
