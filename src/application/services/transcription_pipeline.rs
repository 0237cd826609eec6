use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::{AudioResampler, ProcessError, TranscriptionEngine};
use crate::application::services::{TempFileGuard, TranscriptionError};
use crate::domain::{PipelineStage, SourceAudioFile, TranscriptionRequest};

/// Resample, recognize, clean up, publish the result. One `run` per request,
/// strictly in that order; the caller gets either the whole transcript or an error.
pub struct TranscriptionPipeline {
    resampler: Arc<dyn AudioResampler>,
    engine: Arc<dyn TranscriptionEngine>,
    audio_dir: PathBuf,
    output_dir: PathBuf,
    resampled_extension: String,
}

impl TranscriptionPipeline {
    pub fn new(
        resampler: Arc<dyn AudioResampler>,
        engine: Arc<dyn TranscriptionEngine>,
        audio_dir: PathBuf,
        output_dir: PathBuf,
        resampled_extension: String,
    ) -> Self {
        Self {
            resampler,
            engine,
            audio_dir,
            output_dir,
            resampled_extension,
        }
    }

    #[tracing::instrument(skip_all, fields(file = %request))]
    pub async fn run(
        &self,
        request: &TranscriptionRequest,
        source: &SourceAudioFile,
    ) -> Result<String, TranscriptionError> {
        tracing::debug!(
            stage = %PipelineStage::Validated,
            size_bytes = source.size_bytes(),
            "Pipeline started"
        );

        let result_path = self.output_dir.join(request.result_file_name());

        // Recognition writes under a per-request stem; `<stem>.txt` is only replaced
        // once a run succeeds, so a failed re-run keeps the previous transcript.
        let pending_stem = self
            .output_dir
            .join(format!(".{}.{}", request.stem(), Uuid::new_v4()));
        let mut pending_path = pending_stem.clone().into_os_string();
        pending_path.push(".txt");
        let pending = TempFileGuard::new(PathBuf::from(pending_path));

        {
            let resampled = TempFileGuard::new(
                self.audio_dir
                    .join(request.resampled_file_name(&self.resampled_extension)),
            );

            tracing::info!(
                stage = %PipelineStage::Resampling,
                destination = %resampled.path().display(),
                "Converting source audio"
            );
            self.resampler
                .resample(source.path(), resampled.path())
                .await
                .map_err(resample_error)?;

            tracing::info!(
                stage = %PipelineStage::Transcribing,
                output_stem = %pending_stem.display(),
                "Running speech recognition"
            );
            self.engine
                .transcribe(resampled.path(), &pending_stem)
                .await
                .map_err(transcribe_error)?;

            tracing::debug!(stage = %PipelineStage::Cleanup, "Releasing resampled audio");
        }

        publish_result(pending.path(), &result_path).await?;
        let transcript = read_result(&result_path).await?;
        tracing::info!(
            stage = %PipelineStage::Done,
            chars = transcript.chars().count(),
            "Transcription completed"
        );
        Ok(transcript)
    }
}

fn resample_error(error: ProcessError) -> TranscriptionError {
    tracing::error!(error = %error, "Resampling failed");
    match error {
        ProcessError::TimedOut { after, .. } => TranscriptionError::Timeout {
            stage: PipelineStage::Resampling,
            after,
        },
        other => TranscriptionError::ResampleFailed(other),
    }
}

fn transcribe_error(error: ProcessError) -> TranscriptionError {
    tracing::error!(error = %error, "Speech recognition failed");
    match error {
        ProcessError::TimedOut { after, .. } => TranscriptionError::Timeout {
            stage: PipelineStage::Transcribing,
            after,
        },
        ProcessError::Failed {
            exit_code, stderr, ..
        } => TranscriptionError::TranscribeFailed { exit_code, stderr },
        other => TranscriptionError::TranscribeFailed {
            exit_code: None,
            stderr: other.to_string(),
        },
    }
}

/// Moves a finished transcript over `<stem>.txt`.
async fn publish_result(pending: &Path, result_path: &Path) -> Result<(), TranscriptionError> {
    match tokio::fs::rename(pending, result_path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::error!(path = %pending.display(), "Recognition reported success but wrote no transcript");
            Err(TranscriptionError::ResultMissing {
                path: pending.to_path_buf(),
            })
        }
        Err(e) => Err(TranscriptionError::Internal(format!(
            "rename {} to {}: {}",
            pending.display(),
            result_path.display(),
            e
        ))),
    }
}

async fn read_result(path: &Path) -> Result<String, TranscriptionError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| TranscriptionError::Internal(format!("read {}: {}", path.display(), e)))
}
