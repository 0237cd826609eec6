use std::path::PathBuf;
use std::time::Duration;

use crate::application::ports::ProcessError;
use crate::domain::PipelineStage;

/// Every way a transcription request can fail. Validation variants are caused by
/// the caller; the rest are server-side.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("missing or non-string file parameter")]
    MissingParameter,
    #[error("{file} does not have the .{expected} extension")]
    UnsupportedExtension { file: String, expected: String },
    #[error("{file} is not a plain file name")]
    InvalidName { file: String },
    #[error("{file} not found in {dir}")]
    NotFound { file: String, dir: PathBuf },
    #[error("{file} is {actual_bytes} bytes, limit is {max_bytes}")]
    TooLarge {
        file: String,
        actual_bytes: u64,
        max_bytes: u64,
    },
    #[error("resampling failed: {0}")]
    ResampleFailed(#[source] ProcessError),
    #[error("recognition failed with exit code {exit_code:?}: {stderr}")]
    TranscribeFailed {
        exit_code: Option<i32>,
        stderr: String,
    },
    #[error("{stage} timed out after {after:?}")]
    Timeout { stage: PipelineStage, after: Duration },
    #[error("recognition succeeded but {path} was not written")]
    ResultMissing { path: PathBuf },
    #[error("internal error: {0}")]
    Internal(String),
}

impl TranscriptionError {
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            TranscriptionError::MissingParameter
                | TranscriptionError::UnsupportedExtension { .. }
                | TranscriptionError::InvalidName { .. }
                | TranscriptionError::NotFound { .. }
                | TranscriptionError::TooLarge { .. }
        )
    }
}
