use std::io;
use std::path::PathBuf;

use crate::application::services::TranscriptionError;
use crate::domain::{RequestNameError, SourceAudioFile, TranscriptionRequest};

/// Checks a requested file name against the audio directory before any tool runs.
///
/// Only `stat` calls are made; the file is never opened.
#[derive(Debug, Clone)]
pub struct InputValidator {
    audio_dir: PathBuf,
    max_file_size_bytes: u64,
    source_extension: String,
}

impl InputValidator {
    pub fn new(audio_dir: PathBuf, max_file_size_bytes: u64, source_extension: String) -> Self {
        Self {
            audio_dir,
            max_file_size_bytes,
            source_extension,
        }
    }

    pub fn source_extension(&self) -> &str {
        &self.source_extension
    }

    pub async fn validate(
        &self,
        candidate: Option<&str>,
    ) -> Result<(TranscriptionRequest, SourceAudioFile), TranscriptionError> {
        let candidate = match candidate {
            Some(c) if !c.is_empty() => c,
            _ => return Err(TranscriptionError::MissingParameter),
        };

        let request = TranscriptionRequest::parse(candidate, &self.source_extension).map_err(
            |e| match e {
                RequestNameError::UnsupportedExtension => {
                    TranscriptionError::UnsupportedExtension {
                        file: candidate.to_string(),
                        expected: self.source_extension.clone(),
                    }
                }
                RequestNameError::InvalidName => TranscriptionError::InvalidName {
                    file: candidate.to_string(),
                },
            },
        )?;

        let path = self.audio_dir.join(request.file_name());
        let metadata = match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => meta,
            Ok(_) => return Err(self.not_found(&request)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(self.not_found(&request)),
            Err(e) => {
                tracing::error!(error = %e, path = %path.display(), "Failed to stat source audio");
                return Err(TranscriptionError::Internal(format!(
                    "stat {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        let size_bytes = metadata.len();
        if size_bytes > self.max_file_size_bytes {
            return Err(TranscriptionError::TooLarge {
                file: request.file_name().to_string(),
                actual_bytes: size_bytes,
                max_bytes: self.max_file_size_bytes,
            });
        }

        tracing::debug!(file = %request, size_bytes, "Source audio validated");

        Ok((request, SourceAudioFile::new(path, size_bytes)))
    }

    fn not_found(&self, request: &TranscriptionRequest) -> TranscriptionError {
        TranscriptionError::NotFound {
            file: request.file_name().to_string(),
            dir: self.audio_dir.clone(),
        }
    }
}
