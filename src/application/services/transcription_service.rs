use crate::application::services::{
    FileNameLocks, InputValidator, TranscriptionError, TranscriptionPipeline,
};

/// Entry point for one transcription request: validate, take the per-file lock,
/// run the pipeline.
pub struct TranscriptionService {
    validator: InputValidator,
    pipeline: TranscriptionPipeline,
    locks: FileNameLocks,
}

impl TranscriptionService {
    pub fn new(validator: InputValidator, pipeline: TranscriptionPipeline) -> Self {
        Self {
            validator,
            pipeline,
            locks: FileNameLocks::new(),
        }
    }

    pub fn validator(&self) -> &InputValidator {
        &self.validator
    }

    pub async fn transcribe(&self, candidate: Option<&str>) -> Result<String, TranscriptionError> {
        let (request, source) = self.validator.validate(candidate).await?;

        let _file_lock = self.locks.acquire(request.file_name()).await;
        self.pipeline.run(&request, &source).await
    }
}
