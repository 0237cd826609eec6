use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{CommandSpec, ProcessError, ProcessRunner, TranscriptionEngine};

/// Runs whisper.cpp's `whisper-cli` with plain-text output:
/// `whisper-cli -m <model> -f <audio> -otxt -of <output_stem> -l <language>`.
pub struct WhisperCliEngine {
    runner: Arc<dyn ProcessRunner>,
    program: String,
    model_path: PathBuf,
    language: String,
    timeout: Duration,
}

impl WhisperCliEngine {
    pub fn new(
        runner: Arc<dyn ProcessRunner>,
        program: String,
        model_path: PathBuf,
        language: String,
        timeout: Duration,
    ) -> Self {
        Self {
            runner,
            program,
            model_path,
            language,
            timeout,
        }
    }

    fn command(&self, audio: &Path, output_stem: &Path) -> CommandSpec {
        CommandSpec::new(&self.program)
            .arg("-m")
            .arg(self.model_path.to_string_lossy())
            .arg("-f")
            .arg(audio.to_string_lossy())
            .arg("-otxt")
            .arg("-of")
            .arg(output_stem.to_string_lossy())
            .arg("-l")
            .arg(&self.language)
            .timeout(self.timeout)
    }
}

#[async_trait]
impl TranscriptionEngine for WhisperCliEngine {
    async fn transcribe(&self, audio: &Path, output_stem: &Path) -> Result<(), ProcessError> {
        tracing::debug!(model = %self.model_path.display(), language = %self.language, "Invoking whisper-cli");
        self.runner
            .run(&self.command(audio, output_stem))
            .await
            .map(|_| ())
    }
}
