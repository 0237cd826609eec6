use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{
    CommandSpec, ModelProvisioner, OutputMode, ProcessError, ProcessRunner,
};

/// Fetches a model by running `<script> <model_name>`, e.g. whisper.cpp's
/// `download-ggml-model.sh`. Download progress goes straight to the terminal.
pub struct ScriptModelProvisioner {
    runner: Arc<dyn ProcessRunner>,
    script: String,
    timeout: Duration,
}

impl ScriptModelProvisioner {
    pub fn new(runner: Arc<dyn ProcessRunner>, script: String, timeout: Duration) -> Self {
        Self {
            runner,
            script,
            timeout,
        }
    }
}

#[async_trait]
impl ModelProvisioner for ScriptModelProvisioner {
    async fn provision(&self, model_name: &str) -> Result<(), ProcessError> {
        let spec = CommandSpec::new(&self.script)
            .arg(model_name)
            .output(OutputMode::Inherited)
            .timeout(self.timeout);
        self.runner.run(&spec).await.map(|_| ())
    }
}
