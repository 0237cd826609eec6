use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{AudioResampler, CommandSpec, ProcessError, ProcessRunner};

/// Resamples with the ffmpeg CLI:
/// `ffmpeg -y -i <source> -ar <rate> -ac <channels> <destination>`.
pub struct FfmpegResampler {
    runner: Arc<dyn ProcessRunner>,
    program: String,
    sample_rate: u32,
    channels: u16,
    timeout: Duration,
}

impl FfmpegResampler {
    pub fn new(
        runner: Arc<dyn ProcessRunner>,
        program: String,
        sample_rate: u32,
        channels: u16,
        timeout: Duration,
    ) -> Self {
        Self {
            runner,
            program,
            sample_rate,
            channels,
            timeout,
        }
    }

    fn command(&self, source: &Path, destination: &Path) -> CommandSpec {
        CommandSpec::new(&self.program)
            .arg("-y")
            .arg("-i")
            .arg(source.to_string_lossy())
            .arg("-ar")
            .arg(self.sample_rate.to_string())
            .arg("-ac")
            .arg(self.channels.to_string())
            .arg(destination.to_string_lossy())
            .timeout(self.timeout)
    }
}

#[async_trait]
impl AudioResampler for FfmpegResampler {
    async fn resample(&self, source: &Path, destination: &Path) -> Result<(), ProcessError> {
        self.runner
            .run(&self.command(source, destination))
            .await
            .map(|_| ())
    }
}
