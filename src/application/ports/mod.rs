mod audio_resampler;
mod model_provisioner;
mod process_error;
mod process_runner;
mod transcription_engine;

pub use audio_resampler::AudioResampler;
pub use model_provisioner::ModelProvisioner;
pub use process_error::ProcessError;
pub use process_runner::{CommandSpec, OutputMode, ProcessOutput, ProcessRunner};
pub use transcription_engine::TranscriptionEngine;
