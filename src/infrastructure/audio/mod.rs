mod ffmpeg_resampler;
mod whisper_cli_engine;

pub use ffmpeg_resampler::FfmpegResampler;
pub use whisper_cli_engine::WhisperCliEngine;
