mod file_size;
mod model_asset;
mod pipeline_stage;
mod source_audio_file;
mod transcription_request;

pub use file_size::megabytes;
pub use model_asset::{ModelAsset, ModelNameError};
pub use pipeline_stage::PipelineStage;
pub use source_audio_file::SourceAudioFile;
pub use transcription_request::{RequestNameError, TranscriptionRequest};
