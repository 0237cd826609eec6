mod file_name_locks;
mod input_validator;
mod model_readiness;
mod temp_file_guard;
mod transcription_error;
mod transcription_pipeline;
mod transcription_service;

pub use file_name_locks::FileNameLocks;
pub use input_validator::InputValidator;
pub use model_readiness::{ModelReadinessError, ModelReadinessGate};
pub use temp_file_guard::TempFileGuard;
pub use transcription_error::TranscriptionError;
pub use transcription_pipeline::TranscriptionPipeline;
pub use transcription_service::TranscriptionService;
