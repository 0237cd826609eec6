mod error_response;
mod health;
mod transcribe;

pub use error_response::ErrorResponse;
pub use health::health_handler;
pub use transcribe::{TranscribeResponse, transcribe_handler};
