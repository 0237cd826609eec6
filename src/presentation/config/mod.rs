mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    LoggingSettings, ResamplerSettings, ServerSettings, Settings, StorageSettings,
    WhisperSettings,
};
