use std::path::{Path, PathBuf};

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::infrastructure::observability::TracingConfig;

/// Overrides `whisper.model`; kept for compatibility with existing deployments.
pub const MODEL_NAME_VAR: &str = "WHISPER_MODEL";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub resampler: ResamplerSettings,
    pub whisper: WhisperSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Source recordings and their resampled temp copies.
    pub audio_dir: PathBuf,
    /// Transcripts, `<stem>.txt`. Kept after the request completes.
    pub output_dir: PathBuf,
    pub max_file_size_bytes: u64,
    pub source_extension: String,
    pub resampled_extension: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResamplerSettings {
    pub ffmpeg_path: String,
    pub sample_rate: u32,
    pub channels: u16,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WhisperSettings {
    pub cli_path: String,
    pub model: String,
    pub model_dir: PathBuf,
    pub language: String,
    pub download_script: String,
    pub timeout_secs: u64,
    pub provision_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl LoggingSettings {
    pub fn tracing_config(&self, environment: Environment) -> TracingConfig {
        TracingConfig::new(environment.as_str(), &self.level, self.enable_json)
    }
}

impl Settings {
    /// Loads settings from the working directory and the process environment.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."), environment)
    }

    /// Layers, lowest precedence first: built-in defaults,
    /// `<dir>/appsettings.<environment>.*`, `APP_*` variables (`__` separates
    /// nesting levels, e.g. `APP_SERVER__PORT`), then `WHISPER_MODEL`.
    pub fn load_from(dir: &Path, environment: Environment) -> Result<Self, ConfigError> {
        let settings_file = dir.join(environment.settings_file_stem());

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("storage.audio_dir", "/audios")?
            .set_default("storage.output_dir", "/output")?
            .set_default("storage.max_file_size_bytes", 10 * 1024 * 1024)?
            .set_default("storage.source_extension", "ogg")?
            .set_default("storage.resampled_extension", "wav")?
            .set_default("resampler.ffmpeg_path", "ffmpeg")?
            .set_default("resampler.sample_rate", 16_000)?
            .set_default("resampler.channels", 1)?
            .set_default("resampler.timeout_secs", 120)?
            .set_default("whisper.cli_path", "whisper-cli")?
            .set_default("whisper.model", "base")?
            .set_default("whisper.model_dir", "/app/models")?
            .set_default("whisper.language", "ru")?
            .set_default("whisper.download_script", "/app/models/download-ggml-model.sh")?
            .set_default("whisper.timeout_secs", 600)?
            .set_default("whisper.provision_timeout_secs", 1800)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(File::from(settings_file).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("whisper.model", std::env::var(MODEL_NAME_VAR).ok())?
            .build()?
            .try_deserialize::<Self>()?
            .validated()
    }

    /// The resampled copy lives next to the source as `<stem>.<resampled_extension>`
    /// and is deleted after every run, so the two extensions must never name the
    /// same file.
    fn validated(self) -> Result<Self, ConfigError> {
        let storage = &self.storage;
        if storage.source_extension.is_empty() || storage.resampled_extension.is_empty() {
            return Err(ConfigError::Message(
                "storage.source_extension and storage.resampled_extension must not be empty"
                    .to_string(),
            ));
        }
        if storage
            .source_extension
            .eq_ignore_ascii_case(&storage.resampled_extension)
        {
            return Err(ConfigError::Message(format!(
                "storage.resampled_extension must differ from storage.source_extension (both {:?})",
                storage.source_extension
            )));
        }
        Ok(self)
    }
}
