use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use whisper_gateway::application::ports::ProcessRunner;
use whisper_gateway::application::services::{
    InputValidator, ModelReadinessGate, TranscriptionPipeline, TranscriptionService,
};
use whisper_gateway::domain::ModelAsset;
use whisper_gateway::infrastructure::audio::{FfmpegResampler, WhisperCliEngine};
use whisper_gateway::infrastructure::models::ScriptModelProvisioner;
use whisper_gateway::infrastructure::observability::init_tracing;
use whisper_gateway::infrastructure::process::TokioProcessRunner;
use whisper_gateway::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(
        &settings.logging.tracing_config(environment),
        settings.server.port,
    );

    let runner: Arc<dyn ProcessRunner> = Arc::new(TokioProcessRunner::new());

    let model = ModelAsset::new(&settings.whisper.model_dir, &settings.whisper.model)?;
    let provisioner = Arc::new(ScriptModelProvisioner::new(
        Arc::clone(&runner),
        settings.whisper.download_script.clone(),
        Duration::from_secs(settings.whisper.provision_timeout_secs),
    ));
    ModelReadinessGate::new(model.clone(), provisioner)
        .ensure_ready()
        .await
        .context("Recognition model is not available; refusing to start")?;

    tokio::fs::create_dir_all(&settings.storage.output_dir)
        .await
        .with_context(|| {
            format!(
                "Failed to create output directory {}",
                settings.storage.output_dir.display()
            )
        })?;

    let resampler = Arc::new(FfmpegResampler::new(
        Arc::clone(&runner),
        settings.resampler.ffmpeg_path.clone(),
        settings.resampler.sample_rate,
        settings.resampler.channels,
        Duration::from_secs(settings.resampler.timeout_secs),
    ));
    let engine = Arc::new(WhisperCliEngine::new(
        Arc::clone(&runner),
        settings.whisper.cli_path.clone(),
        model.path().to_path_buf(),
        settings.whisper.language.clone(),
        Duration::from_secs(settings.whisper.timeout_secs),
    ));

    let validator = InputValidator::new(
        settings.storage.audio_dir.clone(),
        settings.storage.max_file_size_bytes,
        settings.storage.source_extension.clone(),
    );
    let pipeline = TranscriptionPipeline::new(
        resampler,
        engine,
        settings.storage.audio_dir.clone(),
        settings.storage.output_dir.clone(),
        settings.storage.resampled_extension.clone(),
    );

    let state = AppState {
        transcription_service: Arc::new(TranscriptionService::new(validator, pipeline)),
    };
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid listen address")?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Whisper API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
