use std::sync::Arc;
use std::time::Duration;

use whisper_gateway::application::ports::{ModelProvisioner, OutputMode};
use whisper_gateway::infrastructure::models::ScriptModelProvisioner;

use crate::helpers::RecordingRunner;

#[tokio::test]
async fn given_model_name_when_provisioning_then_runs_script_with_inherited_output() {
    let runner = RecordingRunner::succeeding();
    let provisioner = ScriptModelProvisioner::new(
        Arc::clone(&runner) as Arc<dyn whisper_gateway::application::ports::ProcessRunner>,
        "/app/models/download-ggml-model.sh".to_string(),
        Duration::from_secs(1800),
    );

    provisioner.provision("base").await.unwrap();

    let specs = runner.specs();
    assert_eq!(specs.len(), 1);
    assert_eq!(specs[0].program, "/app/models/download-ggml-model.sh");
    assert_eq!(specs[0].args, vec!["base"]);
    assert_eq!(specs[0].output, OutputMode::Inherited);
    assert_eq!(specs[0].timeout, Some(Duration::from_secs(1800)));
}

#[tokio::test]
async fn given_script_failure_when_provisioning_then_returns_error() {
    let runner = RecordingRunner::exiting_with(1);
    let provisioner = ScriptModelProvisioner::new(
        runner,
        "download-ggml-model.sh".to_string(),
        Duration::from_secs(10),
    );

    assert!(provisioner.provision("base").await.is_err());
}
