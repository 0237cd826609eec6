use std::process::Stdio;
use std::time::Instant;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{
    CommandSpec, OutputMode, ProcessError, ProcessOutput, ProcessRunner,
};

/// Runs commands with `tokio::process`. A child still running when its timeout
/// fires is killed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioProcessRunner;

impl TokioProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<ProcessOutput, ProcessError> {
        let mut command = Command::new(&spec.program);
        command
            .args(&spec.args)
            .stdin(Stdio::null())
            .kill_on_drop(true);
        if let Some(dir) = &spec.working_dir {
            command.current_dir(dir);
        }
        match spec.output {
            OutputMode::Captured => {
                command.stdout(Stdio::piped()).stderr(Stdio::piped());
            }
            OutputMode::Inherited => {
                command.stdout(Stdio::inherit()).stderr(Stdio::inherit());
            }
        }

        tracing::info!(command = %spec.display(), "Running command");
        let started = Instant::now();

        let child = command.spawn().map_err(|source| ProcessError::Spawn {
            program: spec.program.clone(),
            source,
        })?;

        // Dropping the wait future on timeout drops the child, which kills it.
        let waited = match spec.timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait_with_output()).await {
                Ok(waited) => waited,
                Err(_) => {
                    tracing::error!(command = %spec.display(), timeout = ?limit, "Command timed out");
                    return Err(ProcessError::TimedOut {
                        program: spec.program.clone(),
                        after: limit,
                    });
                }
            },
            None => child.wait_with_output().await,
        };
        let output = waited.map_err(|source| ProcessError::Wait {
            program: spec.program.clone(),
            source,
        })?;

        let elapsed = started.elapsed();
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        let exit_code = output.status.code();

        if !stdout.is_empty() {
            tracing::debug!(program = %spec.program, stdout = %stdout, "Command stdout");
        }

        if !output.status.success() {
            tracing::warn!(
                program = %spec.program,
                exit_code = ?exit_code,
                stderr = %stderr,
                elapsed_ms = elapsed.as_millis() as u64,
                "Command failed"
            );
            return Err(ProcessError::Failed {
                program: spec.program.clone(),
                exit_code,
                stderr,
            });
        }

        if !stderr.is_empty() {
            tracing::debug!(program = %spec.program, stderr = %stderr, "Command stderr");
        }
        tracing::info!(
            program = %spec.program,
            elapsed_ms = elapsed.as_millis() as u64,
            "Command succeeded"
        );

        Ok(ProcessOutput {
            exit_code,
            stdout,
            stderr,
            elapsed,
        })
    }
}
