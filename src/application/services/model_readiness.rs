use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{ModelProvisioner, ProcessError};
use crate::domain::ModelAsset;

#[derive(Debug, thiserror::Error)]
pub enum ModelReadinessError {
    #[error("provisioning model {model} failed: {source}")]
    ProvisioningFailed {
        model: String,
        #[source]
        source: ProcessError,
    },
    #[error("provisioning model {model} succeeded but {path} is still missing")]
    StillMissing { model: String, path: PathBuf },
}

/// Makes sure the recognition model is on disk before the listener is bound.
pub struct ModelReadinessGate {
    asset: ModelAsset,
    provisioner: Arc<dyn ModelProvisioner>,
}

impl ModelReadinessGate {
    pub fn new(asset: ModelAsset, provisioner: Arc<dyn ModelProvisioner>) -> Self {
        Self { asset, provisioner }
    }

    pub async fn ensure_ready(&self) -> Result<(), ModelReadinessError> {
        if self.asset.is_present().await {
            tracing::info!(
                model = %self.asset.name(),
                path = %self.asset.path().display(),
                "Model already exists"
            );
            return Ok(());
        }

        tracing::info!(model = %self.asset.name(), "Model not found, downloading");
        self.provisioner
            .provision(self.asset.name())
            .await
            .map_err(|source| ModelReadinessError::ProvisioningFailed {
                model: self.asset.name().to_string(),
                source,
            })?;

        if !self.asset.is_present().await {
            return Err(ModelReadinessError::StillMissing {
                model: self.asset.name().to_string(),
                path: self.asset.path().to_path_buf(),
            });
        }

        tracing::info!(
            model = %self.asset.name(),
            path = %self.asset.path().display(),
            "Model downloaded"
        );
        Ok(())
    }
}
