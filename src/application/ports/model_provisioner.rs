use async_trait::async_trait;

use super::ProcessError;

#[async_trait]
pub trait ModelProvisioner: Send + Sync {
    /// Fetches the named model so that it is present afterwards.
    async fn provision(&self, model_name: &str) -> Result<(), ProcessError>;
}
