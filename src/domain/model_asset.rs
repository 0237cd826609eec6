use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid model name {name:?}: expected letters, digits, '.', '-' or '_', not starting with '.'")]
pub struct ModelNameError {
    pub name: String,
}

/// The recognition model file, keyed by model name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelAsset {
    name: String,
    path: PathBuf,
}

impl ModelAsset {
    /// Resolves `<model_dir>/ggml-<name>.bin`. The name ends up in a path and on
    /// a script command line, so only `[A-Za-z0-9._-]` is accepted.
    pub fn new(model_dir: impl AsRef<Path>, name: &str) -> Result<Self, ModelNameError> {
        let valid = !name.is_empty()
            && !name.starts_with('.')
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));
        if !valid {
            return Err(ModelNameError {
                name: name.to_string(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            path: model_dir.as_ref().join(format!("ggml-{name}.bin")),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn is_present(&self) -> bool {
        tokio::fs::metadata(&self.path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }
}
