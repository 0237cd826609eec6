use std::path::PathBuf;

use whisper_gateway::domain::{ModelAsset, ModelNameError};

#[test]
fn given_model_name_when_creating_asset_then_path_follows_ggml_template() {
    let asset = ModelAsset::new("/app/models", "base").unwrap();

    assert_eq!(asset.name(), "base");
    assert_eq!(asset.path(), PathBuf::from("/app/models/ggml-base.bin"));
}

#[test]
fn given_dotted_model_name_when_creating_asset_then_accepts_it() {
    let asset = ModelAsset::new("/m", "large-v3-turbo.en").unwrap();
    assert_eq!(asset.path(), PathBuf::from("/m/ggml-large-v3-turbo.en.bin"));
}

#[test]
fn given_unsafe_model_name_when_creating_asset_then_rejects_it() {
    for name in ["", "../base", "base; rm -rf /", "a/b", ".hidden", "base model"] {
        assert_eq!(
            ModelAsset::new("/m", name),
            Err(ModelNameError {
                name: name.to_string()
            }),
            "{name:?}"
        );
    }
}

#[tokio::test]
async fn given_missing_file_when_checking_presence_then_returns_false() {
    let dir = tempfile::TempDir::new().unwrap();
    let asset = ModelAsset::new(dir.path(), "base").unwrap();

    assert!(!asset.is_present().await);
}

#[tokio::test]
async fn given_existing_file_when_checking_presence_then_returns_true() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("ggml-base.bin"), b"weights").unwrap();
    let asset = ModelAsset::new(dir.path(), "base").unwrap();

    assert!(asset.is_present().await);
}

#[tokio::test]
async fn given_directory_at_model_path_when_checking_presence_then_returns_false() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("ggml-base.bin")).unwrap();
    let asset = ModelAsset::new(dir.path(), "base").unwrap();

    assert!(!asset.is_present().await);
}
