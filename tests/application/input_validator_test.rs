use whisper_gateway::application::services::{InputValidator, TranscriptionError};

use crate::helpers::{MAX_FILE_SIZE_BYTES, MIB, TestDirs};

fn validator(dirs: &TestDirs) -> InputValidator {
    InputValidator::new(
        dirs.audio_dir.clone(),
        MAX_FILE_SIZE_BYTES,
        "ogg".to_string(),
    )
}

#[tokio::test]
async fn given_existing_small_file_when_validating_then_returns_request_and_source() {
    let dirs = TestDirs::new();
    let path = dirs.write_audio("call1.ogg", 2 * MIB);

    let (request, source) = validator(&dirs).validate(Some("call1.ogg")).await.unwrap();

    assert_eq!(request.file_name(), "call1.ogg");
    assert_eq!(source.path(), path);
    assert_eq!(source.size_bytes(), 2 * MIB);
}

#[tokio::test]
async fn given_absent_or_empty_candidate_when_validating_then_missing_parameter() {
    let dirs = TestDirs::new();

    for candidate in [None, Some("")] {
        let result = validator(&dirs).validate(candidate).await;
        assert!(matches!(result, Err(TranscriptionError::MissingParameter)));
    }
}

#[tokio::test]
async fn given_wrong_extension_on_existing_file_when_validating_then_extension_checked_first() {
    let dirs = TestDirs::new();
    dirs.write_audio("call1.mp3", 20 * MIB);

    let result = validator(&dirs).validate(Some("call1.mp3")).await;

    match result {
        Err(TranscriptionError::UnsupportedExtension { file, expected }) => {
            assert_eq!(file, "call1.mp3");
            assert_eq!(expected, "ogg");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn given_traversal_to_existing_file_when_validating_then_invalid_name() {
    let dirs = TestDirs::new();
    let outside = dirs.audio_dir.parent().unwrap().join("secret.ogg");
    std::fs::write(&outside, b"top secret").unwrap();

    let result = validator(&dirs).validate(Some("../secret.ogg")).await;

    assert!(matches!(
        result,
        Err(TranscriptionError::InvalidName { ref file }) if file == "../secret.ogg"
    ));
}

#[tokio::test]
async fn given_missing_file_when_validating_then_not_found_names_directory() {
    let dirs = TestDirs::new();

    let result = validator(&dirs).validate(Some("ghost.ogg")).await;

    match result {
        Err(TranscriptionError::NotFound { file, dir }) => {
            assert_eq!(file, "ghost.ogg");
            assert_eq!(dir, dirs.audio_dir);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn given_directory_with_ogg_name_when_validating_then_not_found() {
    let dirs = TestDirs::new();
    std::fs::create_dir(dirs.audio("folder.ogg")).unwrap();

    let result = validator(&dirs).validate(Some("folder.ogg")).await;

    assert!(matches!(result, Err(TranscriptionError::NotFound { .. })));
}

#[tokio::test]
async fn given_oversized_file_when_validating_then_reports_actual_and_max() {
    let dirs = TestDirs::new();
    dirs.write_audio("huge.ogg", 15 * MIB);

    let result = validator(&dirs).validate(Some("huge.ogg")).await;

    match result {
        Err(TranscriptionError::TooLarge {
            file,
            actual_bytes,
            max_bytes,
        }) => {
            assert_eq!(file, "huge.ogg");
            assert_eq!(actual_bytes, 15 * MIB);
            assert_eq!(max_bytes, MAX_FILE_SIZE_BYTES);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn given_one_byte_over_limit_when_validating_then_too_large() {
    let dirs = TestDirs::new();
    dirs.write_audio("edge.ogg", MAX_FILE_SIZE_BYTES + 1);

    let result = validator(&dirs).validate(Some("edge.ogg")).await;

    assert!(matches!(result, Err(TranscriptionError::TooLarge { .. })));
}

#[tokio::test]
async fn given_validation_when_run_then_source_file_is_left_untouched() {
    let dirs = TestDirs::new();
    let path = dirs.audio("call1.ogg");
    std::fs::write(&path, b"OggS payload").unwrap();

    validator(&dirs).validate(Some("call1.ogg")).await.unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"OggS payload");
    assert_eq!(dirs.audio_entries(), vec!["call1.ogg"]);
}
