use whisper_gateway::application::services::TempFileGuard;

#[test]
fn given_existing_file_when_guard_drops_then_file_is_deleted() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("call1.wav");
    std::fs::write(&path, b"RIFF").unwrap();

    {
        let guard = TempFileGuard::new(path.clone());
        assert_eq!(guard.path(), path);
        assert!(path.exists());
    }

    assert!(!path.exists());
}

#[test]
fn given_file_never_created_when_guard_drops_then_nothing_happens() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("never.wav");

    drop(TempFileGuard::new(path.clone()));

    assert!(!path.exists());
}

#[test]
fn given_undeletable_path_when_guard_drops_then_does_not_panic() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("occupied.wav");
    std::fs::create_dir(&path).unwrap();

    drop(TempFileGuard::new(path.clone()));

    assert!(path.is_dir());
}

#[test]
fn given_panic_while_guard_alive_when_unwinding_then_file_is_deleted() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("call1.wav");
    std::fs::write(&path, b"RIFF").unwrap();

    let guarded = path.clone();
    let outcome = std::panic::catch_unwind(move || {
        let _guard = TempFileGuard::new(guarded);
        panic!("recognition crashed");
    });

    assert!(outcome.is_err());
    assert!(!path.exists());
}
