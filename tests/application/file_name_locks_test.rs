use std::sync::Arc;
use std::time::Duration;

use whisper_gateway::application::services::FileNameLocks;

#[tokio::test]
async fn given_held_lock_when_same_name_requested_then_waits_until_release() {
    let locks = Arc::new(FileNameLocks::new());
    let first = locks.acquire("call1.ogg").await;

    let contender = {
        let locks = Arc::clone(&locks);
        tokio::spawn(async move {
            let _guard = locks.acquire("call1.ogg").await;
        })
    };

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!contender.is_finished());

    drop(first);
    tokio::time::timeout(Duration::from_secs(1), contender)
        .await
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn given_held_lock_when_other_name_requested_then_acquires_immediately() {
    let locks = FileNameLocks::new();
    let _first = locks.acquire("call1.ogg").await;

    let second = tokio::time::timeout(Duration::from_millis(100), locks.acquire("call2.ogg")).await;

    assert!(second.is_ok());
}

#[tokio::test]
async fn given_released_locks_when_acquiring_again_then_idle_entries_are_pruned() {
    let locks = FileNameLocks::new();
    for name in ["a.ogg", "b.ogg", "c.ogg"] {
        drop(locks.acquire(name).await);
    }

    let _held = locks.acquire("d.ogg").await;

    assert_eq!(locks.tracked(), 1);
}
