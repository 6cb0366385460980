//! Tests for runtime adapters

use slotgate::core::Spawn;
use slotgate::runtime::TokioSpawner;
use tokio::sync::oneshot;

#[tokio::test]
async fn tokio_spawner_runs_futures() {
    let spawner = TokioSpawner::current();
    let (tx, rx) = oneshot::channel();
    spawner.spawn(async move {
        let _ = tx.send(42);
    });
    assert_eq!(rx.await.unwrap(), 42);
}

#[tokio::test]
async fn spawner_from_explicit_handle() {
    let spawner = TokioSpawner::new(tokio::runtime::Handle::current());
    let (tx, rx) = oneshot::channel();
    spawner.spawn(async move {
        let _ = tx.send("ok");
    });
    assert_eq!(rx.await.unwrap(), "ok");
}
