use anyhow::{anyhow, Context, Result};
use tokio::sync::oneshot;

/// Runs `f` on a named worker thread and resolves once it is done, so the
/// UI task can await it without holding up rendering. A panic inside `f`
/// drops the sender and comes back as an error instead of taking the window
/// down.
pub async fn run_blocking<F, T>(f: F) -> Result<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    std::thread::Builder::new()
        .name("mailsift-worker".to_string())
        .spawn(move || {
            // The receiver is gone only if the window was closed mid-batch.
            let _ = tx.send(f());
        })
        .context("failed to spawn worker thread")?;

    rx.await.map_err(|_| anyhow!("worker thread panicked"))
}
