//! Delayed task scheduling with cancellation.
//!
//! [`schedule`] runs a task after a quiet period. Cancellation only takes
//! effect while the delay is still pending; once the delay elapses the
//! task runs to completion, so a request already on the wire is never
//! torn down mid-flight. Callers that need to ignore a late result do so
//! themselves (see the generation check in
//! [`DrugSearchSession`](crate::DrugSearchSession)).

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Handle to a scheduled task.
pub struct CancellableHandle {
    handle: JoinHandle<()>,
    fired: Arc<AtomicBool>,
}

impl CancellableHandle {
    /// Cancels the task if its delay has not yet elapsed.
    ///
    /// Returns true when the task was still waiting and is now cancelled,
    /// false when the delay already elapsed and the task keeps running.
    pub fn cancel(&self) -> bool {
        if self.fired.load(Ordering::SeqCst) {
            return false;
        }
        self.handle.abort();
        true
    }

    /// Returns true once the task has completed or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the task to complete or be cancelled.
    pub async fn join(self) {
        // A cancelled task surfaces as a JoinError; both outcomes are final.
        let _ = self.handle.await;
    }
}

/// Runs `task` after `delay` of quiet time.
pub fn schedule<F>(delay: Duration, task: F) -> CancellableHandle
where
    F: Future<Output = ()> + Send + 'static,
{
    let fired = Arc::new(AtomicBool::new(false));
    let fired_in_task = Arc::clone(&fired);
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        fired_in_task.store(true, Ordering::SeqCst);
        task.await;
    });
    CancellableHandle { handle, fired }
}
