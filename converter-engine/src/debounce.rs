//! Debounced task scheduling.
//!
//! Rapid amount typing coalesces into a single conversion: each new trigger
//! cancels the pending one, and only a quiet period lets the task run.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Quiet period before a debounced conversion fires.
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(150);

/// An explicit, replaceable scheduled-task handle.
///
/// At most one task is pending at a time; scheduling a new one aborts the
/// previous handle.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedules `work` to run after the quiet period, replacing any
    /// previously scheduled task.
    pub fn schedule<F>(&mut self, work: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            work.await;
        }));
    }

    /// Cancels the pending task, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_INTERVAL)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    async fn settle() {
        // Let aborted and woken tasks get polled.
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_triggers_coalesce_to_one_run() {
        let runs = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(150));

        for _ in 0..3 {
            let runs = Arc::clone(&runs);
            debouncer.schedule(async move {
                runs.fetch_add(1, Ordering::SeqCst);
            });
            // Let the task register its timer before time moves.
            settle().await;
            tokio::time::advance(Duration::from_millis(50)).await;
            settle().await;
        }

        tokio::time::advance(Duration::from_millis(200)).await;
        settle().await;
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_prevents_the_run() {
        let runs = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(150));

        let counter = Arc::clone(&runs);
        debouncer.schedule(async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        settle().await;
        debouncer.cancel();

        tokio::time::advance(Duration::from_millis(500)).await;
        settle().await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn separated_triggers_each_run() {
        let runs = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(150));

        for _ in 0..2 {
            let runs = Arc::clone(&runs);
            debouncer.schedule(async move {
                runs.fetch_add(1, Ordering::SeqCst);
            });
            settle().await;
            tokio::time::advance(Duration::from_millis(300)).await;
            settle().await;
        }

        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }
}
