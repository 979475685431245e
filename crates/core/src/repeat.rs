//! Cancellable periodic task

use chrono::{DateTime, Utc};
use log::trace;
use std::ops::ControlFlow;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// A repeating timer running a callback on the tokio runtime.
///
/// The first tick fires one period after spawning. The task ends when the
/// callback returns `ControlFlow::Break`, when [`RepeatTask::cancel`] is
/// called, or when the handle is dropped. Must be spawned from within a
/// tokio runtime.
pub struct RepeatTask {
    cancel: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl RepeatTask {
    pub fn spawn<F>(every: Duration, mut tick: F) -> Self
    where
        F: FnMut(DateTime<Utc>) -> ControlFlow<()> + Send + 'static,
    {
        let (cancel, mut cancelled) = watch::channel(false);
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + every, every);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    biased;
                    _ = cancelled.changed() => break,
                    _ = interval.tick() => {
                        if *cancelled.borrow() {
                            break;
                        }
                        if tick(Utc::now()).is_break() {
                            break;
                        }
                    }
                }
            }
            trace!("Repeat task finished");
        });
        Self { cancel, handle }
    }

    /// Stop the task; no tick starts after this returns
    pub fn cancel(&self) {
        let _ = self.cancel.send(true);
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for RepeatTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_until_cancelled() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        let task = RepeatTask::spawn(Duration::from_secs(1), move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
            ControlFlow::Continue(())
        });

        time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);

        task.cancel();
        time::sleep(Duration::from_secs(5)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
        assert!(task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_break_stops_task() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        let task = RepeatTask::spawn(Duration::from_secs(1), move |_| {
            if seen.fetch_add(1, Ordering::SeqCst) + 1 == 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        time::sleep(Duration::from_secs(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert!(task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        let task = RepeatTask::spawn(Duration::from_secs(1), move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
            ControlFlow::Continue(())
        });
        time::sleep(Duration::from_millis(1500)).await;
        drop(task);
        time::sleep(Duration::from_secs(5)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
