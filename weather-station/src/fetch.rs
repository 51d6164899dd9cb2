//! One-shot background weather fetch.
//!
//! The worker never touches UI state: it posts its parsed result as a
//! completion message on a oneshot channel, and the presentation loop
//! consumes that message with a non-blocking poll once per frame.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::oneshot;
use weather_core::{CurrentConditions, Station, WeatherProvider};

/// Result of a non-blocking completion check.
#[derive(Debug, PartialEq)]
pub enum FetchPoll {
    Pending,
    /// The task finished; `None` means the fetch failed and left no data.
    Done(Option<CurrentConditions>),
}

/// Handle to the single in-flight weather fetch.
#[derive(Debug)]
pub struct FetchTask {
    rx: oneshot::Receiver<Option<CurrentConditions>>,
}

impl FetchTask {
    /// Spawn one fetch on the runtime.
    ///
    /// `on_done` runs on the worker after the result has been posted,
    /// typically to request a UI repaint.
    pub fn spawn(
        handle: &Handle,
        provider: Arc<dyn WeatherProvider>,
        station: Station,
        on_done: impl FnOnce() + Send + 'static,
    ) -> Self {
        let (tx, rx) = oneshot::channel();

        handle.spawn(async move {
            let result = match provider.current_weather(&station).await {
                Ok(conditions) => Some(conditions),
                Err(err) => {
                    log::warn!("Weather update failed: {err}");
                    None
                }
            };
            // The receiver may already be gone if the app shut down mid-fetch.
            let _ = tx.send(result);
            on_done();
        });

        Self { rx }
    }

    /// Non-blocking completion check. Drop the task once it reports `Done`.
    ///
    /// A channel that closed without a message means the worker died; that
    /// counts as a failed fetch so the loading state still clears.
    pub fn try_poll(&mut self) -> FetchPoll {
        match self.rx.try_recv() {
            Ok(result) => FetchPoll::Done(result),
            Err(oneshot::error::TryRecvError::Empty) => FetchPoll::Pending,
            Err(oneshot::error::TryRecvError::Closed) => {
                log::warn!("Weather task ended without reporting a result");
                FetchPoll::Done(None)
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{FixedProvider, sample_conditions};
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    async fn wait_for_done(task: &mut FetchTask) -> Option<CurrentConditions> {
        for _ in 0..1000 {
            if let FetchPoll::Done(result) = task.try_poll() {
                return result;
            }
            tokio::task::yield_now().await;
        }
        panic!("fetch task did not complete");
    }

    #[tokio::test]
    async fn successful_task_posts_conditions() {
        let provider = Arc::new(FixedProvider::ok(sample_conditions()));
        let mut task = FetchTask::spawn(&Handle::current(), provider, Station::default(), || {});

        let result = wait_for_done(&mut task).await;
        assert_eq!(result, Some(sample_conditions()));
    }

    #[tokio::test]
    async fn failed_task_posts_no_data() {
        let provider = Arc::new(FixedProvider::failing());
        let mut task = FetchTask::spawn(&Handle::current(), provider, Station::default(), || {});

        let result = wait_for_done(&mut task).await;
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn on_done_runs_after_the_result_is_posted() {
        let notified = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&notified);

        let provider = Arc::new(FixedProvider::ok(sample_conditions()));
        let mut task =
            FetchTask::spawn(&Handle::current(), provider, Station::default(), move || {
                flag.store(true, Ordering::SeqCst);
            });

        wait_for_done(&mut task).await;
        assert!(notified.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn poll_is_pending_until_the_worker_finishes() {
        let provider = Arc::new(FixedProvider::ok(sample_conditions()));
        let mut task = FetchTask::spawn(&Handle::current(), provider, Station::default(), || {});

        // The worker has not been scheduled yet on a current-thread runtime.
        assert_eq!(task.try_poll(), FetchPoll::Pending);
        wait_for_done(&mut task).await;
    }
}
