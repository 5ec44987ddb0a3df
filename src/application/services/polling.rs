//! Background polling scheduler.
//!
//! Owns at most one repeating loop per subscription key. Restarting a key
//! cancels the previous loop before installing the new one; stopping is
//! idempotent. Cancellation is cooperative and checked before every sleep
//! and before every action invocation, so an in-flight action finishes but
//! no further tick runs once a loop is cancelled.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use futures_util::future::BoxFuture;
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

/// Action invoked on each tick. Actions are infallible; polling callers
/// wrap fallible work in a best-effort policy so a failed tick never stops
/// the loop.
pub type PollAction = Box<dyn FnMut() -> BoxFuture<'static, ()> + Send>;

/// One step of a polling cycle: sleep for `delay`, then run the action.
pub struct PollStep {
    delay: Duration,
    action: PollAction,
}

impl PollStep {
    /// Creates a step.
    pub fn new(
        delay: Duration,
        action: impl FnMut() -> BoxFuture<'static, ()> + Send + 'static,
    ) -> Self {
        Self {
            delay,
            action: Box::new(action),
        }
    }
}

struct Subscription {
    running: Arc<AtomicBool>,
    _handle: JoinHandle<()>,
}

/// Scheduler owning the background refresh loops.
#[derive(Default)]
pub struct PollingScheduler {
    subscriptions: Mutex<HashMap<String, Subscription>>,
}

impl PollingScheduler {
    /// Creates an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a single-cadence loop: every `interval`, run `action`.
    /// Replaces any loop already running under `key`.
    pub fn start(
        &self,
        key: impl Into<String>,
        interval: Duration,
        action: impl FnMut() -> BoxFuture<'static, ()> + Send + 'static,
    ) {
        self.start_steps(key, vec![PollStep::new(interval, action)]);
    }

    /// Starts a multi-step loop cycling through `steps` in order. Nested
    /// cadences (a short refresh inside a longer one) are steps of one loop
    /// rather than independent timers, which bounds the total request rate.
    /// Replaces any loop already running under `key`.
    pub fn start_steps(&self, key: impl Into<String>, mut steps: Vec<PollStep>) {
        let key = key.into();

        self.stop(&key);

        if steps.is_empty() {
            debug!(key, "Ignoring polling subscription with no steps");
            return;
        }

        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);
        let loop_key = key.clone();

        let handle = tokio::spawn(async move {
            'cycle: loop {
                for step in &mut steps {
                    if !flag.load(Ordering::SeqCst) {
                        break 'cycle;
                    }

                    tokio::time::sleep(step.delay).await;

                    if !flag.load(Ordering::SeqCst) {
                        break 'cycle;
                    }

                    (step.action)().await;
                }
            }

            debug!(key = %loop_key, "Polling loop stopped");
        });

        debug!(key = %key, "Polling subscription started");
        self.subscriptions.lock().insert(
            key,
            Subscription {
                running,
                _handle: handle,
            },
        );
    }

    /// Cancels the loop for `key`. Safe to call repeatedly or when no loop
    /// is running.
    pub fn stop(&self, key: &str) {
        if let Some(subscription) = self.subscriptions.lock().remove(key) {
            subscription.running.store(false, Ordering::SeqCst);
            debug!(key, "Polling subscription cancelled");
        }
    }

    /// Cancels every running loop.
    pub fn stop_all(&self) {
        let mut subscriptions = self.subscriptions.lock();
        for (key, subscription) in subscriptions.drain() {
            subscription.running.store(false, Ordering::SeqCst);
            debug!(key = %key, "Polling subscription cancelled");
        }
    }

    /// Returns whether a loop is installed for `key`.
    #[must_use]
    pub fn is_running(&self, key: &str) -> bool {
        self.subscriptions.lock().contains_key(key)
    }
}

impl Drop for PollingScheduler {
    fn drop(&mut self) {
        self.stop_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counting_action(
        counter: &Arc<AtomicUsize>,
    ) -> impl FnMut() -> BoxFuture<'static, ()> + Send + use<> {
        let counter = Arc::clone(counter);
        move || {
            let counter = Arc::clone(&counter);
            let tick: BoxFuture<'static, ()> = Box::pin(async move {
                counter.fetch_add(1, Ordering::SeqCst);
            });
            tick
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_fire_once_per_interval() {
        let scheduler = PollingScheduler::new();
        let counter = Arc::new(AtomicUsize::new(0));

        scheduler.start("chat-1", Duration::from_secs(5), counting_action(&counter));

        tokio::time::sleep(Duration::from_secs(12)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_leaves_exactly_one_loop() {
        let scheduler = PollingScheduler::new();
        let counter = Arc::new(AtomicUsize::new(0));

        scheduler.start("chat-1", Duration::from_secs(5), counting_action(&counter));
        scheduler.start("chat-1", Duration::from_secs(5), counting_action(&counter));

        // With a leaked first loop this would count twice per interval.
        tokio::time::sleep(Duration::from_secs(12)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_halts_ticks_and_is_idempotent() {
        let scheduler = PollingScheduler::new();
        let counter = Arc::new(AtomicUsize::new(0));

        scheduler.start("inbox", Duration::from_secs(2), counting_action(&counter));

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 2);

        scheduler.stop("inbox");
        scheduler.stop("inbox");
        assert!(!scheduler.is_running("inbox"));

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_independent_keys_run_independently() {
        let scheduler = PollingScheduler::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        scheduler.start("a", Duration::from_secs(3), counting_action(&first));
        scheduler.start("b", Duration::from_secs(5), counting_action(&second));

        tokio::time::sleep(Duration::from_secs(11)).await;
        assert_eq!(first.load(Ordering::SeqCst), 3);
        assert_eq!(second.load(Ordering::SeqCst), 2);

        scheduler.stop("a");
        assert!(scheduler.is_running("b"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_nested_cadence_runs_steps_in_order() {
        let scheduler = PollingScheduler::new();
        let long_step = Arc::new(AtomicUsize::new(0));
        let short_step = Arc::new(AtomicUsize::new(0));

        scheduler.start_steps(
            "inbox",
            vec![
                PollStep::new(Duration::from_secs(10), counting_action(&long_step)),
                PollStep::new(Duration::from_secs(5), counting_action(&short_step)),
            ],
        );

        // Cycle is 15s: long fires at 10, short at 15, long at 25, short at 30.
        tokio::time::sleep(Duration::from_secs(32)).await;
        assert_eq!(long_step.load(Ordering::SeqCst), 2);
        assert_eq!(short_step.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_steps_installs_nothing() {
        let scheduler = PollingScheduler::new();
        scheduler.start_steps("noop", Vec::new());
        assert!(!scheduler.is_running("noop"));
    }
}
