// File: crates/energy-charts/src/resize.rs
// Summary: Debounced resize coordinator; trailing-edge refresh after a quiet period.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

pub const QUIET_PERIOD: Duration = Duration::from_millis(250);

/// Coalesces bursts of resize notifications into a single refresh call.
///
/// Each notification cancels the pending timer and arms a new one, so the
/// registered callback runs at most once per quiet period after the last
/// event, and never synchronously inside [`notify_resize`].
///
/// The timer is owned by the coordinator instance; dropping it cancels any
/// pending refresh. Must be used within a Tokio runtime.
///
/// [`notify_resize`]: ResizeCoordinator::notify_resize
pub struct ResizeCoordinator {
    refresh: Arc<dyn Fn() + Send + Sync>,
    quiet: Duration,
    pending: Option<JoinHandle<()>>,
}

impl ResizeCoordinator {
    /// Install `refresh` with the default quiet period.
    pub fn new(refresh: impl Fn() + Send + Sync + 'static) -> Self {
        Self::with_quiet_period(refresh, QUIET_PERIOD)
    }

    pub fn with_quiet_period(refresh: impl Fn() + Send + Sync + 'static, quiet: Duration) -> Self {
        Self {
            refresh: Arc::new(refresh),
            quiet,
            pending: None,
        }
    }

    /// Record one resize event: cancel the pending refresh and re-arm it.
    pub fn notify_resize(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        let refresh = Arc::clone(&self.refresh);
        // the quiet period is measured from the event, not from the first
        // poll of the spawned task
        let deadline = tokio::time::Instant::now() + self.quiet;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            refresh();
        }));
    }

    /// True while a refresh is scheduled but has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for ResizeCoordinator {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
