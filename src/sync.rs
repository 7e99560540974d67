//! Polling Synchronizer
//!
//! Small reusable handle around the fetch-immediately-then-every-N-seconds
//! pattern the dashboard uses. The timer loop and the batch bookkeeping are
//! separated so the cadence rules stay testable off-browser.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Period between dashboard refresh batches
pub const DASHBOARD_POLL_MS: u32 = 10_000;

/// Handle over a repeating refresh batch.
///
/// `start` fires one batch immediately, then one per period tick until
/// `stop` flips the alive flag. In-flight fetches are never aborted; their
/// late writes land on signals that no-op once the owning scope is gone.
/// The handle is shared with `on_cleanup`, which wants Send + Sync targets.
#[derive(Clone)]
pub struct Poller {
    alive: Arc<AtomicBool>,
    refresh: Arc<dyn Fn(&Poller) + Send + Sync>,
    /// Failure of the most recent batch, cleared by the next good fetch
    pub last_error: RwSignal<Option<String>>,
}

impl Poller {
    /// Build a poller without arming the timer. The caller drives batches
    /// through [`Poller::fire_batch`]. The refresh closure receives the
    /// handle back so fetches can record or clear the last error.
    pub fn new(refresh: impl Fn(&Poller) + Send + Sync + 'static) -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
            refresh: Arc::new(refresh),
            last_error: RwSignal::new(None),
        }
    }

    /// Immediate batch, then one batch per tick of `period_ms`.
    pub fn start(period_ms: u32, refresh: impl Fn(&Poller) + Send + Sync + 'static) -> Self {
        let poller = Self::new(refresh);
        poller.fire_batch();

        let handle = poller.clone();
        spawn_local(async move {
            loop {
                TimeoutFuture::new(period_ms).await;
                if !handle.fire_batch() {
                    break;
                }
            }
        });
        poller
    }

    /// Fire one refresh batch now. Returns false once stopped, in which case
    /// nothing fires.
    pub fn fire_batch(&self) -> bool {
        if !self.alive.load(Ordering::SeqCst) {
            return false;
        }
        (self.refresh)(self);
        true
    }

    /// Manual refresh outside the timer cadence.
    pub fn refresh_now(&self) {
        self.fire_batch();
    }

    /// Stop the cadence. The armed timer exits at its next tick without
    /// firing; fetches already in flight are left to resolve.
    pub fn stop(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }

    pub fn is_active(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    /// Record a failed refresh. Displayed data is left untouched; the next
    /// successful batch clears this.
    pub fn record_error(&self, err: impl ToString) {
        self.last_error.set(Some(err.to_string()));
    }

    pub fn clear_error(&self) {
        self.last_error.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU32;

    fn counting_poller() -> (Poller, Arc<AtomicU32>) {
        let fired = Arc::new(AtomicU32::new(0));
        let counter = fired.clone();
        let poller = Poller::new(move |_: &Poller| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (poller, fired)
    }

    #[test]
    fn each_tick_fires_exactly_one_batch() {
        let (poller, fired) = counting_poller();

        assert!(poller.fire_batch());
        assert!(poller.fire_batch());
        assert!(poller.fire_batch());
        assert_eq!(fired.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn no_batch_fires_after_stop() {
        let (poller, fired) = counting_poller();

        assert!(poller.fire_batch());
        poller.stop();
        assert!(!poller.fire_batch());
        assert!(!poller.fire_batch());
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!poller.is_active());
    }

    #[test]
    fn stop_reaches_every_clone_of_the_handle() {
        let (poller, fired) = counting_poller();
        let timer_side = poller.clone();

        poller.stop();
        assert!(!timer_side.fire_batch());
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn manual_refresh_fires_outside_the_cadence_until_stopped() {
        let (poller, fired) = counting_poller();

        poller.refresh_now();
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        poller.stop();
        poller.refresh_now();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn last_error_is_cleared_by_the_next_good_batch() {
        let (poller, _) = counting_poller();

        poller.record_error("network down");
        assert_eq!(
            poller.last_error.get_untracked().as_deref(),
            Some("network down")
        );

        poller.clear_error();
        assert_eq!(poller.last_error.get_untracked(), None);
    }

    #[test]
    fn refresh_closure_can_report_through_its_handle() {
        let poller = Poller::new(|handle: &Poller| handle.record_error("fetch failed"));

        poller.fire_batch();
        assert_eq!(
            poller.last_error.get_untracked().as_deref(),
            Some("fetch failed")
        );
    }

    #[test]
    fn handle_can_cross_into_cleanup_callbacks() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Poller>();
    }
}
