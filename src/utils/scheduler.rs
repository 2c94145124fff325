//! Browser timers for the system store.

use gloo_timers::callback::{Interval, Timeout};
use hvy_core::runtime::{RepeatingTask, Scheduler, Task, TimerHandle};

/// Schedules store callbacks on the window's timer queue.
///
/// Dropping a returned [`TimerHandle`] drops the gloo timer, which clears it.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn set_timeout(&self, delay_ms: u32, task: Task) -> TimerHandle {
        let timeout = Timeout::new(delay_ms, task);
        TimerHandle::new(move || drop(timeout))
    }

    fn set_interval(&self, period_ms: u32, mut task: RepeatingTask) -> TimerHandle {
        let interval = Interval::new(period_ms, move || task());
        TimerHandle::new(move || drop(interval))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_cancelled_timeout_never_fires() {
        let fired = Rc::new(Cell::new(0));

        let a = fired.clone();
        let kept = BrowserScheduler.set_timeout(10, Box::new(move || a.set(a.get() + 1)));
        let b = fired.clone();
        let cancelled = BrowserScheduler.set_timeout(10, Box::new(move || b.set(b.get() + 10)));
        cancelled.cancel();

        TimeoutFuture::new(50).await;
        assert_eq!(fired.get(), 1);
        drop(kept);
    }

    #[wasm_bindgen_test]
    async fn test_interval_stops_on_drop() {
        let ticks = Rc::new(Cell::new(0));
        let t = ticks.clone();
        let handle = BrowserScheduler.set_interval(10, Box::new(move || t.set(t.get() + 1)));

        TimeoutFuture::new(55).await;
        drop(handle);
        let seen = ticks.get();
        assert!(seen >= 2);

        TimeoutFuture::new(40).await;
        assert_eq!(ticks.get(), seen);
    }
}
