//! Timer scheduling.
//!
//! All delayed work in the store (boot lines, mount narration, heartbeat,
//! view-derived logs) goes through [`Scheduler`]. The browser build backs it
//! with `setTimeout`/`setInterval`; [`ManualScheduler`] runs a virtual clock
//! that is advanced explicitly.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::{Rc, Weak};

use chrono::NaiveTime;

use super::Clock;

pub type Task = Box<dyn FnOnce()>;
pub type RepeatingTask = Box<dyn FnMut()>;

/// Source of one-shot and repeating timers.
pub trait Scheduler {
    /// Runs `task` once after `delay_ms`.
    fn set_timeout(&self, delay_ms: u32, task: Task) -> TimerHandle;

    /// Runs `task` every `period_ms` until the handle is dropped.
    fn set_interval(&self, period_ms: u32, task: RepeatingTask) -> TimerHandle;
}

// ============================================================================
// TimerHandle
// ============================================================================

/// Owner of a scheduled timer. Dropping the handle cancels the timer.
#[must_use = "dropping a TimerHandle cancels the timer"]
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

// ============================================================================
// ManualScheduler
// ============================================================================

enum PendingTask {
    Once(Task),
    Repeating { period: u32, task: RepeatingTask },
}

struct Pending {
    id: u64,
    due: u64,
    task: PendingTask,
}

#[derive(Default)]
struct Queue {
    now: u64,
    next_id: u64,
    pending: Vec<Pending>,
    /// Repeating timers cancelled while their task was running.
    cancelled: HashSet<u64>,
}

impl Queue {
    fn insert(&mut self, due: u64, task: PendingTask) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.push(Pending { id, due, task });
        id
    }

    /// Removes the earliest task due at or before `until`. Ties fire in
    /// scheduling order.
    fn pop_due(&mut self, until: u64) -> Option<Pending> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.id))
            .map(|(i, _)| i)?;
        Some(self.pending.swap_remove(index))
    }
}

/// Virtual-time scheduler. Nothing runs until [`ManualScheduler::advance`].
///
/// Also acts as a [`Clock`] reading the virtual time as time-of-day since
/// midnight, so log timestamps follow the simulated timeline.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual milliseconds elapsed since creation.
    pub fn now_ms(&self) -> u64 {
        self.queue.borrow().now
    }

    /// Number of timers still waiting to fire.
    pub fn pending(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    /// Moves the clock forward by `ms`, running every timer that falls due,
    /// in due-time order.
    pub fn advance(&self, ms: u64) {
        let target = self.queue.borrow().now + ms;

        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let next = queue.pop_due(target);
                if let Some(ref pending) = next {
                    queue.now = pending.due;
                }
                next
            };
            let Some(Pending { id, due, task }) = next else {
                break;
            };

            match task {
                PendingTask::Once(task) => task(),
                PendingTask::Repeating { period, mut task } => {
                    task();
                    let mut queue = self.queue.borrow_mut();
                    if !queue.cancelled.remove(&id) {
                        queue.pending.push(Pending {
                            id,
                            due: due + u64::from(period.max(1)),
                            task: PendingTask::Repeating { period, task },
                        });
                    }
                }
            }
        }

        self.queue.borrow_mut().now = target;
    }

    fn handle(&self, id: u64) -> TimerHandle {
        let queue: Weak<RefCell<Queue>> = Rc::downgrade(&self.queue);
        TimerHandle::new(move || {
            let Some(queue) = queue.upgrade() else { return };
            let removed = {
                let mut queue = queue.borrow_mut();
                match queue.pending.iter().position(|p| p.id == id) {
                    Some(index) => Some(queue.pending.swap_remove(index)),
                    None => {
                        queue.cancelled.insert(id);
                        None
                    }
                }
            };
            // Dropped after the borrow ends: the task may own other handles.
            drop(removed);
        })
    }
}

impl Scheduler for ManualScheduler {
    fn set_timeout(&self, delay_ms: u32, task: Task) -> TimerHandle {
        let id = {
            let mut queue = self.queue.borrow_mut();
            let due = queue.now + u64::from(delay_ms);
            queue.insert(due, PendingTask::Once(task))
        };
        self.handle(id)
    }

    fn set_interval(&self, period_ms: u32, task: RepeatingTask) -> TimerHandle {
        let id = {
            let mut queue = self.queue.borrow_mut();
            let due = queue.now + u64::from(period_ms.max(1));
            queue.insert(
                due,
                PendingTask::Repeating {
                    period: period_ms,
                    task,
                },
            )
        };
        self.handle(id)
    }
}

impl Clock for ManualScheduler {
    fn now(&self) -> NaiveTime {
        let secs = (self.now_ms() / 1000) % 86_400;
        NaiveTime::from_num_seconds_from_midnight_opt(secs as u32, 0).unwrap_or(NaiveTime::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Task) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let make = move |label: &'static str| -> Task {
            let sink = sink.clone();
            Box::new(move || sink.borrow_mut().push(label))
        };
        (log, make)
    }

    #[test]
    fn test_timeouts_fire_in_due_order() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();

        let _c = scheduler.set_timeout(400, task("c"));
        let _a = scheduler.set_timeout(200, task("a"));
        let _b = scheduler.set_timeout(200, task("b"));

        scheduler.advance(199);
        assert!(log.borrow().is_empty());

        scheduler.advance(1);
        assert_eq!(*log.borrow(), vec!["a", "b"]);

        scheduler.advance(1000);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(scheduler.now_ms(), 1200);
    }

    #[test]
    fn test_dropping_handle_cancels() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();

        let handle = scheduler.set_timeout(10, task("never"));
        drop(handle);
        let _kept = scheduler.set_timeout(10, task("kept"));

        scheduler.advance(10);
        assert_eq!(*log.borrow(), vec!["kept"]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_interval_repeats_until_cancelled() {
        let scheduler = ManualScheduler::new();
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();

        let handle = scheduler.set_interval(100, Box::new(move || counter.set(counter.get() + 1)));
        scheduler.advance(350);
        assert_eq!(ticks.get(), 3);

        handle.cancel();
        scheduler.advance(1000);
        assert_eq!(ticks.get(), 3);
    }

    #[test]
    fn test_task_scheduled_from_task_runs_in_same_advance() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();
        let inner = scheduler.clone();
        let slot: Rc<RefCell<Option<TimerHandle>>> = Rc::default();
        let slot_inner = slot.clone();
        let second = task("second");

        let _first = scheduler.set_timeout(
            100,
            Box::new(move || {
                *slot_inner.borrow_mut() = Some(inner.set_timeout(50, second));
            }),
        );

        scheduler.advance(150);
        assert_eq!(*log.borrow(), vec!["second"]);
    }

    #[test]
    fn test_clock_follows_virtual_time() {
        let scheduler = ManualScheduler::new();
        scheduler.advance(3_723_000);
        assert_eq!(scheduler.now().format("%H:%M:%S").to_string(), "01:02:03");
    }
}
