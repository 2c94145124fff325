//! System state store.
//!
//! Single source of truth for the session: lifecycle state, the mounted
//! module and the bounded log buffer. Every delayed mutation (boot lines,
//! mount narration, heartbeat) is scheduled through the injected
//! [`Scheduler`] and owned by the store, so [`SystemStore::shutdown`] (or
//! dropping the last handle) cancels all of it.
//!
//! # Mount generations
//!
//! Each accepted mount request bumps a generation counter and cancels the
//! timers of the previous request. Callbacks also compare their generation
//! before mutating, so a superseded mount can never log or complete.

mod events;

pub use events::{StoreEvent, Subscription};

use std::cell::{Cell, RefCell};
use std::fmt;
use std::mem;
use std::rc::{Rc, Weak};

use crate::config::{boot, heartbeat, mount, MAX_LOG_ENTRIES};
use crate::models::{
    LifecycleState, LogEntry, LogType, ModuleId, MountTarget, SystemSnapshot,
};
use crate::runtime::{
    format_timestamp, AudioCues, Clock, LocalClock, RandomSource, Scheduler, SilentAudio,
    ThreadRandom, TimerHandle,
};
use crate::utils::RingBuffer;

use events::Observer;

const ROOT_MESSAGE: &str = "Returning to SYSTEM_OVERVIEW";

// ============================================================================
// Internal State
// ============================================================================

struct StoreState {
    lifecycle: LifecycleState,
    active_module: Option<ModuleId>,
    /// Module whose mount is in flight.
    loading: Option<ModuleId>,
    logs: RingBuffer<LogEntry>,
    generation: u64,
    boot_started: bool,
    shut_down: bool,
}

impl StoreState {
    /// Moves to a new lifecycle/module pair, recording what changed.
    fn transition(
        &mut self,
        lifecycle: LifecycleState,
        module: Option<ModuleId>,
        events: &mut Vec<StoreEvent>,
    ) {
        if self.lifecycle != lifecycle {
            self.lifecycle = lifecycle;
            events.push(StoreEvent::LifecycleChanged(lifecycle));
        }
        if self.active_module != module {
            self.active_module = module;
            events.push(StoreEvent::ModuleChanged(module));
        }
    }

    fn set_loading(&mut self, loading: Option<ModuleId>, events: &mut Vec<StoreEvent>) {
        if self.loading != loading {
            self.loading = loading;
            events.push(StoreEvent::LoadingChanged(loading));
        }
    }
}

#[derive(Default)]
struct Timers {
    boot: Vec<TimerHandle>,
    mount: Vec<TimerHandle>,
    heartbeat: Option<TimerHandle>,
}

pub(crate) struct StoreInner {
    state: RefCell<StoreState>,
    observers: RefCell<Vec<(u64, Observer)>>,
    next_observer: Cell<u64>,
    timers: RefCell<Timers>,
    scheduler: Rc<dyn Scheduler>,
    random: RefCell<Box<dyn RandomSource>>,
    clock: Rc<dyn Clock>,
    audio: Rc<dyn AudioCues>,
}

// ============================================================================
// Builder
// ============================================================================

/// Wires a [`SystemStore`] to its runtime services.
pub struct SystemStoreBuilder {
    scheduler: Rc<dyn Scheduler>,
    random: Box<dyn RandomSource>,
    clock: Rc<dyn Clock>,
    audio: Rc<dyn AudioCues>,
    log_capacity: usize,
}

impl SystemStoreBuilder {
    pub fn random(mut self, random: impl RandomSource + 'static) -> Self {
        self.random = Box::new(random);
        self
    }

    pub fn clock(mut self, clock: Rc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn audio(mut self, audio: Rc<dyn AudioCues>) -> Self {
        self.audio = audio;
        self
    }

    pub fn log_capacity(mut self, capacity: usize) -> Self {
        self.log_capacity = capacity;
        self
    }

    /// Creates the store in the BOOT state and starts the heartbeat.
    pub fn build(self) -> SystemStore {
        let store = SystemStore {
            inner: Rc::new(StoreInner {
                state: RefCell::new(StoreState {
                    lifecycle: LifecycleState::Boot,
                    active_module: None,
                    loading: None,
                    logs: RingBuffer::new(self.log_capacity),
                    generation: 0,
                    boot_started: false,
                    shut_down: false,
                }),
                observers: RefCell::new(Vec::new()),
                next_observer: Cell::new(0),
                timers: RefCell::new(Timers::default()),
                scheduler: self.scheduler,
                random: RefCell::new(self.random),
                clock: self.clock,
                audio: self.audio,
            }),
        };
        store.start_heartbeat();
        store
    }
}

// ============================================================================
// SystemStore
// ============================================================================

/// Shared handle to the session state. Cloning shares the same store.
#[derive(Clone)]
pub struct SystemStore {
    inner: Rc<StoreInner>,
}

impl SystemStore {
    /// Starts a builder with production defaults: thread RNG, local clock,
    /// no audio.
    pub fn builder(scheduler: Rc<dyn Scheduler>) -> SystemStoreBuilder {
        SystemStoreBuilder {
            scheduler,
            random: Box::new(ThreadRandom),
            clock: Rc::new(LocalClock),
            audio: Rc::new(SilentAudio),
            log_capacity: MAX_LOG_ENTRIES,
        }
    }

    fn upgrade(weak: &Weak<StoreInner>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn lifecycle(&self) -> LifecycleState {
        self.inner.state.borrow().lifecycle
    }

    pub fn active_module(&self) -> Option<ModuleId> {
        self.inner.state.borrow().active_module
    }

    /// Module currently being mounted, if any.
    pub fn loading_module(&self) -> Option<ModuleId> {
        self.inner.state.borrow().loading
    }

    /// Log entries, oldest first.
    pub fn logs(&self) -> Vec<LogEntry> {
        self.inner.state.borrow().logs.to_vec()
    }

    pub fn log_count(&self) -> usize {
        self.inner.state.borrow().logs.len()
    }

    pub fn last_log(&self) -> Option<LogEntry> {
        self.inner.state.borrow().logs.last().cloned()
    }

    pub fn snapshot(&self) -> SystemSnapshot {
        let state = self.inner.state.borrow();
        SystemSnapshot {
            lifecycle: state.lifecycle,
            active_module: state.active_module,
            loading_module: state.loading,
            logs: state.logs.to_vec(),
        }
    }

    pub fn audio(&self) -> Rc<dyn AudioCues> {
        self.inner.audio.clone()
    }

    pub fn is_shut_down(&self) -> bool {
        self.inner.state.borrow().shut_down
    }

    // ------------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------------

    /// Registers `observer` for every subsequent [`StoreEvent`].
    pub fn subscribe(&self, observer: impl Fn(&StoreEvent) + 'static) -> Subscription {
        let id = self.inner.next_observer.get();
        self.inner.next_observer.set(id + 1);
        self.inner
            .observers
            .borrow_mut()
            .push((id, Rc::new(observer)));
        Subscription {
            store: Rc::downgrade(&self.inner),
            id,
        }
    }

    fn emit(&self, events: Vec<StoreEvent>) {
        if events.is_empty() {
            return;
        }
        // Snapshot so observers may subscribe, unsubscribe or mutate the store.
        let observers: Vec<Observer> = self
            .inner
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();
        for event in &events {
            for observer in &observers {
                observer(event);
            }
        }
    }

    // ------------------------------------------------------------------------
    // Log Operations
    // ------------------------------------------------------------------------

    /// Appends a log line, evicting the oldest beyond capacity.
    ///
    /// ERROR and WARNING lines also sound the error cue.
    pub fn push_log(&self, message: impl Into<String>, kind: LogType) {
        let entry = {
            let mut state = self.inner.state.borrow_mut();
            if state.shut_down {
                return;
            }
            let entry = LogEntry::new(format_timestamp(self.inner.clock.now()), message, kind);
            state.logs.push(entry.clone());
            entry
        };

        if kind.is_alert() {
            self.inner.audio.play_error();
        }
        self.emit(vec![StoreEvent::LogAppended(entry)]);
    }

    /// Empties the log buffer.
    pub fn clear_logs(&self) {
        {
            let mut state = self.inner.state.borrow_mut();
            if state.shut_down {
                return;
            }
            state.logs.clear();
        }
        self.emit(vec![StoreEvent::LogsCleared]);
    }

    /// Pushes `lines` at their delays. Dropping the returned schedule cancels
    /// the lines that have not appeared yet.
    pub fn schedule_logs(&self, lines: impl IntoIterator<Item = ScheduledLog>) -> LogSchedule {
        let timers = lines
            .into_iter()
            .map(|line| {
                self.schedule(line.delay_ms, None, move |store| {
                    store.push_log(line.message, line.kind)
                })
            })
            .collect();
        LogSchedule { timers }
    }

    // ------------------------------------------------------------------------
    // Boot
    // ------------------------------------------------------------------------

    /// Schedules the boot narration and the BOOT → IDLE transition.
    ///
    /// One-shot: later calls are ignored.
    pub fn boot_system(&self) {
        {
            let mut state = self.inner.state.borrow_mut();
            if state.shut_down || state.boot_started || state.lifecycle != LifecycleState::Boot {
                log::debug!("boot_system ignored in state {}", state.lifecycle);
                return;
            }
            state.boot_started = true;
        }

        let mut timers: Vec<TimerHandle> = boot::SEQUENCE
            .iter()
            .map(|&(delay, message, kind)| {
                self.schedule(delay, None, move |store| store.push_log(message, kind))
            })
            .collect();
        timers.push(self.schedule(boot::IDLE_AT_MS, None, |store| store.finish_boot()));

        self.inner.timers.borrow_mut().boot = timers;
    }

    fn finish_boot(&self) {
        let mut events = Vec::new();
        {
            let mut state = self.inner.state.borrow_mut();
            if state.lifecycle != LifecycleState::Boot {
                return;
            }
            let module = state.active_module;
            state.transition(LifecycleState::Idle, module, &mut events);
        }
        log::info!("boot complete");
        self.emit(events);
    }

    // ------------------------------------------------------------------------
    // Mounting
    // ------------------------------------------------------------------------

    /// Requests that `target` become the mounted view.
    ///
    /// - [`MountTarget::Root`] returns to the overview; a no-op at the root.
    /// - The active module, or the one already loading, is a no-op.
    /// - Anything else starts a simulated load that supersedes any mount in
    ///   flight.
    pub fn mount_module(&self, target: impl Into<MountTarget>) {
        match target.into() {
            MountTarget::Root => self.reset_to_root(),
            MountTarget::Module(id) => self.begin_mount(id),
        }
    }

    fn reset_to_root(&self) {
        let mut events = Vec::new();
        let stale = {
            let mut state = self.inner.state.borrow_mut();
            if state.shut_down || state.active_module.is_none() {
                return;
            }
            state.generation += 1;
            state.transition(LifecycleState::Idle, None, &mut events);
            state.set_loading(None, &mut events);
            mem::take(&mut self.inner.timers.borrow_mut().mount)
        };
        drop(stale);

        log::debug!("returning to overview");
        self.emit(events);
        self.push_log(ROOT_MESSAGE, LogType::System);
    }

    fn begin_mount(&self, id: ModuleId) {
        let mut events = Vec::new();
        let (generation, stale) = {
            let mut state = self.inner.state.borrow_mut();
            if state.shut_down || state.active_module == Some(id) || state.loading == Some(id) {
                return;
            }
            state.generation += 1;
            state.transition(LifecycleState::LoadingModule, None, &mut events);
            state.set_loading(Some(id), &mut events);
            (
                state.generation,
                mem::take(&mut self.inner.timers.borrow_mut().mount),
            )
        };
        drop(stale);

        self.emit(events);
        self.push_log(format!("Requesting mount: {}...", id), LogType::System);

        let hiccup = self.inner.random.borrow_mut().sample() < mount::HICCUP_PROBABILITY;
        let load_ms = if id.is_heavy() {
            mount::HEAVY_LOAD_MS
        } else {
            mount::LOAD_MS
        };
        let complete_ms = if hiccup {
            load_ms + mount::HICCUP_PENALTY_MS
        } else {
            load_ms
        };
        log::debug!("mount {id} generation {generation}: {complete_ms}ms, hiccup={hiccup}");

        let current = Some(generation);
        let mut timers = vec![
            self.schedule(mount::ALLOCATE_LOG_MS, current, move |store| {
                store.push_log(format!("Allocating memory for {}...", id), LogType::Info)
            }),
            self.schedule(mount::RESOLVE_LOG_MS, current, |store| {
                store.push_log("Resolving dependencies...", LogType::Info)
            }),
        ];
        if hiccup {
            timers.push(self.schedule(mount::HICCUP_LOG_MS, current, move |store| {
                store.push_log(
                    format!("Warning: Latency spike detected on {} fetch.", id),
                    LogType::Warning,
                );
                store.push_log("Retrying packet delivery...", LogType::System);
            }));
        }
        timers.push(self.schedule(complete_ms, current, move |store| {
            store.complete_mount(generation, id)
        }));

        self.inner.timers.borrow_mut().mount = timers;
    }

    fn complete_mount(&self, generation: u64, id: ModuleId) {
        let mut events = Vec::new();
        {
            let mut state = self.inner.state.borrow_mut();
            if state.generation != generation {
                return;
            }
            state.transition(LifecycleState::ActiveModule, Some(id), &mut events);
            state.set_loading(None, &mut events);
        }

        log::info!("mounted {id}");
        self.emit(events);
        self.push_log(format!("{} mounted successfully.", id), LogType::Success);
        if id.is_heavy() {
            self.push_log("PRIMARY_NODE lock engaged.", LogType::System);
        }
        self.inner.audio.play_mount();
    }

    // ------------------------------------------------------------------------
    // Heartbeat
    // ------------------------------------------------------------------------

    fn start_heartbeat(&self) {
        let weak = Rc::downgrade(&self.inner);
        let timer = self.inner.scheduler.set_interval(
            heartbeat::PERIOD_MS,
            Box::new(move || {
                if let Some(store) = Self::upgrade(&weak) {
                    store.heartbeat_tick();
                }
            }),
        );
        self.inner.timers.borrow_mut().heartbeat = Some(timer);
    }

    fn heartbeat_tick(&self) {
        {
            let state = self.inner.state.borrow();
            if state.shut_down || state.lifecycle == LifecycleState::Boot {
                return;
            }
        }
        if self.inner.random.borrow_mut().sample() < heartbeat::PROBABILITY {
            self.push_log(heartbeat::MESSAGE, LogType::System);
        }
    }

    // ------------------------------------------------------------------------
    // Scheduling and Teardown
    // ------------------------------------------------------------------------

    /// Schedules `task` against a weak handle. With `generation` set, the
    /// task only runs if no newer mount request has arrived.
    fn schedule(
        &self,
        delay_ms: u32,
        generation: Option<u64>,
        task: impl FnOnce(&SystemStore) + 'static,
    ) -> TimerHandle {
        let weak = Rc::downgrade(&self.inner);
        self.inner.scheduler.set_timeout(
            delay_ms,
            Box::new(move || {
                let Some(store) = Self::upgrade(&weak) else {
                    return;
                };
                let live = {
                    let state = store.inner.state.borrow();
                    !state.shut_down && generation.is_none_or(|g| g == state.generation)
                };
                if live {
                    task(&store);
                }
            }),
        )
    }

    /// Cancels every timer and detaches all observers. The store keeps its
    /// last state but no longer changes.
    pub fn shutdown(&self) {
        {
            let mut state = self.inner.state.borrow_mut();
            if state.shut_down {
                return;
            }
            state.shut_down = true;
        }
        let timers = mem::take(&mut *self.inner.timers.borrow_mut());
        let observers = mem::take(&mut *self.inner.observers.borrow_mut());
        drop(timers);
        drop(observers);
        log::debug!("system store shut down");
    }
}

impl fmt::Debug for SystemStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("SystemStore")
            .field("lifecycle", &state.lifecycle)
            .field("active_module", &state.active_module)
            .field("loading", &state.loading)
            .field("logs", &state.logs.len())
            .finish()
    }
}

// ============================================================================
// Scheduled Logs
// ============================================================================

/// A log line to push after a delay.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledLog {
    pub delay_ms: u32,
    pub message: String,
    pub kind: LogType,
}

impl ScheduledLog {
    pub fn new(delay_ms: u32, message: impl Into<String>, kind: LogType) -> Self {
        Self {
            delay_ms,
            message: message.into(),
            kind,
        }
    }

    /// Lines spaced `stagger_ms` apart, the first after one stagger.
    pub fn staggered(
        stagger_ms: u32,
        lines: impl IntoIterator<Item = (String, LogType)>,
    ) -> Vec<Self> {
        lines
            .into_iter()
            .zip(1u32..)
            .map(|((message, kind), step)| Self::new(stagger_ms * step, message, kind))
            .collect()
    }
}

/// Pending lines from [`SystemStore::schedule_logs`]; dropping cancels them.
#[derive(Debug, Default)]
#[must_use = "dropping a LogSchedule cancels its lines"]
pub struct LogSchedule {
    timers: Vec<TimerHandle>,
}

impl LogSchedule {
    pub fn cancel(self) {}

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{AudioCue, ManualScheduler, RecordingAudio, SequenceRandom};

    fn store_with(random: SequenceRandom) -> (SystemStore, ManualScheduler, Rc<RecordingAudio>) {
        let scheduler = ManualScheduler::new();
        let audio = Rc::new(RecordingAudio::new());
        let store = SystemStore::builder(Rc::new(scheduler.clone()))
            .random(random)
            .clock(Rc::new(scheduler.clone()))
            .audio(audio.clone())
            .build();
        (store, scheduler, audio)
    }

    fn messages(store: &SystemStore) -> Vec<String> {
        store.logs().into_iter().map(|e| e.message).collect()
    }

    #[test]
    fn test_initial_state() {
        let (store, _, _) = store_with(SequenceRandom::never());
        assert_eq!(store.lifecycle(), LifecycleState::Boot);
        assert_eq!(store.active_module(), None);
        assert_eq!(store.log_count(), 0);
    }

    #[test]
    fn test_push_log_bounded_fifo() {
        let (store, _, _) = store_with(SequenceRandom::never());
        for i in 0..55 {
            store.push_log(format!("line {}", i), LogType::Info);
        }
        let logs = messages(&store);
        assert_eq!(logs.len(), 50);
        assert_eq!(logs.first().map(String::as_str), Some("line 5"));
        assert_eq!(logs.last().map(String::as_str), Some("line 54"));
    }

    #[test]
    fn test_alert_logs_sound_error_cue() {
        let (store, _, audio) = store_with(SequenceRandom::never());
        store.push_log("fine", LogType::Info);
        store.push_log("hmm", LogType::Warning);
        store.push_log("bad", LogType::Error);
        assert_eq!(audio.cues(), vec![AudioCue::Error, AudioCue::Error]);
    }

    #[test]
    fn test_timestamp_format() {
        let (store, scheduler, _) = store_with(SequenceRandom::never());
        scheduler.advance(61_000);
        store.push_log("tick", LogType::Info);
        assert_eq!(store.last_log().unwrap().timestamp, "00:01:01");
    }

    #[test]
    fn test_clear_logs() {
        let (store, _, _) = store_with(SequenceRandom::never());
        store.push_log("a", LogType::Info);
        store.clear_logs();
        assert_eq!(store.log_count(), 0);
        store.clear_logs();
        assert_eq!(store.log_count(), 0);
    }

    #[test]
    fn test_observers_receive_events_in_order() {
        let (store, _, _) = store_with(SequenceRandom::never());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let subscription = store.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        store.mount_module(ModuleId::Stack);
        {
            let seen = seen.borrow();
            assert_eq!(
                seen[0],
                StoreEvent::LifecycleChanged(LifecycleState::LoadingModule)
            );
            assert_eq!(seen[1], StoreEvent::LoadingChanged(Some(ModuleId::Stack)));
            assert!(matches!(seen[2], StoreEvent::LogAppended(ref e) if e.message == "Requesting mount: STACK..."));
        }

        drop(subscription);
        let before = seen.borrow().len();
        store.push_log("unobserved", LogType::Info);
        assert_eq!(seen.borrow().len(), before);
    }

    #[test]
    fn test_loading_changes_follow_mount_requests() {
        let (store, scheduler, _) = store_with(SequenceRandom::never());
        let loading = Rc::new(RefCell::new(Vec::new()));
        let sink = loading.clone();
        let _subscription = store.subscribe(move |event| {
            if let StoreEvent::LoadingChanged(module) = event {
                sink.borrow_mut().push(*module);
            }
        });

        store.mount_module(ModuleId::Stack);
        store.mount_module(ModuleId::Projects);
        assert_eq!(store.snapshot().loading_module, Some(ModuleId::Projects));
        scheduler.advance(2000);

        assert_eq!(
            *loading.borrow(),
            vec![Some(ModuleId::Stack), Some(ModuleId::Projects), None]
        );
        assert_eq!(store.snapshot().loading_module, None);
    }

    #[test]
    fn test_boot_is_one_shot() {
        let (store, scheduler, _) = store_with(SequenceRandom::never());
        store.boot_system();
        store.boot_system();
        scheduler.advance(3000);
        assert_eq!(store.log_count(), boot::SEQUENCE.len());
        assert_eq!(store.lifecycle(), LifecycleState::Idle);
    }

    #[test]
    fn test_mount_completion_plays_mount_cue() {
        let (store, scheduler, audio) = store_with(SequenceRandom::never());
        store.mount_module(ModuleId::Projects);
        scheduler.advance(800);
        assert_eq!(store.active_module(), Some(ModuleId::Projects));
        assert_eq!(audio.cues(), vec![AudioCue::Mount]);
    }

    #[test]
    fn test_loading_module_duplicate_request_ignored() {
        let (store, scheduler, _) = store_with(SequenceRandom::never());
        store.mount_module(ModuleId::Access);
        scheduler.advance(300);
        store.mount_module(ModuleId::Access);
        scheduler.advance(500);
        assert_eq!(store.active_module(), Some(ModuleId::Access));
        assert_eq!(
            messages(&store)
                .iter()
                .filter(|m| m.starts_with("Requesting mount"))
                .count(),
            1
        );
    }

    #[test]
    fn test_scheduled_logs_cancel_on_drop() {
        let (store, scheduler, _) = store_with(SequenceRandom::never());
        let lines = ScheduledLog::staggered(
            100,
            ["one", "two", "three"].map(|m| (m.to_string(), LogType::Info)),
        );
        assert_eq!(lines[2].delay_ms, 300);

        let schedule = store.schedule_logs(lines);
        assert_eq!(schedule.len(), 3);
        scheduler.advance(150);
        schedule.cancel();
        scheduler.advance(1000);
        assert_eq!(messages(&store), vec!["one"]);
    }

    #[test]
    fn test_shutdown_stops_everything() {
        let (store, scheduler, _) = store_with(SequenceRandom::new([1.0, 0.0, 0.0]));
        store.boot_system();
        store.mount_module(ModuleId::Healiora);
        store.shutdown();
        assert_eq!(scheduler.pending(), 0);

        let before = store.snapshot();
        scheduler.advance(20_000);
        store.push_log("after", LogType::Info);
        assert_eq!(store.snapshot(), before);
        assert!(store.is_shut_down());
    }

    #[test]
    fn test_dropping_store_cancels_timers() {
        let (store, scheduler, _) = store_with(SequenceRandom::never());
        store.boot_system();
        assert!(scheduler.pending() > 0);
        drop(store);
        assert_eq!(scheduler.pending(), 0);
    }
}
