//! Root application module.
//!
//! Contains the main App component, the [`AppContext`] shared through the
//! component tree, and the bridge that mirrors [`SystemStore`] events into
//! Leptos signals.

use std::rc::Rc;

use hvy_core::config::MAX_LOG_ENTRIES;
use hvy_core::models::{LifecycleState, LogEntry, LogType, ModuleId, MountTarget, Portfolio};
use hvy_core::utils::RingBuffer;
use hvy_core::{StoreEvent, Subscription, SystemStore, TerminalController};
use leptos::prelude::*;

use crate::components::AppRouter;
use crate::utils::{BrowserScheduler, WebAudio};

// ============================================================================
// TerminalState
// ============================================================================

/// Terminal view state managed with Leptos signals.
///
/// The [`TerminalController`] owns the input line, command recall and the
/// auto-scroll policy; the view reads it through this signal.
#[derive(Clone, Copy)]
pub struct TerminalState {
    pub controller: RwSignal<TerminalController>,
}

impl TerminalState {
    pub fn new() -> Self {
        Self {
            controller: RwSignal::new(TerminalController::new()),
        }
    }

    /// Current contents of the command line.
    pub fn input(&self) -> String {
        self.controller.with(|c| c.input().to_string())
    }

    pub fn set_input(&self, value: String) {
        self.controller.update(|c| c.set_input(value));
    }

    /// Whether new log lines should scroll the output into view.
    pub fn should_follow(&self) -> bool {
        self.controller.with_untracked(|c| c.should_follow())
    }
}

impl Default for TerminalState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// The [`SystemStore`] is the single source of truth. It is not `Send`, so
/// it lives in a local [`StoredValue`] and every change it reports is copied
/// into the signals below:
/// - **logs**: bounded log buffer, in arrival order
/// - **lifecycle** / **active_module**: navigation state
/// - **loading**: module whose mount is in flight
/// - **muted**: audio cue mute toggle
#[derive(Clone, Copy)]
pub struct AppContext {
    system: StoredValue<SystemStore, LocalStorage>,

    pub logs: RwSignal<RingBuffer<LogEntry>>,
    pub lifecycle: RwSignal<LifecycleState>,
    pub active_module: RwSignal<Option<ModuleId>>,
    pub loading: RwSignal<Option<ModuleId>>,
    pub muted: RwSignal<bool>,

    /// Terminal input and scrolling state.
    pub terminal: TerminalState,

    /// Records rendered by the module views.
    pub portfolio: StoredValue<Portfolio>,
}

impl AppContext {
    /// Creates the store wired to browser timers and Web Audio.
    pub fn new() -> Self {
        let audio = Rc::new(WebAudio::new());
        let store = SystemStore::builder(Rc::new(BrowserScheduler))
            .audio(audio)
            .build();

        let portfolio = match Portfolio::embedded() {
            Ok(portfolio) => portfolio,
            Err(e) => {
                log::error!("failed to load portfolio content: {}", e);
                store.push_log(format!("Content unavailable: {}", e), LogType::Error);
                Portfolio::default()
            }
        };

        let snapshot = store.snapshot();
        let mut logs = RingBuffer::new(MAX_LOG_ENTRIES);
        for entry in snapshot.logs {
            logs.push(entry);
        }

        Self {
            system: StoredValue::new_local(store),
            logs: RwSignal::new(logs),
            lifecycle: RwSignal::new(snapshot.lifecycle),
            active_module: RwSignal::new(snapshot.active_module),
            loading: RwSignal::new(snapshot.loading_module),
            muted: RwSignal::new(false),
            terminal: TerminalState::new(),
            portfolio: StoredValue::new(portfolio),
        }
    }

    /// Shared handle to the store.
    pub fn system(&self) -> SystemStore {
        self.system.get_value()
    }

    /// Mirrors store events into this context's signals.
    ///
    /// The observer stays registered while the returned subscription lives.
    pub fn bridge(&self) -> Subscription {
        let ctx = *self;
        self.system().subscribe(move |event| match event {
            StoreEvent::LogAppended(entry) => ctx.logs.update(|logs| {
                logs.push(entry.clone());
            }),
            StoreEvent::LogsCleared => ctx.logs.update(|logs| logs.clear()),
            StoreEvent::ModuleChanged(module) => ctx.active_module.set(*module),
            StoreEvent::LifecycleChanged(state) => ctx.lifecycle.set(*state),
            StoreEvent::LoadingChanged(module) => ctx.loading.set(*module),
        })
    }

    pub fn push_log(&self, message: impl Into<String>, kind: LogType) {
        self.system().push_log(message, kind);
    }

    pub fn mount(&self, target: impl Into<MountTarget>) {
        self.system().mount_module(target);
    }

    /// Submits the command line (Enter).
    pub fn submit(&self) {
        let store = self.system();
        let mut controller = self.terminal.controller.get_untracked();
        if controller.submit(&store).is_some() {
            self.terminal.controller.set(controller);
        }
    }

    /// Clears the log view (Ctrl+L) without recording a command.
    pub fn clear_screen(&self) {
        self.terminal
            .controller
            .update_untracked(|c| c.clear_screen(&self.system()));
    }

    /// Unlocks audio after a user gesture.
    pub fn start_audio(&self) {
        self.system().audio().start();
    }

    pub fn toggle_mute(&self) {
        let muted = self.system().audio().toggle_mute();
        self.muted.set(muted);
    }

    pub fn play_hover(&self) {
        self.system().audio().play_hover();
    }

    pub fn play_click(&self) {
        self.system().audio().play_click();
    }

    /// Cancels every pending store timer.
    fn shutdown(&self) {
        self.system.try_with_value(|store| store.shutdown());
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Accesses the root [`AppContext`].
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext must be provided at root")
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Bridges store events into signals and starts the boot sequence
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    let bridge = StoredValue::new_local(ctx.bridge());
    on_cleanup(move || {
        ctx.shutdown();
        bridge.dispose();
    });

    ctx.system().boot_system();

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #050805;
                    color: #b8f5b8;
                    font-family: 'Courier New', monospace;
                ">
                    <h1 style="color: #ff5f56; margin-bottom: 1rem;">
                        "KERNEL PANIC"
                    </h1>
                    <p style="color: #6f8f6f; margin-bottom: 2rem;">
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <ul style="color: #ff5f56; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: transparent;
                            color: #b8f5b8;
                            border: 1px solid #b8f5b8;
                            padding: 0.75rem 2rem;
                            cursor: pointer;
                            font-family: 'Courier New', monospace;
                        "
                    >
                        "REBOOT"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
