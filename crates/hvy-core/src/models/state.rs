//! System lifecycle and state snapshot types.

use std::fmt;

use super::{LogEntry, ModuleId};

/// Lifecycle of the shell session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LifecycleState {
    #[default]
    Boot,
    Idle,
    LoadingModule,
    ActiveModule,
    /// Declared for completeness; no transition enters it.
    Error,
}

impl LifecycleState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boot => "BOOT",
            Self::Idle => "IDLE",
            Self::LoadingModule => "LOADING_MODULE",
            Self::ActiveModule => "ACTIVE_MODULE",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-in-time copy of the store, for rendering and assertions.
#[derive(Clone, Debug, PartialEq)]
pub struct SystemSnapshot {
    pub lifecycle: LifecycleState,
    pub active_module: Option<ModuleId>,
    pub loading_module: Option<ModuleId>,
    pub logs: Vec<LogEntry>,
}
