//! Store change notifications.

use std::rc::Weak;

use crate::models::{LifecycleState, LogEntry, ModuleId};

use super::StoreInner;

/// A change observers are told about, emitted after the mutation completes.
#[derive(Clone, Debug, PartialEq)]
pub enum StoreEvent {
    LogAppended(LogEntry),
    LogsCleared,
    ModuleChanged(Option<ModuleId>),
    LifecycleChanged(LifecycleState),
    /// The module whose mount is in flight, or `None` once it settles.
    LoadingChanged(Option<ModuleId>),
}

pub(super) type Observer = std::rc::Rc<dyn Fn(&StoreEvent)>;

/// Registration returned by [`SystemStore::subscribe`](super::SystemStore::subscribe).
///
/// The observer stays registered until this value is dropped.
#[must_use = "dropping a Subscription unregisters the observer"]
pub struct Subscription {
    pub(super) store: Weak<StoreInner>,
    pub(super) id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(inner) = self.store.upgrade() else {
            return;
        };
        let removed = {
            let mut observers = inner.observers.borrow_mut();
            observers
                .iter()
                .position(|(id, _)| *id == self.id)
                .map(|index| observers.remove(index))
        };
        drop(removed);
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
