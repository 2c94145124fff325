//! Typing reveal for new log lines.
//!
//! Each line is typed out once, the first time the terminal renders it.
//! Lines that were already in the buffer when the terminal mounted, and lines
//! re-rendered later, appear in full.

use std::collections::HashSet;

use gloo_timers::callback::Interval;
use hvy_core::models::LogId;
use leptos::prelude::*;

use crate::config::terminal::REVEAL_CHAR_MS;

/// Remembers which log lines have already been revealed.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    seen: HashSet<LogId>,
}

impl RevealTracker {
    /// Treats `ids` as already revealed.
    pub fn seeded(ids: impl IntoIterator<Item = LogId>) -> Self {
        Self {
            seen: ids.into_iter().collect(),
        }
    }

    /// Marks `id` revealed, returning `true` only the first time.
    pub fn claim(&mut self, id: LogId) -> bool {
        self.seen.insert(id)
    }

    /// Forgets ids no longer in the buffer.
    pub fn retain(&mut self, live: impl IntoIterator<Item = LogId>) {
        let live: HashSet<LogId> = live.into_iter().collect();
        self.seen.retain(|id| live.contains(id));
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }
}

/// Text that grows one character every [`REVEAL_CHAR_MS`] until complete.
///
/// With `animate` false the full text is returned immediately.
pub fn use_typed_text(text: String, animate: bool) -> Signal<String> {
    let total = text.chars().count();
    if !animate || total == 0 {
        return Signal::stored(text);
    }

    let shown = RwSignal::new(0usize);
    let interval = Interval::new(REVEAL_CHAR_MS, move || {
        shown.try_update(|n| *n = (*n + 1).min(total));
    });
    // Dropped with the line's view, or as soon as the text is complete.
    let timer = StoredValue::new_local(Some(interval));
    Effect::new(move || {
        if shown.get() >= total {
            timer.try_set_value(None);
        }
    });

    Signal::derive(move || text.chars().take(shown.get()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hvy_core::models::{LogEntry, LogType};

    fn ids(n: usize) -> Vec<LogId> {
        (0..n)
            .map(|i| LogEntry::new("00:00:00", format!("line {}", i), LogType::Info).id)
            .collect()
    }

    #[test]
    fn test_claim_only_once() {
        let ids = ids(2);
        let (a, b) = (ids[0], ids[1]);
        let mut tracker = RevealTracker::default();
        assert!(tracker.claim(a));
        assert!(!tracker.claim(a));
        assert!(tracker.claim(b));
    }

    #[test]
    fn test_seeded_lines_render_statically() {
        let existing = ids(3);
        let mut tracker = RevealTracker::seeded(existing.clone());
        for id in existing {
            assert!(!tracker.claim(id));
        }
        assert!(tracker.claim(ids(1)[0]));
    }

    #[test]
    fn test_retain_drops_evicted_ids() {
        let all = ids(4);
        let mut tracker = RevealTracker::seeded(all.clone());
        tracker.retain(all[2..].iter().copied());
        assert_eq!(tracker.len(), 2);
        assert!(!tracker.claim(all[3]));
    }
}
