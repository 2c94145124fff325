//! Terminal interaction controller.
//!
//! Owns the input line, command history recall and the auto-scroll policy,
//! and dispatches submitted commands into the [`SystemStore`].

use crate::command::{get_prompt, parse_command, CommandAction, CommandResult};
use crate::config::{terminal::AUTOSCROLL_THRESHOLD_PX, MAX_COMMAND_HISTORY};
use crate::models::{LogType, MountTarget};
use crate::store::SystemStore;

// ============================================================================
// Command History
// ============================================================================

/// Previously submitted commands with an Up/Down recall cursor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandHistory {
    entries: Vec<String>,
    /// Position being recalled; `None` when not recalling.
    cursor: Option<usize>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a submitted command and leaves recall mode.
    ///
    /// Blank commands are not stored.
    pub fn record(&mut self, command: &str) {
        if !command.trim().is_empty() {
            self.entries.push(command.to_string());
            if self.entries.len() > MAX_COMMAND_HISTORY {
                self.entries.remove(0);
            }
        }
        self.cursor = None;
    }

    /// Steps toward older entries, stopping at the oldest.
    pub fn older(&mut self) -> Option<&str> {
        let last = self.entries.len().checked_sub(1)?;
        let index = match self.cursor {
            None => last,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(index);
        self.entries.get(index).map(String::as_str)
    }

    /// Steps toward newer entries. Moving past the newest leaves recall mode
    /// and returns `None`.
    pub fn newer(&mut self) -> Option<&str> {
        let index = self.cursor? + 1;
        if index < self.entries.len() {
            self.cursor = Some(index);
            self.entries.get(index).map(String::as_str)
        } else {
            self.cursor = None;
            None
        }
    }

    pub fn is_recalling(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

// ============================================================================
// Auto-scroll
// ============================================================================

/// Scroll geometry of the log viewport, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn distance_from_bottom(&self) -> f64 {
        (self.scroll_height - self.scroll_top - self.client_height).max(0.0)
    }
}

/// Follows new log lines only while the viewport is parked at the bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoScroll {
    at_bottom: bool,
}

impl Default for AutoScroll {
    fn default() -> Self {
        Self { at_bottom: true }
    }
}

impl AutoScroll {
    /// Updates the policy from a scroll event.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) {
        self.at_bottom = metrics.distance_from_bottom() <= AUTOSCROLL_THRESHOLD_PX;
    }

    pub fn should_follow(&self) -> bool {
        self.at_bottom
    }
}

// ============================================================================
// TerminalController
// ============================================================================

/// Input state of the terminal view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TerminalController {
    input: String,
    history: CommandHistory,
    scroll: AutoScroll,
}

impl TerminalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Up arrow.
    pub fn recall_previous(&mut self) {
        if let Some(command) = self.history.older() {
            self.input = command.to_string();
        }
    }

    /// Down arrow.
    pub fn recall_next(&mut self) {
        if !self.history.is_recalling() {
            return;
        }
        self.input = self.history.newer().map(str::to_string).unwrap_or_default();
    }

    pub fn on_scroll(&mut self, metrics: ScrollMetrics) {
        self.scroll.on_scroll(metrics);
    }

    pub fn should_follow(&self) -> bool {
        self.scroll.should_follow()
    }

    /// Submits the current input line (Enter).
    ///
    /// Returns `None` for blank input, which is ignored entirely.
    pub fn submit(&mut self, store: &SystemStore) -> Option<CommandResult> {
        if self.input.trim().is_empty() {
            return None;
        }
        let line = std::mem::take(&mut self.input);
        Some(self.execute(&line, store))
    }

    /// Clears the log view without recording a command (Ctrl+L).
    pub fn clear_screen(&mut self, store: &SystemStore) {
        store.clear_logs();
    }

    /// Runs `line` as if typed, without touching the input field.
    pub fn execute(&mut self, line: &str, store: &SystemStore) -> CommandResult {
        self.history.record(line);

        let current = store.active_module();
        store.push_log(format!("{} {}", get_prompt(current), line), LogType::Info);

        let result = parse_command(line, current);
        if result.action == CommandAction::Clear {
            store.clear_logs();
            return result;
        }
        if !result.message.is_empty() {
            store.push_log(result.message.clone(), result.kind);
        }

        let audio = store.audio();
        if !result.success {
            audio.play_error();
            return result;
        }
        match result.action {
            CommandAction::Navigate => {
                store.mount_module(MountTarget::from(result.module));
                audio.play_navigate();
            }
            CommandAction::List | CommandAction::Help | CommandAction::Pwd => audio.play_click(),
            CommandAction::Clear | CommandAction::None => {}
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(commands: &[&str]) -> CommandHistory {
        let mut history = CommandHistory::new();
        for c in commands {
            history.record(c);
        }
        history
    }

    #[test]
    fn test_history_skips_blank_keeps_repeats() {
        let history = history_of(&["ls", "", "ls", "pwd", "  ", "ls"]);
        assert_eq!(history.entries(), &["ls", "ls", "pwd", "ls"]);
    }

    #[test]
    fn test_history_older_stops_at_oldest() {
        let mut history = history_of(&["a", "b", "c"]);
        assert_eq!(history.older(), Some("c"));
        assert_eq!(history.older(), Some("b"));
        assert_eq!(history.older(), Some("a"));
        assert_eq!(history.older(), Some("a"));
    }

    #[test]
    fn test_history_newer_exits_recall() {
        let mut history = history_of(&["a", "b"]);
        assert_eq!(history.newer(), None);
        history.older();
        history.older();
        assert_eq!(history.newer(), Some("b"));
        assert_eq!(history.newer(), None);
        assert!(!history.is_recalling());
        assert_eq!(history.entries(), &["a", "b"]);
    }

    #[test]
    fn test_history_empty() {
        let mut history = CommandHistory::new();
        assert_eq!(history.older(), None);
        assert!(!history.is_recalling());
    }

    #[test]
    fn test_history_capped() {
        let mut history = CommandHistory::new();
        for i in 0..(MAX_COMMAND_HISTORY + 5) {
            history.record(&format!("cmd {}", i));
        }
        assert_eq!(history.entries().len(), MAX_COMMAND_HISTORY);
        assert_eq!(history.entries()[0], "cmd 5");
    }

    #[test]
    fn test_controller_recall_round_trip() {
        let mut controller = TerminalController::new();
        controller.history.record("cd projects");
        controller.history.record("ls");
        controller.set_input("draft");

        controller.recall_previous();
        assert_eq!(controller.input(), "ls");
        controller.recall_previous();
        assert_eq!(controller.input(), "cd projects");
        controller.recall_next();
        assert_eq!(controller.input(), "ls");
        controller.recall_next();
        assert_eq!(controller.input(), "");
        controller.recall_next();
        assert_eq!(controller.input(), "");
    }

    #[test]
    fn test_autoscroll_suspends_and_resumes() {
        let mut scroll = AutoScroll::default();
        assert!(scroll.should_follow());

        scroll.on_scroll(ScrollMetrics {
            scroll_top: 100.0,
            scroll_height: 1000.0,
            client_height: 400.0,
        });
        assert!(!scroll.should_follow());

        scroll.on_scroll(ScrollMetrics {
            scroll_top: 560.0,
            scroll_height: 1000.0,
            client_height: 400.0,
        });
        assert!(scroll.should_follow());
    }
}
