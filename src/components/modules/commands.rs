//! SYSTEM_COMMANDS: the command reference.

use hvy_core::config::HELP_TEXT;
use hvy_core::models::LogType;
use leptos::prelude::*;

use super::{css, use_view_logs};

fn help_lines() -> Vec<(String, LogType)> {
    HELP_TEXT
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| (line.to_string(), LogType::Info))
        .collect()
}

#[component]
pub fn SystemCommands() -> impl IntoView {
    use_view_logs(help_lines());

    view! {
        <div class=css::panel>
            <h1 class=css::heading>"SYSTEM_COMMANDS"</h1>
            <pre class=css::manual>{HELP_TEXT}</pre>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lines_skip_blanks() {
        let lines = help_lines();
        assert!(!lines.is_empty());
        assert!(lines.iter().all(|(line, kind)| {
            !line.trim().is_empty() && *kind == LogType::Info
        }));
    }
}
