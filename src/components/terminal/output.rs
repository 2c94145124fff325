use hvy_core::models::{LogEntry, LogType};
use leptos::prelude::*;

use super::reveal::use_typed_text;

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

/// Get CSS class for a log type
fn kind_class(kind: LogType) -> &'static str {
    match kind {
        LogType::Info => css::textFg,
        LogType::Warning => css::textYellow,
        LogType::Error => css::textRed,
        LogType::Success => css::textGreen,
        LogType::System => css::textCyan,
    }
}

#[component]
pub fn Output(entry: LogEntry, animate: bool) -> impl IntoView {
    let text = use_typed_text(entry.message, animate);

    view! {
        <div class=css::line data-kind=entry.kind.as_str()>
            <span class=css::timestamp>{format!("[{}]", entry.timestamp)}</span>
            <span class=kind_class(entry.kind)>{text}</span>
        </div>
    }
}
