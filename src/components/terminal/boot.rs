//! Boot splash shown in the module viewport until the system leaves BOOT.

use hvy_core::config::boot::SEQUENCE;
use leptos::prelude::*;

use crate::app::use_app;
use crate::config::{APP_NAME, APP_VERSION};

stylance::import_crate_style!(css, "src/components/terminal/boot.module.css");

#[component]
pub fn BootScreen() -> impl IntoView {
    let ctx = use_app();

    let steps = SEQUENCE.len();
    let done = Signal::derive(move || ctx.logs.with(|logs| logs.len()).min(steps));
    let width = move || format!("width: {}%", done.get() * 100 / steps);
    let status = move || {
        ctx.logs
            .with(|logs| logs.last().map(|e| e.message.clone()))
            .unwrap_or_else(|| "POWER_ON".to_string())
    };

    view! {
        <div class=css::splash>
            <pre class=format!("{} glow", css::title)>{APP_NAME}</pre>
            <span class=css::version>{format!("kernel v{}", APP_VERSION)}</span>
            <div class=css::track>
                <div class=css::bar style=width></div>
            </div>
            <span class=css::status>{status}</span>
        </div>
    }
}
