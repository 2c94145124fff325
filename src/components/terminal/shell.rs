//! Main shell component.
//!
//! Lays out the status bar, the module viewport and the terminal, and
//! provides the global CRT effects.

use hvy_core::models::LifecycleState;
use leptos::prelude::*;

use super::boot::BootScreen;
use super::terminal::Terminal;
use crate::app::use_app;
use crate::components::modules::{ModuleNav, ModuleView};
use crate::components::status::Status;

stylance::import_crate_style!(css, "src/components/terminal/shell.module.css");

/// Shell component.
///
/// - Shows the boot splash in the viewport until BOOT ends
/// - Renders the module view for the active module
/// - Unlocks audio on the first pointer or key press
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_app();

    let booting = Memo::new(move |_| ctx.lifecycle.get() == LifecycleState::Boot);

    view! {
        <div
            class=css::screen
            on:pointerdown=move |_| ctx.start_audio()
            on:keydown=move |_| ctx.start_audio()
        >
            <div class=css::crtOverlay></div>
            <div class=css::scanline></div>

            <Status />

            <div class=css::main>
                <nav class=css::nav>
                    <ModuleNav />
                </nav>
                <section class=css::viewport>
                    <Show when=move || !booting.get() fallback=|| view! { <BootScreen /> }>
                        <ModuleView />
                    </Show>
                </section>
                <aside class=css::console>
                    <Terminal />
                </aside>
            </div>
        </div>
    }
}
