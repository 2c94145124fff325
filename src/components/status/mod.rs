//! Status bar component.
//!
//! Displays the lifecycle state and current location, and hosts the audio
//! mute toggle.

use hvy_core::command::location;
use hvy_core::models::LifecycleState;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::use_app;
use crate::components::icons as ic;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/status/status.module.css");

fn lifecycle_class(state: LifecycleState) -> &'static str {
    match state {
        LifecycleState::Boot | LifecycleState::LoadingModule => css::valueBusy,
        LifecycleState::Idle | LifecycleState::ActiveModule => css::valueOk,
        LifecycleState::Error => css::valueError,
    }
}

/// Status bar displaying lifecycle, location and audio state.
///
/// ## Responsive behavior
///
/// | Breakpoint | Display |
/// |------------|---------|
/// | Desktop (> 768px) | Full labels: `State: IDLE \| Location: ~/projects` |
/// | Mobile (< 768px) | Icons and values only |
#[component]
pub fn Status() -> impl IntoView {
    let ctx = use_app();

    let state_label = Signal::derive(move || ctx.lifecycle.get().as_str());
    let display_path = Signal::derive(move || location(ctx.active_module.get()));

    let toggle_mute = move |_: leptos::ev::MouseEvent| {
        ctx.start_audio();
        ctx.toggle_mute();
    };
    let toggle_title = Signal::derive(move || {
        if ctx.muted.get() {
            "Unmute interface sounds"
        } else {
            "Mute interface sounds"
        }
    });

    view! {
        <header class=css::bar>
            <div class=css::section>
                <span class=css::brand>{APP_NAME}</span>

                <span class=css::label>
                    <span class=css::labelText>"State:"</span>
                    <span class=css::labelIcon><Icon icon=ic::LIFECYCLE /></span>
                    <span class=move || lifecycle_class(ctx.lifecycle.get())>{state_label}</span>
                </span>

                <span class=css::labelCyan>
                    <span class=css::labelText>"Location:"</span>
                    <span class=css::labelIcon><Icon icon=ic::LOCATION /></span>
                    <span class=css::value>{display_path}</span>
                </span>
            </div>

            <button
                class=css::toggleButton
                on:click=toggle_mute
                title=toggle_title
            >
                {move || if ctx.muted.get() {
                    view! { <Icon icon=ic::SOUND_OFF /> }.into_any()
                } else {
                    view! { <Icon icon=ic::SOUND_ON /> }.into_any()
                }}
            </button>
        </header>
    }
}
