//! Terminal view component.
//!
//! The system log with its typing reveal, auto-scroll and the command line.

use hvy_core::command::get_prompt;
use hvy_core::ScrollMetrics;
use leptos::prelude::*;
use leptos_use::use_media_query;

use super::reveal::RevealTracker;
use crate::app::{use_app, AppContext};
use crate::components::terminal::{Input, Output};
use crate::config::REDUCED_MOTION_QUERY;
use crate::utils::dom::focus_terminal_input;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

// ============================================================================
// Effect Setup Functions
// ============================================================================

/// Scroll to the newest line while the user is parked at the bottom.
fn setup_autoscroll_effect(ctx: AppContext, output_ref: NodeRef<leptos::html::Div>) {
    Effect::new(move || {
        ctx.logs.track();
        if ctx.terminal.should_follow()
            && let Some(el) = output_ref.get()
        {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

/// Keep the reveal tracker in step with evictions from the log buffer.
fn setup_reveal_pruning(ctx: AppContext, tracker: StoredValue<RevealTracker>) {
    Effect::new(move || {
        ctx.logs.with(|logs| {
            tracker.update_value(|t| t.retain(logs.iter().map(|e| e.id)));
        });
    });
}

// ============================================================================
// Terminal Component
// ============================================================================

#[component]
pub fn Terminal() -> impl IntoView {
    let ctx = use_app();
    let output_ref = NodeRef::<leptos::html::Div>::new();

    // Lines already in the buffer render without the reveal.
    let tracker = StoredValue::new(RevealTracker::seeded(
        ctx.logs.with_untracked(|logs| logs.iter().map(|e| e.id).collect::<Vec<_>>()),
    ));
    let reduced_motion = use_media_query(REDUCED_MOTION_QUERY);

    setup_autoscroll_effect(ctx, output_ref);
    setup_reveal_pruning(ctx, tracker);

    // Derived signals
    let prompt = Signal::derive(move || get_prompt(ctx.active_module.get()));
    let value = Signal::derive(move || ctx.terminal.input());

    // Callbacks
    let on_input = Callback::new(move |value: String| ctx.terminal.set_input(value));
    let on_submit = Callback::new(move |_: ()| {
        ctx.start_audio();
        ctx.submit();
    });
    let on_history_nav = Callback::new(move |direction: i32| {
        ctx.terminal.controller.update(|c| {
            if direction < 0 {
                c.recall_previous();
            } else {
                c.recall_next();
            }
        });
    });
    let on_clear_screen = Callback::new(move |_: ()| ctx.clear_screen());

    let on_scroll = move |_| {
        if let Some(el) = output_ref.get_untracked() {
            let metrics = ScrollMetrics {
                scroll_top: el.scroll_top() as f64,
                scroll_height: el.scroll_height() as f64,
                client_height: el.client_height() as f64,
            };
            ctx.terminal
                .controller
                .update_untracked(|c| c.on_scroll(metrics));
        }
    };

    let handle_click = move |_| focus_terminal_input();

    view! {
        <div class=css::container on:click=handle_click>
            <div node_ref=output_ref class=css::output on:scroll=on_scroll>
                <For
                    each=move || ctx.logs.with(|logs| logs.to_vec())
                    key=|entry| entry.id
                    children=move |entry| {
                        let fresh = tracker
                            .try_update_value(|t| t.claim(entry.id))
                            .unwrap_or(false);
                        let animate = fresh && !reduced_motion.get_untracked();
                        view! { <Output entry=entry animate=animate /> }
                    }
                />
            </div>

            <div class=css::inputArea>
                <Input
                    prompt=prompt
                    value=value
                    on_input=on_input
                    on_submit=on_submit
                    on_history_nav=on_history_nav
                    on_clear_screen=on_clear_screen
                />
            </div>
        </div>
    }
}
