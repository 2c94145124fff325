//! Terminal command line with history navigation.

use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use crate::config::INPUT_PLACEHOLDER;

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// Terminal input field.
///
/// Keys: Enter submits, ArrowUp/ArrowDown recall history, Ctrl+L clears the
/// log and Ctrl+C discards the current line.
#[component]
pub fn Input(
    #[prop(into)] prompt: Signal<String>,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    on_submit: Callback<()>,
    on_history_nav: Callback<i32>,
    on_clear_screen: Callback<()>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    // Helper to move cursor to end of input
    let move_cursor_to_end = move || {
        if let Some(input) = input_ref.get() {
            let len = input.value().len() as u32;
            let _ = input.set_selection_range(len, len);
        }
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            on_submit.run(());
        }
        "ArrowUp" => {
            ev.prevent_default();
            on_history_nav.run(-1);
            move_cursor_to_end();
        }
        "ArrowDown" => {
            ev.prevent_default();
            on_history_nav.run(1);
            move_cursor_to_end();
        }
        "c" if ev.ctrl_key() => {
            on_input.run(String::new());
        }
        "l" if ev.ctrl_key() => {
            ev.prevent_default();
            on_clear_screen.run(());
        }
        _ => {}
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        on_input.run(input.value());
    };

    view! {
        <div class=css::line>
            <span class=format!("{} glow", css::prompt)>{prompt}</span>
            <input
                node_ref=input_ref
                type="text"
                class=css::input
                data-terminal=""
                placeholder=INPUT_PLACEHOLDER
                autocomplete="off"
                spellcheck="false"
                prop:value=value
                on:input=handle_input
                on:keydown=handle_keydown
            />
        </div>
    }
}
