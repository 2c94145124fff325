//! ACCESS: contact form posting to the relay.

use hvy_core::models::{ContactRequest, LogType};
use leptos::{ev, prelude::*};
use wasm_bindgen_futures::spawn_local;

use super::css;
use crate::app::use_app;
use crate::utils::send_contact;

#[derive(Clone, Debug, PartialEq)]
enum FormStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

#[component]
pub fn Access() -> impl IntoView {
    let ctx = use_app();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::Idle);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() == FormStatus::Sending {
            return;
        }

        let request = ContactRequest::new(
            name.get_untracked(),
            email.get_untracked(),
            message.get_untracked(),
        );
        if let Err(e) = request.validate() {
            ctx.push_log(format!("Transmission failed: {}", e), LogType::Error);
            status.set(FormStatus::Failed(e.to_string()));
            return;
        }

        ctx.play_click();
        status.set(FormStatus::Sending);
        ctx.push_log("Transmitting message...", LogType::System);

        spawn_local(async move {
            match send_contact(&request).await {
                Ok(()) => {
                    ctx.push_log("Message delivered.", LogType::Success);
                    status.try_set(FormStatus::Sent);
                    for field in [name, email, message] {
                        field.try_set(String::new());
                    }
                }
                Err(e) => {
                    log::warn!("contact relay failed: {}", e);
                    ctx.push_log(format!("Transmission failed: {}", e), LogType::Error);
                    status.try_set(FormStatus::Failed(e.to_string()));
                }
            }
        });
    };

    let status_view = move || match status.get() {
        FormStatus::Idle => None,
        FormStatus::Sending => Some(view! { <p class=css::dim>"TRANSMITTING..."</p> }.into_any()),
        FormStatus::Sent => Some(view! { <p class=css::ok>"MESSAGE DELIVERED"</p> }.into_any()),
        FormStatus::Failed(reason) => {
            Some(view! { <p class=css::error>{format!("ERROR: {}", reason)}</p> }.into_any())
        }
    };

    view! {
        <div class=css::panel>
            <h1 class=css::heading>"ACCESS"</h1>
            <p class=css::dim>"Open a channel. All fields are required."</p>
            <form class=css::form on:submit=on_submit>
                <label>
                    "name"
                    <input
                        type="text"
                        prop:value=name
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "email"
                    <input
                        type="email"
                        prop:value=email
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "message"
                    <textarea
                        rows="5"
                        prop:value=message
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button
                    type="submit"
                    class=css::action
                    disabled=move || status.get() == FormStatus::Sending
                >
                    "transmit"
                </button>
            </form>
            {status_view}
        </div>
    }
}
