//! Content views, one per mountable module.
//!
//! The viewport shows the overview at the root, a loading panel while a
//! mount is in flight, and the active module's view otherwise. Views that
//! narrate their content schedule log lines through [`use_view_logs`]; the
//! lines still pending are cancelled when the view unmounts.

mod access;
mod commands;
mod experience;
mod healiora;
mod nav;
mod overview;
mod projects;
mod stack;

pub use nav::ModuleNav;

use hvy_core::models::{LifecycleState, LogType, ModuleId};
use hvy_core::ScheduledLog;
use leptos::prelude::*;

use crate::app::use_app;
use crate::config::VIEW_LOG_STAGGER_MS;

stylance::import_crate_style!(css, "src/components/modules/modules.module.css");

/// Pushes `lines` one [`VIEW_LOG_STAGGER_MS`] apart while the calling view
/// stays mounted.
fn use_view_logs(lines: Vec<(String, LogType)>) {
    if lines.is_empty() {
        return;
    }
    let ctx = use_app();
    let schedule = ctx
        .system()
        .schedule_logs(ScheduledLog::staggered(VIEW_LOG_STAGGER_MS, lines));
    // Owned by the view; disposing it drops the schedule.
    let _ = StoredValue::new_local(schedule);
}

#[component]
pub fn ModuleView() -> impl IntoView {
    let ctx = use_app();

    move || match ctx.active_module.get() {
        Some(ModuleId::Projects) => view! { <projects::Projects /> }.into_any(),
        Some(ModuleId::Stack) => view! { <stack::Stack /> }.into_any(),
        Some(ModuleId::Experience) => view! { <experience::Experience /> }.into_any(),
        Some(ModuleId::SystemCommands) => view! { <commands::SystemCommands /> }.into_any(),
        Some(ModuleId::Healiora) => view! { <healiora::Healiora /> }.into_any(),
        Some(ModuleId::Access) => view! { <access::Access /> }.into_any(),
        None if ctx.lifecycle.get() == LifecycleState::LoadingModule => {
            view! { <Loading /> }.into_any()
        }
        None => view! { <overview::Overview /> }.into_any(),
    }
}

/// Placeholder while a mount is in flight.
#[component]
fn Loading() -> impl IntoView {
    let ctx = use_app();

    let target = move || {
        ctx.loading
            .get()
            .map(|id| id.to_string())
            .unwrap_or_default()
    };

    view! {
        <div class=css::loading>
            <span class=css::heading>"MOUNTING " {target}</span>
            <div class=css::loadingTrack>
                <div class=css::loadingBar></div>
            </div>
        </div>
    }
}
