//! Application router component.
//!
//! Handles URL-based routing with hash history. Uses native hashchange
//! events; the [`SystemStore`](hvy_core::SystemStore) stays the source of
//! truth for what is mounted.
//!
//! # Architecture
//!
//! - **hash → store**: `#/<module>` requests a mount once boot has finished
//! - **store → hash**: settled navigation replaces the hash without adding
//!   a history entry
//! - **hashchange events**: browser back/forward buttons work automatically

use hvy_core::models::LifecycleState;
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::use_app;
use crate::components::terminal::Shell;
use crate::models::Route;

/// Main application router.
///
/// - `#/` → system overview
/// - `#/<module>` → mount that module (e.g. `#/projects`)
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_app();

    // Create route signal from current URL hash
    let route = RwSignal::new(Route::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(Route::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let booted = Memo::new(move |_| ctx.lifecycle.get() != LifecycleState::Boot);

    // Mount requested routes. Finishing boot only mounts a deep link, so a
    // module opened from the terminal during boot is not reset.
    Effect::new(move |was_booted: Option<bool>| {
        let route = route.get();
        let booted = booted.get();
        if booted && (was_booted == Some(true) || route != Route::Home) {
            log::debug!("route {:?} requested", route);
            ctx.mount(route);
        }
        booted
    });

    // Reflect settled navigation in the URL.
    Effect::new(move || {
        let lifecycle = ctx.lifecycle.get();
        let active = ctx.active_module.get();
        if matches!(lifecycle, LifecycleState::Idle | LifecycleState::ActiveModule) {
            Route::from(active).replace();
        }
    });

    view! { <Shell /> }
}
