//! Module navigation list.

use hvy_core::models::{ModuleId, MountTarget};
use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use crate::app::use_app;
use crate::components::icons as ic;

/// Buttons mounting each module, plus a return to the overview.
#[component]
pub fn ModuleNav() -> impl IntoView {
    let ctx = use_app();

    let item_class = move |target: Option<ModuleId>| {
        move || {
            if ctx.active_module.get() == target {
                format!("{} {}", css::navItem, css::navItemActive)
            } else {
                css::navItem.to_string()
            }
        }
    };

    let select = move |target: MountTarget| {
        ctx.play_click();
        ctx.mount(target);
    };

    view! {
        <ul class=css::navList>
            <li>
                <button
                    class=item_class(None)
                    on:mouseenter=move |_| ctx.play_hover()
                    on:click=move |_| select(MountTarget::Root)
                >
                    <Icon icon=ic::HOME />
                    <span>"~"</span>
                </button>
            </li>
            {ModuleId::ALL
                .into_iter()
                .map(|id| {
                    view! {
                        <li>
                            <button
                                class=item_class(Some(id))
                                on:mouseenter=move |_| ctx.play_hover()
                                on:click=move |_| select(MountTarget::Module(id))
                            >
                                <Icon icon=ic::module(id) />
                                <span>{id.dir_name()}</span>
                            </button>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
