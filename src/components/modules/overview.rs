//! SYSTEM_OVERVIEW: the root view.

use hvy_core::models::ModuleId;
use leptos::prelude::*;

use super::css;
use crate::app::use_app;

#[component]
pub fn Overview() -> impl IntoView {
    let ctx = use_app();

    let featured = ctx
        .portfolio
        .with_value(|p| p.featured_project().map(|f| (f.name.clone(), f.tagline.clone())));
    let project_count = ctx.portfolio.with_value(|p| p.projects.len());
    let package_count = ctx.portfolio.with_value(|p| p.package_count());

    view! {
        <div class=css::panel>
            <h1 class=format!("{} glow", css::heading)>"SYSTEM_OVERVIEW"</h1>
            <p class=css::dim>
                "Type " <code>"help"</code> " in the terminal or pick a module. "
                {format!("{} modules online.", ModuleId::ALL.len())}
            </p>

            {featured.map(|(name, tagline)| view! {
                <div class=css::card>
                    <span class=css::tag>"FEATURED"</span>
                    <h2>{name}</h2>
                    <p>{tagline}</p>
                    <button
                        class=css::action
                        on:click=move |_| {
                            ctx.play_click();
                            ctx.mount(ModuleId::Healiora);
                        }
                    >
                        "cd healiora"
                    </button>
                </div>
            })}

            <dl class=css::stats>
                <dt>"projects"</dt>
                <dd>{project_count}</dd>
                <dt>"packages"</dt>
                <dd>{package_count}</dd>
            </dl>
        </div>
    }
}
