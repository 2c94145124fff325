//! HEALIORA: the featured project.

use leptos::prelude::*;

use super::css;
use crate::app::use_app;

#[component]
pub fn Healiora() -> impl IntoView {
    let ctx = use_app();
    let project = ctx.portfolio.with_value(|p| p.featured_project().cloned());

    let Some(project) = project else {
        return view! {
            <div class=css::panel>
                <h1 class=css::heading>"HEALIORA"</h1>
                <p class=css::dim>"No featured project on record."</p>
            </div>
        }
        .into_any();
    };

    view! {
        <div class=format!("{} {}", css::panel, css::primary)>
            <span class=css::tag>"PRIMARY_NODE"</span>
            <h1 class=format!("{} glow", css::heading)>{project.name}</h1>
            <p class=css::lead>{project.tagline}</p>
            <div class=css::chips>
                {project
                    .stack
                    .into_iter()
                    .map(|item| view! { <span class=css::chip>{item}</span> })
                    .collect_view()}
            </div>
            {project.url.map(|url| view! {
                <a class=css::link href=url target="_blank" rel="noopener noreferrer">
                    "open repository ->"
                </a>
            })}
        </div>
    }
    .into_any()
}
