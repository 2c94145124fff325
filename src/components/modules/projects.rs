//! PROJECTS: every portfolio project.

use leptos::prelude::*;

use super::css;
use crate::app::use_app;

#[component]
pub fn Projects() -> impl IntoView {
    let ctx = use_app();
    let projects = ctx.portfolio.with_value(|p| p.projects.clone());

    view! {
        <div class=css::panel>
            <h1 class=css::heading>"PROJECTS"</h1>
            <ul class=css::cards>
                {projects
                    .into_iter()
                    .map(|project| view! {
                        <li class=css::card on:mouseenter=move |_| ctx.play_hover()>
                            <h2>
                                {project.name}
                                {project.featured.then(|| view! { <span class=css::tag>"FEATURED"</span> })}
                            </h2>
                            <p>{project.tagline}</p>
                            <div class=css::chips>
                                {project
                                    .stack
                                    .into_iter()
                                    .map(|item| view! { <span class=css::chip>{item}</span> })
                                    .collect_view()}
                            </div>
                            {project.url.map(|url| view! {
                                <a class=css::link href=url target="_blank" rel="noopener noreferrer">
                                    "source ->"
                                </a>
                            })}
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
