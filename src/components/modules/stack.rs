//! STACK: tools grouped by category.

use hvy_core::models::{LogType, StackGroup};
use leptos::prelude::*;

use super::{css, use_view_logs};
use crate::app::use_app;

/// `Loaded <n> packages from <category>` per group.
fn load_lines(groups: &[StackGroup]) -> Vec<(String, LogType)> {
    groups
        .iter()
        .map(|g| {
            (
                format!("Loaded {} packages from {}", g.items.len(), g.category),
                LogType::Info,
            )
        })
        .collect()
}

#[component]
pub fn Stack() -> impl IntoView {
    let ctx = use_app();
    let groups = ctx.portfolio.with_value(|p| p.stack.clone());
    use_view_logs(load_lines(&groups));

    view! {
        <div class=css::panel>
            <h1 class=css::heading>"STACK"</h1>
            {groups
                .into_iter()
                .map(|group| view! {
                    <section class=css::group>
                        <h2 class=css::dim>{format!("/{}", group.category)}</h2>
                        <div class=css::chips>
                            {group
                                .items
                                .into_iter()
                                .map(|item| view! { <span class=css::chip>{item}</span> })
                                .collect_view()}
                        </div>
                    </section>
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_lines() {
        let groups = vec![
            StackGroup {
                category: "languages".to_string(),
                items: vec!["rust".to_string(), "go".to_string()],
            },
            StackGroup {
                category: "tooling".to_string(),
                items: vec![],
            },
        ];
        assert_eq!(
            load_lines(&groups),
            vec![
                ("Loaded 2 packages from languages".to_string(), LogType::Info),
                ("Loaded 0 packages from tooling".to_string(), LogType::Info),
            ]
        );
    }
}
