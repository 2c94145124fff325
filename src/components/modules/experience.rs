//! EXPERIENCE: work, research and education records.

use hvy_core::models::{Experience as Record, ExperienceKind, LogType};
use leptos::prelude::*;

use super::{css, use_view_logs};
use crate::app::use_app;

fn kind_label(kind: ExperienceKind) -> &'static str {
    match kind {
        ExperienceKind::Work => "WORK",
        ExperienceKind::Research => "RESEARCH",
        ExperienceKind::Education => "EDUCATION",
    }
}

/// `[<period>] <role> @ <company>` per record.
fn record_lines(records: &[Record]) -> Vec<(String, LogType)> {
    records
        .iter()
        .map(|r| {
            (
                format!("[{}] {} @ {}", r.period, r.role, r.company),
                LogType::Info,
            )
        })
        .collect()
}

#[component]
pub fn Experience() -> impl IntoView {
    let ctx = use_app();
    let records = ctx.portfolio.with_value(|p| p.experience.clone());
    use_view_logs(record_lines(&records));

    view! {
        <div class=css::panel>
            <h1 class=css::heading>"EXPERIENCE"</h1>
            <ol class=css::timeline>
                {records
                    .into_iter()
                    .map(|record| view! {
                        <li class=css::card>
                            <span class=css::tag>{kind_label(record.kind)}</span>
                            <h2>{record.role}</h2>
                            <p class=css::dim>{format!("{} | {}", record.company, record.period)}</p>
                            <ul>
                                {record
                                    .details
                                    .into_iter()
                                    .map(|line| view! { <li>{line}</li> })
                                    .collect_view()}
                            </ul>
                        </li>
                    })
                    .collect_view()}
            </ol>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hvy_core::models::Portfolio;

    #[test]
    fn test_record_lines_from_content() {
        let portfolio = Portfolio::from_toml(
            r#"
            [[experience]]
            id = "a"
            role = "Backend Engineer"
            company = "Acme"
            period = "2023 - present"
            type = "work"
        "#,
        )
        .unwrap();
        assert_eq!(
            record_lines(&portfolio.experience),
            vec![(
                "[2023 - present] Backend Engineer @ Acme".to_string(),
                LogType::Info
            )]
        );
    }
}
