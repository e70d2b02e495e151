use dioxus::prelude::*;

use crate::core::chart::detail_figure;
use crate::core::format;
use crate::core::svg::render_svg;
use crate::core::table::RankingTable;

/// Detail card for one keyword: a dropdown over the filtered keywords and,
/// once one is chosen, its rank on every tracked date as grouped bars plus a
/// small textual grid. Bars regardless of the main chart type.
#[component]
pub fn KeywordDetailPanel(table: RankingTable, mut selected: Signal<Option<String>>) -> Element {
    let keywords = table.keywords();
    // A keyword filtered away since it was picked is treated as no selection.
    let current = selected().filter(|keyword| keywords.contains(keyword));
    let current_value = current.clone().unwrap_or_default();

    rsx! {
        section { class: "dashboard-card dashboard-detail",
            div { class: "dashboard-card__header",
                h2 { "Keyword detail" }
                if let Some(keyword) = current.as_ref() {
                    span { class: "dashboard-card__meta", "{keyword}" }
                }
            }

            if keywords.is_empty() {
                p { class: "dashboard-card__placeholder",
                    "Nothing to inspect until some keywords match the filters."
                }
            } else {
                div { class: "dashboard-detail__picker",
                    label { r#for: "keyword-select", "Keyword" }
                    select {
                        id: "keyword-select",
                        value: "{current_value}",
                        oninput: move |evt| {
                            let value = evt.value();
                            selected.set(if value.is_empty() { None } else { Some(value) });
                        },
                        option { value: "", "Select a keyword…" }
                        for keyword in keywords.iter() {
                            option {
                                key: "{keyword}",
                                value: "{keyword}",
                                selected: *keyword == current_value,
                                "{keyword}"
                            }
                        }
                    }
                }

                match current.as_ref() {
                    Some(keyword) => render_history(&table, keyword),
                    None => rsx! {
                        p { class: "dashboard-card__placeholder",
                            "Pick a keyword to see its ranking history."
                        }
                    },
                }
            }
        }
    }
}

fn render_history(table: &RankingTable, keyword: &str) -> Element {
    let Some(figure) = detail_figure(table, keyword) else {
        return rsx! {
            p { class: "dashboard-card__placeholder",
                "Pick a keyword to see its ranking history."
            }
        };
    };
    let markup = render_svg(&figure, 640, 320);
    let record = table.record_for(keyword);

    rsx! {
        div { class: "dashboard-chart__canvas dashboard-detail__canvas",
            dangerous_inner_html: "{markup}",
        }
        if let Some(record) = record {
            ul { class: "dashboard-detail__grid",
                for (label, rank) in table.columns.iter().zip(record.ranks.iter()) {
                    li { key: "{label}",
                        span { class: "dashboard-detail__metric-label", "{label}" }
                        span { class: "dashboard-detail__metric-value",
                            {format::format_rank(*rank)}
                        }
                    }
                }
            }
        }
    }
}
