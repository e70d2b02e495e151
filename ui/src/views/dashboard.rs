use dioxus::logger::tracing::{error, warn};
use dioxus::prelude::*;

use crate::core::chart::{overview_figure, ChartKind};
use crate::core::config::DashboardConfig;
use crate::core::filter::RankingFilter;
use crate::core::table::RankingTable;
use crate::dashboard::{ChartPanel, ExportPanel, FilterControls, KeywordDetailPanel, LoadState};

/// The dashboard page. One linear pipeline, recomputed on every widget
/// change: fetched sheet → schema projection → filter → figure → export
/// payload. The only state that survives an interaction is the widget
/// signals themselves.
#[component]
pub fn Dashboard() -> Element {
    let config = try_use_context::<DashboardConfig>().unwrap_or_default();

    let mut load = use_signal(LoadState::default);
    let mut fetch = {
        let source = config.source.clone();
        let schema = config.schema.clone();
        use_future(move || {
            let source = source.clone();
            let schema = schema.clone();
            async move {
                load.set(LoadState::Loading);
                match api::fetch_table(&source).await {
                    Ok(table) => {
                        // Log schema drift once per fetch, not per render.
                        match schema.resolve(&table.headers) {
                            Ok(resolved) => {
                                for label in &resolved.missing {
                                    warn!("declared rank column \"{label}\" is missing from the sheet");
                                }
                            }
                            Err(err) => error!("sheet schema mismatch: {err}"),
                        }
                        load.set(LoadState::Ready(table));
                    }
                    Err(err) => {
                        error!("sheet fetch failed: {err}");
                        load.set(LoadState::Failed(err.to_string()));
                    }
                }
            }
        })
    };

    let query = use_signal(String::new);
    let category = use_signal(|| Option::<String>::None);
    let chart_kind = use_signal(|| ChartKind::Bar);
    let detail_keyword = use_signal(|| Option::<String>::None);

    let body = match load() {
        LoadState::Loading => rsx! {
            section { class: "dashboard-status",
                p { "Loading ranking data…" }
            }
        },
        LoadState::Failed(message) => rsx! {
            section { class: "dashboard-status dashboard-status--error",
                p { "Couldn't load the ranking sheet: {message}" }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| fetch.restart(),
                    "Reload"
                }
            }
        },
        LoadState::Ready(sheet) => match config.schema.resolve(&sheet.headers) {
            Err(err) => rsx! {
                section { class: "dashboard-status dashboard-status--error",
                    p { "{err}" }
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: move |_| fetch.restart(),
                        "Reload"
                    }
                }
            },
            Ok(resolved) => {
                let projected = RankingTable::project(&sheet, &resolved);
                let categories = projected.categories();
                let filter = RankingFilter {
                    query: query(),
                    category: category(),
                };
                let filtered = filter.apply(&projected);
                let heading = match category() {
                    Some(name) => format!("Rankings for {name}"),
                    None => "Rankings for all categories".to_string(),
                };
                let figure = overview_figure(&filtered, chart_kind());

                rsx! {
                    FilterControls { categories, query, category, chart_kind }
                    ChartPanel { heading, figure, missing: resolved.missing.clone() }
                    KeywordDetailPanel { table: filtered.clone(), selected: detail_keyword }
                    ExportPanel { table: filtered }
                }
            }
        },
    };

    rsx! {
        section { class: "page page-dashboard",
            h1 { "Keyword Rankings" }
            p { class: "page-dashboard__intro",
                "Search-engine positions per keyword across the tracked dates. "
                "Filter, chart, inspect a single keyword, or take the table with you as CSV."
            }
            {body}
        }
    }
}
