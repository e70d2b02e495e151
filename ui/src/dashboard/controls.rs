use dioxus::prelude::*;

use crate::core::chart::ChartKind;

/// The three filter widgets: category dropdown, keyword search box, chart
/// type dropdown. State lives in the caller's signals; every change simply
/// re-renders the page from current values.
#[component]
pub fn FilterControls(
    categories: Vec<String>,
    mut query: Signal<String>,
    mut category: Signal<Option<String>>,
    mut chart_kind: Signal<ChartKind>,
) -> Element {
    let current_category = category().unwrap_or_default();
    let current_kind = chart_kind();

    rsx! {
        section { class: "dashboard-card dashboard-controls",
            div { class: "dashboard-controls__field",
                label { r#for: "category-select", "Category" }
                select {
                    id: "category-select",
                    value: "{current_category}",
                    oninput: move |evt| {
                        let value = evt.value();
                        category.set(if value.is_empty() { None } else { Some(value) });
                    },
                    option { value: "", "All categories" }
                    for name in categories.iter() {
                        option {
                            key: "{name}",
                            value: "{name}",
                            selected: *name == current_category,
                            "{name}"
                        }
                    }
                }
            }

            div { class: "dashboard-controls__field dashboard-controls__field--search",
                label { r#for: "keyword-search", "Search" }
                input {
                    id: "keyword-search",
                    r#type: "search",
                    placeholder: "Search keywords…",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
            }

            div { class: "dashboard-controls__field",
                label { r#for: "chart-kind-select", "Graph type" }
                select {
                    id: "chart-kind-select",
                    value: "{current_kind.param()}",
                    oninput: move |evt| {
                        if let Some(kind) = ChartKind::from_param(&evt.value()) {
                            chart_kind.set(kind);
                        }
                    },
                    for kind in ChartKind::ALL {
                        option {
                            key: "{kind.param()}",
                            value: "{kind.param()}",
                            selected: kind == current_kind,
                            "{kind.label()}"
                        }
                    }
                }
            }
        }
    }
}
