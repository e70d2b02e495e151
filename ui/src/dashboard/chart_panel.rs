use dioxus::prelude::*;

use crate::core::chart::Figure;
use crate::core::format;
use crate::core::svg::render_svg;

/// Main chart card: the rendered figure plus a legend, and a notice when
/// declared rank columns were missing from the fetched sheet. Those columns
/// are simply absent from the figure; present series render regardless.
#[component]
pub fn ChartPanel(heading: String, figure: Figure, missing: Vec<String>) -> Element {
    let row_count = figure.x_labels.len();
    let markup = render_svg(&figure, 960, 420);
    let missing_label = missing.join(", ");

    rsx! {
        section { class: "dashboard-card dashboard-chart",
            div { class: "dashboard-card__header",
                h2 { "{heading}" }
                span { class: "dashboard-card__meta", {format::format_row_count(row_count)} }
            }

            if !missing.is_empty() {
                p { class: "dashboard-chart__notice",
                    "Missing rank columns in the sheet: {missing_label}"
                }
            }

            if row_count == 0 {
                p { class: "dashboard-card__placeholder",
                    "No keywords match the current filters."
                }
            } else {
                div { class: "dashboard-chart__canvas", dangerous_inner_html: "{markup}" }
                ul { class: "dashboard-chart__legend",
                    for series in figure.series.iter() {
                        li { key: "{series.name}", class: "dashboard-chart__legend-item",
                            span {
                                class: "dashboard-chart__swatch",
                                style: "background: {series.color}",
                            }
                            span { "{series.name}" }
                        }
                    }
                }
            }
        }
    }
}
