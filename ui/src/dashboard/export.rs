use dioxus::prelude::*;

use crate::core::export::{to_csv, EXPORT_FILENAME};
use crate::core::format;
use crate::core::table::RankingTable;

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Done(String),
    Error(String),
}

/// Export card: serializes the currently filtered table to CSV on demand.
/// On web the browser downloads `filtered_data.csv`; on desktop the file
/// lands in the app's data directory.
#[component]
pub fn ExportPanel(table: RankingTable) -> Element {
    let mut status = use_signal(|| ExportStatus::Idle);
    let row_count = table.len();

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Done(message) => Some((
            "dashboard-card__meta dashboard-card__meta--success",
            message.clone(),
        )),
        ExportStatus::Error(err) => Some((
            "dashboard-card__meta dashboard-card__meta--error",
            err.clone(),
        )),
    };

    let export_handler = move |_| {
        let csv = to_csv(&table);
        match deliver_csv(&csv) {
            Ok(message) => status.set(ExportStatus::Done(message)),
            Err(err) => status.set(ExportStatus::Error(err)),
        }
    };

    rsx! {
        section { class: "dashboard-card dashboard-export",
            div { class: "dashboard-card__header",
                h2 { "Export" }
                span { class: "dashboard-card__meta", {format::format_row_count(row_count)} }
            }

            p { "Download the table exactly as filtered, ready for a spreadsheet." }

            div { class: "dashboard-export__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: export_handler,
                    "Export to CSV"
                }
            }

            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn deliver_csv(csv: &str) -> Result<String, String> {
    use wasm_bindgen::JsCast;

    use crate::core::export::to_data_url;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("document unavailable")?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "unable to create download link")?
        .dyn_into()
        .map_err(|_| "anchor cast failed")?;

    anchor.set_href(&to_data_url(csv));
    anchor.set_download(EXPORT_FILENAME);

    let body = document.body().ok_or("missing body")?;
    body.append_child(&anchor).ok();
    anchor.click();
    anchor.remove();

    Ok(format!("Download started ({EXPORT_FILENAME})"))
}

#[cfg(not(target_arch = "wasm32"))]
fn deliver_csv(csv: &str) -> Result<String, String> {
    use std::fs;

    let dirs = directories::ProjectDirs::from("com", "Rankscope", "Rankscope")
        .ok_or("unable to determine export directory")?;
    let dir = dirs.data_dir().join("exports");
    fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
    let path = dir.join(EXPORT_FILENAME);
    fs::write(&path, csv).map_err(|err| err.to_string())?;

    Ok(format!("CSV saved to {}", path.display()))
}
