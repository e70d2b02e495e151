//! Where the ranking sheet lives and how to fetch it.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::csv::parse_rows;
use crate::error::FetchError;
use crate::table::SheetTable;

/// External reference to the spreadsheet. Either a public CSV export URL or
/// the Sheets v4 `values.get` endpoint addressed by id + range, with the API
/// key supplied out of band through configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SheetSource {
    CsvUrl {
        url: String,
    },
    Api {
        spreadsheet_id: String,
        range: String,
        api_key: String,
    },
}

impl SheetSource {
    /// Canonical public CSV export URL for a Google sheet tab.
    pub fn csv_export(spreadsheet_id: &str, gid: u32) -> Self {
        Self::CsvUrl {
            url: format!(
                "https://docs.google.com/spreadsheets/d/{spreadsheet_id}/export?format=csv&gid={gid}"
            ),
        }
    }

    fn request_url(&self) -> String {
        match self {
            Self::CsvUrl { url } => url.clone(),
            Self::Api {
                spreadsheet_id,
                range,
                api_key,
            } => format!(
                "https://sheets.googleapis.com/v4/spreadsheets/{spreadsheet_id}/values/{range}?key={api_key}"
            ),
        }
    }
}

/// Shape of a Sheets v4 `values.get` response. Cells arrive as JSON strings,
/// numbers, bools, or null depending on the sheet's formatting.
#[derive(Debug, Deserialize)]
struct ValuesResponse {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

fn cell_to_string(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Fetch the sheet and return it as a rectangular dataset. Transport and
/// authentication failures propagate to the caller unchanged.
pub async fn fetch_table(source: &SheetSource) -> Result<SheetTable, FetchError> {
    let url = source.request_url();
    debug!("fetching sheet from {url}");

    let response = reqwest::get(&url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            url,
        });
    }

    let raw = match source {
        SheetSource::CsvUrl { .. } => {
            let text = response.text().await?;
            parse_rows(&text)
        }
        SheetSource::Api { .. } => {
            let decoded: ValuesResponse = response
                .json()
                .await
                .map_err(|err| FetchError::Decode(err.to_string()))?;
            decoded
                .values
                .into_iter()
                .map(|row| row.into_iter().map(cell_to_string).collect())
                .collect()
        }
    };

    let table = SheetTable::from_rows(raw).ok_or(FetchError::Empty)?;
    info!(
        "fetched sheet: {} columns, {} rows",
        table.headers.len(),
        table.row_count()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_export_builds_canonical_url() {
        let source = SheetSource::csv_export("1RkARFZe", 0);
        assert_eq!(
            source,
            SheetSource::CsvUrl {
                url: "https://docs.google.com/spreadsheets/d/1RkARFZe/export?format=csv&gid=0"
                    .to_string()
            }
        );
    }

    #[test]
    fn api_url_carries_key_and_range() {
        let source = SheetSource::Api {
            spreadsheet_id: "abc".into(),
            range: "A1:Z100".into(),
            api_key: "k123".into(),
        };
        assert_eq!(
            source.request_url(),
            "https://sheets.googleapis.com/v4/spreadsheets/abc/values/A1:Z100?key=k123"
        );
    }

    #[test]
    fn values_payload_normalizes_mixed_cells() {
        let decoded: ValuesResponse = serde_json::from_str(
            r#"{"range":"A1:C2","values":[["KEYWORD","Rank - 5th Aug"],["seo tools",3],["backlinks",null]]}"#,
        )
        .unwrap();
        let rows: Vec<Vec<String>> = decoded
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect();
        assert_eq!(rows[1], vec!["seo tools", "3"]);
        assert_eq!(rows[2], vec!["backlinks", ""]);
    }

    #[test]
    fn missing_values_field_decodes_to_empty() {
        let decoded: ValuesResponse = serde_json::from_str(r#"{"range":"A1:C2"}"#).unwrap();
        assert!(decoded.values.is_empty());
    }

    #[test]
    fn source_round_trips_through_json() {
        let source = SheetSource::Api {
            spreadsheet_id: "abc".into(),
            range: "A1:Z".into(),
            api_key: "k".into(),
        };
        let json = serde_json::to_string(&source).unwrap();
        let back: SheetSource = serde_json::from_str(&json).unwrap();
        assert_eq!(back, source);
    }
}
