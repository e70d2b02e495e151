//! CSV serialization of the filtered table. Pure and synchronous; delivery
//! (download link, file write) lives with the export panel.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use super::table::RankingTable;

/// Fixed download name, whatever the filter state.
pub const EXPORT_FILENAME: &str = "filtered_data.csv";

/// Serialize the table: header row first, then one line per record. An empty
/// filtered set yields a header-only CSV.
pub fn to_csv(table: &RankingTable) -> String {
    let mut out = String::new();

    let mut header: Vec<String> = vec![table.keyword_label.clone(), table.category_label.clone()];
    header.extend(table.columns.iter().cloned());
    push_row(&mut out, &header);

    for record in &table.records {
        let mut row: Vec<String> = vec![record.keyword.clone(), record.category.clone()];
        row.extend(
            record
                .ranks
                .iter()
                .map(|rank| rank.map(|v| v.to_string()).unwrap_or_default()),
        );
        push_row(&mut out, &row);
    }

    out
}

/// Base64 data URL wrapping the CSV text, for embedding in a download link.
pub fn to_data_url(csv: &str) -> String {
    format!("data:text/csv;base64,{}", STANDARD.encode(csv.as_bytes()))
}

fn push_row(out: &mut String, cells: &[String]) {
    let mut first = true;
    for cell in cells {
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(&escape_csv(cell));
    }
    out.push('\n');
}

fn escape_csv(value: &str) -> String {
    let needs_quotes = value.contains(',') || value.contains('"') || value.contains('\n');
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::RankingRecord;

    fn table(records: Vec<RankingRecord>) -> RankingTable {
        RankingTable {
            keyword_label: "KEYWORD".into(),
            category_label: "Belongs to".into(),
            columns: vec!["Rank - 5th Aug".into(), "Rank - 22nd July".into()],
            records,
        }
    }

    #[test]
    fn empty_filtered_set_exports_header_only() {
        let csv = to_csv(&table(Vec::new()));
        assert_eq!(csv, "KEYWORD,Belongs to,Rank - 5th Aug,Rank - 22nd July\n");
    }

    #[test]
    fn rows_follow_the_header_and_missing_ranks_are_blank() {
        let csv = to_csv(&table(vec![RankingRecord {
            keyword: "seo tools".into(),
            category: "A".into(),
            ranks: vec![Some(3), None],
        }]));
        let mut lines = csv.lines();
        lines.next();
        assert_eq!(lines.next(), Some("seo tools,A,3,"));
    }

    #[test]
    fn cells_with_commas_or_quotes_are_quoted() {
        let csv = to_csv(&table(vec![RankingRecord {
            keyword: "tools, best \"free\"".into(),
            category: "A".into(),
            ranks: vec![None, None],
        }]));
        assert!(csv.contains("\"tools, best \"\"free\"\"\",A"));
    }

    #[test]
    fn data_url_is_base64_csv() {
        let url = to_data_url("a,b\n");
        assert!(url.starts_with("data:text/csv;base64,"));
        assert!(url.ends_with("YSxiCg=="));
    }
}
