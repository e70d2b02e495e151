//! Rectangular dataset with named columns, as returned by the sheet adapter.

use serde::{Deserialize, Serialize};

/// Header row plus data rows. Every row is normalized to header width on
/// construction so column indexing is total for the life of the table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    /// Build a table from raw parsed rows, treating the first row as headers.
    /// Short rows are padded with empty cells; long rows are truncated. The
    /// Sheets API omits trailing empty cells, so padding is the common case.
    pub fn from_rows(mut raw: Vec<Vec<String>>) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        let headers = raw.remove(0);
        let width = headers.len();
        for row in &mut raw {
            row.resize(width, String::new());
        }
        Some(Self { headers, rows: raw })
    }

    /// Index of an exactly matching column header.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
