//! Projection of the raw sheet into typed ranking records.

use api::SheetTable;

use super::schema::ResolvedSchema;

/// One keyword row. `ranks` is parallel to the resolved rank columns; a cell
/// that is empty or non-numeric projects to `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingRecord {
    pub keyword: String,
    pub category: String,
    pub ranks: Vec<Option<i64>>,
}

/// The projected table: resolved rank column labels plus one record per
/// source row, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankingTable {
    pub keyword_label: String,
    pub category_label: String,
    pub columns: Vec<String>,
    pub records: Vec<RankingRecord>,
}

fn parse_rank(cell: &str) -> Option<i64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    cell.parse().ok()
}

impl RankingTable {
    /// Select exactly the schema columns from the fetched sheet. Row order is
    /// preserved; rank columns the schema could not resolve never appear.
    pub fn project(sheet: &SheetTable, schema: &ResolvedSchema) -> Self {
        let records = sheet
            .rows
            .iter()
            .map(|row| RankingRecord {
                keyword: row[schema.keyword.index].clone(),
                category: row[schema.category.index].clone(),
                ranks: schema
                    .ranks
                    .iter()
                    .map(|column| parse_rank(&row[column.index]))
                    .collect(),
            })
            .collect();

        Self {
            keyword_label: schema.keyword.label.clone(),
            category_label: schema.category.label.clone(),
            columns: schema.ranks.iter().map(|c| c.label.clone()).collect(),
            records,
        }
    }

    /// Distinct categories in first-seen order (dropdown options).
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.category) {
                seen.push(record.category.clone());
            }
        }
        seen
    }

    /// Keywords in row order (detail dropdown options).
    pub fn keywords(&self) -> Vec<String> {
        self.records.iter().map(|r| r.keyword.clone()).collect()
    }

    pub fn record_for(&self, keyword: &str) -> Option<&RankingRecord> {
        self.records.iter().find(|r| r.keyword == keyword)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
