//! The interactive row filter. Derived fresh from widget state on every
//! render; nothing here persists between interactions.

use super::table::{RankingRecord, RankingTable};

/// Current filter inputs: free-text keyword search (case-insensitive
/// substring) and an exact category selection. An empty query and `None`
/// category are each the identity filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankingFilter {
    pub query: String,
    pub category: Option<String>,
}

impl RankingFilter {
    pub fn is_identity(&self) -> bool {
        self.query.trim().is_empty() && self.category.is_none()
    }

    /// Keep records matching both predicates. Conjunctive, so the order the
    /// two filters are applied in cannot change the result.
    pub fn apply(&self, table: &RankingTable) -> RankingTable {
        let needle = self.query.trim().to_lowercase();
        let keep = |record: &RankingRecord| {
            let keyword_ok = needle.is_empty() || record.keyword.to_lowercase().contains(&needle);
            let category_ok = self
                .category
                .as_deref()
                .map_or(true, |category| record.category == category);
            keyword_ok && category_ok
        };

        RankingTable {
            keyword_label: table.keyword_label.clone(),
            category_label: table.category_label.clone(),
            columns: table.columns.clone(),
            records: table.records.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }
}
