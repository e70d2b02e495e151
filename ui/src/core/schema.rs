//! Schema-driven column selection.
//!
//! Earlier revisions of this dashboard hard-coded the tracked column labels
//! in three near-identical scripts. The schema unifies them: one serde-loadable
//! mapping from logical columns to spreadsheet header labels, resolved against
//! the fetched header row at load time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One tracked rank column. `label` is the exact spreadsheet header,
/// e.g. "Rank - 26th Aug". The labels are ad hoc human strings, so no
/// date parsing is attempted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankColumn {
    pub label: String,
}

impl RankColumn {
    pub fn new<T: Into<String>>(label: T) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// Column labels the dashboard projects out of the sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetSchema {
    pub keyword: String,
    pub category: String,
    pub ranks: Vec<RankColumn>,
}

/// A keyword or category column the schema demands is absent. Rank columns
/// are softer: they land in `ResolvedSchema::missing` instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("required column \"{0}\" is missing from the sheet")]
    MissingColumn(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedColumn {
    pub label: String,
    pub index: usize,
}

/// Schema matched against a concrete header row: column indexes for the
/// labels that exist, plus the declared rank labels that don't.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSchema {
    pub keyword: ResolvedColumn,
    pub category: ResolvedColumn,
    pub ranks: Vec<ResolvedColumn>,
    pub missing: Vec<String>,
}

impl SheetSchema {
    /// Built-in preset: the column set tracked by the original sheet.
    pub fn default_rankings() -> Self {
        Self {
            keyword: "KEYWORD".to_string(),
            category: "Belongs to".to_string(),
            ranks: [
                "Rank - 26th Aug",
                "Rank - 19th Aug",
                "Rank - 14th Aug",
                "Rank - 13th Aug",
                "Rank - 12th Aug",
                "Rank - 5th Aug",
                "Rank - 22nd July",
            ]
            .into_iter()
            .map(RankColumn::new)
            .collect(),
        }
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Match the schema against a fetched header row. Keyword and category
    /// must exist; declared rank columns that don't are reported in
    /// `missing` and skipped by every downstream step.
    pub fn resolve(&self, headers: &[String]) -> Result<ResolvedSchema, SchemaError> {
        let position = |label: &str| headers.iter().position(|h| h == label);

        let keyword = position(&self.keyword)
            .map(|index| ResolvedColumn {
                label: self.keyword.clone(),
                index,
            })
            .ok_or_else(|| SchemaError::MissingColumn(self.keyword.clone()))?;
        let category = position(&self.category)
            .map(|index| ResolvedColumn {
                label: self.category.clone(),
                index,
            })
            .ok_or_else(|| SchemaError::MissingColumn(self.category.clone()))?;

        let mut ranks = Vec::with_capacity(self.ranks.len());
        let mut missing = Vec::new();
        for column in &self.ranks {
            match position(&column.label) {
                Some(index) => ranks.push(ResolvedColumn {
                    label: column.label.clone(),
                    index,
                }),
                None => missing.push(column.label.clone()),
            }
        }

        Ok(ResolvedSchema {
            keyword,
            category,
            ranks,
            missing,
        })
    }
}

impl Default for SheetSchema {
    fn default() -> Self {
        Self::default_rankings()
    }
}
