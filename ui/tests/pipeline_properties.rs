//! End-to-end properties of the dashboard data pipeline, exercised without
//! any UI: sheet → schema resolution → projection → filter → figure → CSV.
//! These mirror how the dashboard view composes the core modules.

use api::SheetTable;
use ui::core::chart::{overview_figure, ChartKind};
use ui::core::export::to_csv;
use ui::core::filter::RankingFilter;
use ui::core::schema::{RankColumn, SheetSchema};
use ui::core::svg::render_svg;
use ui::core::table::RankingTable;

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

/// A sheet with one extra column the schema never asks for, and one schema
/// column ("Rank - 12th Aug") the sheet doesn't carry.
fn sheet() -> SheetTable {
    SheetTable::from_rows(vec![
        row(&["KEYWORD", "Belongs to", "Rank - 5th Aug", "Rank - 22nd July", "Owner"]),
        row(&["seo tools", "A", "3", "9", "sam"]),
        row(&["backlinks", "B", "7", "", "kim"]),
        row(&["Rank Tracker Pro", "A", "1", "2", "sam"]),
    ])
    .unwrap()
}

fn schema() -> SheetSchema {
    SheetSchema {
        keyword: "KEYWORD".into(),
        category: "Belongs to".into(),
        ranks: vec![
            RankColumn::new("Rank - 5th Aug"),
            RankColumn::new("Rank - 12th Aug"),
            RankColumn::new("Rank - 22nd July"),
        ],
    }
}

fn projected() -> (RankingTable, Vec<String>) {
    let sheet = sheet();
    let resolved = schema().resolve(&sheet.headers).unwrap();
    (
        RankingTable::project(&sheet, &resolved),
        resolved.missing.clone(),
    )
}

#[test]
fn identity_filter_preserves_projection_exactly() {
    let (table, _) = projected();
    let filtered = RankingFilter::default().apply(&table);
    assert_eq!(filtered, table);
    assert_eq!(filtered.columns.len(), 2);
    assert_eq!(filtered.len(), 3);
}

#[test]
fn filters_commute_and_match_the_worked_example() {
    let (table, _) = projected();

    let category = RankingFilter {
        query: String::new(),
        category: Some("A".into()),
    };
    let by_category = category.apply(&table);
    assert_eq!(
        by_category.keywords(),
        vec!["seo tools".to_string(), "Rank Tracker Pro".to_string()]
    );

    let search = RankingFilter {
        query: "link".into(),
        category: None,
    };
    let by_search = search.apply(&table);
    assert_eq!(by_search.keywords(), vec!["backlinks".to_string()]);

    // Order of application cannot matter.
    assert_eq!(
        search.apply(&category.apply(&table)),
        category.apply(&search.apply(&table))
    );
}

#[test]
fn search_is_case_insensitive_both_ways() {
    let (table, _) = projected();
    let filtered = RankingFilter {
        query: "rank tracker".into(),
        category: None,
    }
    .apply(&table);
    assert_eq!(filtered.keywords(), vec!["Rank Tracker Pro".to_string()]);
}

#[test]
fn missing_rank_column_never_reaches_the_figure() {
    let (table, missing) = projected();
    assert_eq!(missing, vec!["Rank - 12th Aug".to_string()]);

    let figure = overview_figure(&table, ChartKind::Bar);
    let names: Vec<&str> = figure.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Rank - 5th Aug", "Rank - 22nd July"]);

    // The surviving series still render.
    let svg = render_svg(&figure, 960, 420);
    assert!(svg.contains("chart-figure__bar"));
}

#[test]
fn empty_filter_result_exports_header_only_csv() {
    let (table, _) = projected();
    let filtered = RankingFilter {
        query: "no such keyword".into(),
        category: None,
    }
    .apply(&table);
    assert!(filtered.is_empty());

    let csv = to_csv(&filtered);
    assert_eq!(csv, "KEYWORD,Belongs to,Rank - 5th Aug,Rank - 22nd July\n");
}

#[test]
fn export_reflects_the_current_filter() {
    let (table, _) = projected();
    let filtered = RankingFilter {
        query: String::new(),
        category: Some("B".into()),
    }
    .apply(&table);

    let csv = to_csv(&filtered);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "backlinks,B,7,");
}
