//! Figure construction. A figure is a throwaway value owned by the render
//! step: named series over a shared x axis, one color per rank column from a
//! fixed sequential ramp.

use super::table::RankingTable;

/// Viridis-derived ramp, indexed by rank column position.
pub const PALETTE: [&str; 8] = [
    "#440154", "#46327e", "#365c8d", "#277f8e", "#1fa187", "#4ac16d", "#a0da39", "#fde725",
];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Scatter,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Bar, ChartKind::Line, ChartKind::Scatter];

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar",
            ChartKind::Line => "Line",
            ChartKind::Scatter => "Scatter",
        }
    }

    /// Widget option value, round-tripped through the chart-type dropdown.
    pub fn param(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Scatter => "scatter",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.param() == value)
    }
}

/// One plotted series: a rank column's values across the x axis. `None`
/// marks a missing rank and is simply absent from the drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: &'static str,
    pub values: Vec<Option<i64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub kind: ChartKind,
    pub x_labels: Vec<String>,
    pub series: Vec<Series>,
}

/// Main chart: x = keywords of the filtered table, one series per resolved
/// rank column. Columns missing from the sheet were dropped at resolution
/// and can never reach the series list.
pub fn overview_figure(table: &RankingTable, kind: ChartKind) -> Figure {
    let series = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, label)| Series {
            name: label.clone(),
            color: palette_color(i),
            values: table.records.iter().map(|record| record.ranks[i]).collect(),
        })
        .collect();

    Figure {
        kind,
        x_labels: table.keywords(),
        series,
    }
}

/// Detail chart for a single keyword: x = rank columns, one bar per column,
/// colored with the same ramp as the main chart. Always grouped bars, no
/// matter which chart type the main view uses.
pub fn detail_figure(table: &RankingTable, keyword: &str) -> Option<Figure> {
    let record = table.record_for(keyword)?;
    let columns = table.columns.len();

    let series = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, label)| Series {
            name: label.clone(),
            color: palette_color(i),
            values: (0..columns)
                .map(|slot| if slot == i { record.ranks[i] } else { None })
                .collect(),
        })
        .collect();

    Some(Figure {
        kind: ChartKind::Bar,
        x_labels: table.columns.clone(),
        series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::RankingRecord;

    fn table() -> RankingTable {
        RankingTable {
            keyword_label: "KEYWORD".into(),
            category_label: "Belongs to".into(),
            columns: vec!["Rank - 5th Aug".into(), "Rank - 22nd July".into()],
            records: vec![
                RankingRecord {
                    keyword: "seo tools".into(),
                    category: "A".into(),
                    ranks: vec![Some(3), Some(5)],
                },
                RankingRecord {
                    keyword: "backlinks".into(),
                    category: "B".into(),
                    ranks: vec![Some(7), None],
                },
            ],
        }
    }

    #[test]
    fn one_series_per_rank_column() {
        let figure = overview_figure(&table(), ChartKind::Line);
        assert_eq!(figure.series.len(), 2);
        assert_eq!(figure.x_labels, vec!["seo tools", "backlinks"]);
        assert_eq!(figure.series[0].values, vec![Some(3), Some(7)]);
        assert_eq!(figure.series[1].values, vec![Some(5), None]);
    }

    #[test]
    fn colors_follow_column_position() {
        let figure = overview_figure(&table(), ChartKind::Bar);
        assert_eq!(figure.series[0].color, PALETTE[0]);
        assert_eq!(figure.series[1].color, PALETTE[1]);
    }

    #[test]
    fn palette_wraps_past_its_length() {
        assert_eq!(palette_color(PALETTE.len()), PALETTE[0]);
    }

    #[test]
    fn detail_is_one_point_per_column_always_bars() {
        let figure = detail_figure(&table(), "seo tools").unwrap();
        assert_eq!(figure.kind, ChartKind::Bar);
        assert_eq!(figure.x_labels.len(), 2);
        assert_eq!(figure.series[0].values, vec![Some(3), None]);
        assert_eq!(figure.series[1].values, vec![None, Some(5)]);
    }

    #[test]
    fn detail_for_unknown_keyword_is_none() {
        assert!(detail_figure(&table(), "no such keyword").is_none());
    }

    #[test]
    fn chart_kind_params_round_trip() {
        for kind in ChartKind::ALL {
            assert_eq!(ChartKind::from_param(kind.param()), Some(kind));
        }
        assert_eq!(ChartKind::from_param("pie"), None);
    }
}
