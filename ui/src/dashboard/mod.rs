mod chart_panel;
pub use chart_panel::ChartPanel;

mod controls;
pub use controls::FilterControls;

mod detail;
pub use detail::KeywordDetailPanel;

mod export;
pub use export::ExportPanel;

use api::SheetTable;

/// Load lifecycle for the sheet fetch. Fetch and schema failures both land
/// in `Failed`; there is no retry policy beyond the user pressing Reload.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(SheetTable),
    Failed(String),
}
