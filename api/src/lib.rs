//! Sheet access for Rankscope. Fetches the ranking spreadsheet over HTTP and
//! hands back a rectangular, named-column dataset. No UI dependencies live
//! here so the crate is usable from any front end.

mod csv;
mod error;
mod source;
mod table;

pub use error::FetchError;
pub use source::{fetch_table, SheetSource};
pub use table::SheetTable;
