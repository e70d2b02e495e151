//! Shared dashboard logic: schema, projection, filtering, figures, export.
//! Everything here is pure and platform-agnostic; Dioxus only shows up in
//! the component modules.

pub mod chart;
pub mod config;
pub mod export;
pub mod filter;
pub mod format;
pub mod schema;
pub mod svg;
pub mod table;
