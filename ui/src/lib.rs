//! Shared UI crate for Rankscope. Cross-platform dashboard logic and views
//! live here; the `web` and `desktop` crates are thin launchers around it.

pub mod core;
pub mod dashboard;
pub mod views;
