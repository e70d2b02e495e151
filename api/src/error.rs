//! Fetch failure taxonomy. There is deliberately no retry or backoff: the
//! dashboard is manually operated and surfaces the error as-is.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("sheet endpoint returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("could not decode sheet response: {0}")]
    Decode(String),

    #[error("sheet response contained no header row")]
    Empty,
}
