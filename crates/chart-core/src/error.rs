// File: crates/chart-core/src/error.rs
// Summary: Error type for the fallible edges of the crate (config parsing, strict builders, export).

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid color `{0}`: expected #rgb or #rrggbb")]
    InvalidColor(String),

    #[error("timestamp {next} precedes previous point at {prev}")]
    OutOfOrder { prev: DateTime<Utc>, next: DateTime<Utc> },

    #[error("failed to write chart output")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
