use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LutError {
    #[error("failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("array {0} not found in source")]
    MissingArray(String),
    #[error("array {symbol}: invalid value {value:?}")]
    InvalidValue { symbol: String, value: String },
    #[error("array {symbol}: declared {declared} elements, found {found}")]
    LengthMismatch {
        symbol: String,
        declared: usize,
        found: usize,
    },
    #[error("{symbol}[{index}] = {value} does not fit the element type")]
    OutOfRange {
        symbol: &'static str,
        index: usize,
        value: i32,
    },
}

pub type Result<T> = std::result::Result<T, LutError>;
