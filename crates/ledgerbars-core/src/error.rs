// File: crates/ledgerbars-core/src/error.rs
// Summary: Library error type for dataset loading and file output.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv decode error: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing a `{0}` column")]
    MissingColumn(&'static str),
}
