//! Error types for the zakup-ingest reader.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("csv error: {0}")]
  Csv(#[from] csv::Error),

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("invalid decimal in {column}: {value:?}")]
  InvalidDecimal { column: &'static str, value: String },

  #[error("invalid integer in {column}: {value:?}")]
  InvalidInteger { column: &'static str, value: String },

  #[error("invalid timestamp in {column}: {value:?}")]
  InvalidDateTime { column: &'static str, value: String },

  #[error("invalid date in {column}: {value:?}")]
  InvalidDate { column: &'static str, value: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
