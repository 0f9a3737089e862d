//! Error type for `afi-store-sqlite`.

use afi_core::customer::CustomerId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// Attempted to update a customer that was not found.
  #[error("customer not found: {0}")]
  CustomerNotFound(CustomerId),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
