//! Error types for `afi-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// No submission was supplied at all. Distinct from a submission that
  /// fails validation, which is reported through a
  /// [`ValidationOutcome`](crate::validate::ValidationOutcome).
  #[error("customer submission is required")]
  MissingSubmission,

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
