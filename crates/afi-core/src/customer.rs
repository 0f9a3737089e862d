//! Submission and persisted customer types.
//!
//! A [`Submission`] is the unvalidated shape a caller sends in. It carries no
//! identity; a [`Customer`] is a submission after the store has assigned it an
//! identifier and a creation timestamp.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{Error, Result};

/// Store-assigned customer identifier.
pub type CustomerId = i64;

/// An unvalidated customer registration.
///
/// Every field is optional on the wire; the validator decides which absences
/// are acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
  #[serde(default)]
  pub first_name:    Option<String>,
  #[serde(default)]
  pub surname:       Option<String>,
  #[serde(default)]
  pub policy_number: Option<String>,
  #[serde(default, deserialize_with = "deserialize_date_of_birth")]
  pub date_of_birth: Option<DateTime<Utc>>,
  #[serde(default)]
  pub email_address: Option<String>,
}

impl Submission {
  /// Decode a submission from a raw JSON request body.
  ///
  /// An empty (or whitespace-only) body is [`Error::MissingSubmission`], as is
  /// a literal JSON `null`.
  pub fn from_json(body: &[u8]) -> Result<Self> {
    if body.iter().all(u8::is_ascii_whitespace) {
      return Err(Error::MissingSubmission);
    }
    let submission: Option<Self> = serde_json::from_slice(body)?;
    submission.ok_or(Error::MissingSubmission)
  }
}

/// A persisted customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
  pub customer_id: CustomerId,
  pub created:     DateTime<Utc>,
  #[serde(flatten)]
  pub details:     Submission,
}

// ─── Date of birth ───────────────────────────────────────────────────────────

/// Parse a date of birth from any of the forms clients commonly send.
///
/// Accepts an RFC 3339 timestamp, a timestamp without an offset (taken as
/// UTC), or a bare `YYYY-MM-DD` date (midnight UTC).
pub fn parse_date_of_birth(s: &str) -> Option<DateTime<Utc>> {
  if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
    return Some(dt.with_timezone(&Utc));
  }
  if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
    return Some(naive.and_utc());
  }
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .ok()
    .and_then(|d| d.and_hms_opt(0, 0, 0))
    .map(|naive| naive.and_utc())
}

fn deserialize_date_of_birth<'de, D>(
  deserializer: D,
) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
  D: Deserializer<'de>,
{
  let raw: Option<String> = Option::deserialize(deserializer)?;
  raw
    .map(|s| {
      parse_date_of_birth(&s).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid dateOfBirth: {s:?}"))
      })
    })
    .transpose()
}
