//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings in UTC.

use afi_core::customer::{Customer, CustomerId, Submission};
use chrono::{DateTime, Utc};

use crate::{Error, Result};

// ─── DateTime<Utc>
// ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column list matching [`RawCustomer::from_row`].
pub const CUSTOMER_COLUMNS: &str =
  "customer_id, first_name, surname, policy_number, date_of_birth, email_address, created";

/// Raw values read directly from a `customers` row.
pub struct RawCustomer {
  pub customer_id:   CustomerId,
  pub first_name:    Option<String>,
  pub surname:       Option<String>,
  pub policy_number: Option<String>,
  pub date_of_birth: Option<String>,
  pub email_address: Option<String>,
  pub created:       String,
}

impl RawCustomer {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      customer_id:   row.get(0)?,
      first_name:    row.get(1)?,
      surname:       row.get(2)?,
      policy_number: row.get(3)?,
      date_of_birth: row.get(4)?,
      email_address: row.get(5)?,
      created:       row.get(6)?,
    })
  }

  pub fn into_customer(self) -> Result<Customer> {
    let date_of_birth = self
      .date_of_birth
      .as_deref()
      .map(decode_dt)
      .transpose()?;

    Ok(Customer {
      customer_id: self.customer_id,
      created:     decode_dt(&self.created)?,
      details:     Submission {
        first_name: self.first_name,
        surname: self.surname,
        policy_number: self.policy_number,
        date_of_birth,
        email_address: self.email_address,
      },
    })
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  #[test]
  fn dt_roundtrip_keeps_subsecond_precision() {
    let dt = Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap()
      + chrono::Duration::nanoseconds(123_456_789);
    assert_eq!(decode_dt(&encode_dt(dt)).unwrap(), dt);
  }

  #[test]
  fn decode_dt_normalises_offset() {
    let dt = decode_dt("1990-05-17T02:00:00+02:00").unwrap();
    assert_eq!(dt, Utc.with_ymd_and_hms(1990, 5, 17, 0, 0, 0).unwrap());
  }

  #[test]
  fn decode_dt_rejects_garbage() {
    assert!(matches!(decode_dt("not a date"), Err(Error::DateParse(_))));
  }
}
