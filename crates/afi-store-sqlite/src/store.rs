//! [`SqliteStore`] — the SQLite implementation of [`CustomerStore`].

use std::path::Path;

use afi_core::{
  customer::{Customer, CustomerId, Submission},
  store::CustomerStore,
};
use chrono::Utc;
use rusqlite::OptionalExtension as _;

use crate::{
  encode::{CUSTOMER_COLUMNS, RawCustomer, encode_dt},
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A customer store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

/// Column values for the five submission fields, in table order.
type SubmissionRow = (
  Option<String>,
  Option<String>,
  Option<String>,
  Option<String>,
  Option<String>,
);

fn submission_row(s: Submission) -> SubmissionRow {
  (
    s.first_name,
    s.surname,
    s.policy_number,
    s.date_of_birth.map(encode_dt),
    s.email_address,
  )
}

// ─── CustomerStore impl ──────────────────────────────────────────────────────

impl CustomerStore for SqliteStore {
  type Error = Error;

  async fn insert(&self, submission: Submission) -> Result<Customer> {
    let created = Utc::now();
    let created_str = encode_dt(created);
    let (first_name, surname, policy_number, date_of_birth, email_address) =
      submission_row(submission.clone());

    let customer_id: CustomerId = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO customers (
             first_name, surname, policy_number, date_of_birth, email_address, created
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            first_name,
            surname,
            policy_number,
            date_of_birth,
            email_address,
            created_str,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    tracing::debug!(customer_id, "inserted customer row");

    Ok(Customer { customer_id, created, details: submission })
  }

  async fn update(&self, customer: Customer) -> Result<Customer> {
    let id = customer.customer_id;
    let (first_name, surname, policy_number, date_of_birth, email_address) =
      submission_row(customer.details);

    let changed: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE customers
              SET first_name = ?1, surname = ?2, policy_number = ?3,
                  date_of_birth = ?4, email_address = ?5
            WHERE customer_id = ?6",
          rusqlite::params![
            first_name,
            surname,
            policy_number,
            date_of_birth,
            email_address,
            id,
          ],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(Error::CustomerNotFound(id));
    }

    self.get(id).await?.ok_or(Error::CustomerNotFound(id))
  }

  async fn get(&self, id: CustomerId) -> Result<Option<Customer>> {
    let raw: Option<RawCustomer> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {CUSTOMER_COLUMNS} FROM customers WHERE customer_id = ?1"),
            rusqlite::params![id],
            RawCustomer::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawCustomer::into_customer).transpose()
  }

  async fn list(&self) -> Result<Vec<Customer>> {
    let raws: Vec<RawCustomer> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {CUSTOMER_COLUMNS} FROM customers ORDER BY customer_id"
        ))?;
        let rows = stmt
          .query_map([], RawCustomer::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawCustomer::into_customer).collect()
  }
}
