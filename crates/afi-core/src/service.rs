//! [`CustomerService`] — validation in front of a [`CustomerStore`].
//!
//! Nothing reaches the store unless it has passed validation. Store failures
//! are returned as `Err`; a rejected submission is an `Ok` value carrying the
//! [`ValidationOutcome`].

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
  customer::{Customer, CustomerId, Submission},
  store::CustomerStore,
  validate::{ValidationOutcome, validate_at},
};

/// The result of a write through the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
  Accepted(Customer),
  Rejected(ValidationOutcome),
}

pub struct CustomerService<S> {
  store: Arc<S>,
  clock: fn() -> DateTime<Utc>,
}

impl<S> Clone for CustomerService<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store), clock: self.clock } }
}

impl<S: CustomerStore> CustomerService<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store, clock: Utc::now } }

  /// Use `clock` instead of the system time when validating ages.
  pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
    self.clock = clock;
    self
  }

  pub fn store(&self) -> &S { &self.store }

  /// Validate `submission` and, if it passes, insert it.
  pub async fn register(&self, submission: Submission) -> Result<Registration, S::Error> {
    let outcome = validate_at(&submission, (self.clock)());
    if !outcome.is_valid {
      tracing::debug!(
        violations = outcome.violations.len(),
        "customer registration rejected"
      );
      return Ok(Registration::Rejected(outcome));
    }

    let customer = self.store.insert(submission).await?;
    tracing::info!(customer_id = customer.customer_id, "customer registered");
    Ok(Registration::Accepted(customer))
  }

  /// Validate `submission` and, if it passes, replace the fields of customer
  /// `id` with it. Returns `None` if there is no such customer.
  pub async fn update(
    &self,
    id: CustomerId,
    submission: Submission,
  ) -> Result<Option<Registration>, S::Error> {
    let outcome = validate_at(&submission, (self.clock)());
    if !outcome.is_valid {
      tracing::debug!(
        customer_id = id,
        violations = outcome.violations.len(),
        "customer update rejected"
      );
      return Ok(Some(Registration::Rejected(outcome)));
    }

    let Some(mut customer) = self.store.get(id).await? else {
      return Ok(None);
    };
    customer.details = submission;

    let customer = self.store.update(customer).await?;
    tracing::info!(customer_id = customer.customer_id, "customer updated");
    Ok(Some(Registration::Accepted(customer)))
  }

  pub async fn get(&self, id: CustomerId) -> Result<Option<Customer>, S::Error> {
    self.store.get(id).await
  }

  pub async fn list(&self) -> Result<Vec<Customer>, S::Error> { self.store.list().await }
}
