//! The `CustomerStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `afi-store-sqlite`).
//! Higher layers depend on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::customer::{Customer, CustomerId, Submission};

/// Abstraction over a customer repository.
///
/// Records are only ever written whole: `insert` creates a row from a
/// submission, `update` replaces the submission fields of an existing row.
/// Neither validates; callers are expected to have done that already.
pub trait CustomerStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new customer. The identifier and `created` timestamp are
  /// assigned by the store.
  fn insert(
    &self,
    submission: Submission,
  ) -> impl Future<Output = Result<Customer, Self::Error>> + Send + '_;

  /// Replace the submission fields of `customer.customer_id` and return the
  /// stored record. The `created` timestamp is never changed.
  fn update(
    &self,
    customer: Customer,
  ) -> impl Future<Output = Result<Customer, Self::Error>> + Send + '_;

  /// Retrieve a customer by identifier. Returns `None` if not found.
  fn get(
    &self,
    id: CustomerId,
  ) -> impl Future<Output = Result<Option<Customer>, Self::Error>> + Send + '_;

  /// List every customer in identifier order.
  fn list(&self) -> impl Future<Output = Result<Vec<Customer>, Self::Error>> + Send + '_;
}
