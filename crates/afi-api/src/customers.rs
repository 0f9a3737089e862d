//! Handlers for `/customers` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/customers` | All customers, identifier order |
//! | `POST` | `/customers` | Body: submission JSON; returns the new identifier |
//! | `GET`  | `/customers/:id` | 404 if not found |
//! | `PUT`  | `/customers/:id` | Body: submission JSON; full replacement |
//!
//! Submissions that break a field rule get `422` with the validation outcome
//! as the body. An empty body is `400`.

use afi_core::{
  customer::{Customer, CustomerId, Submission},
  service::{CustomerService, Registration},
  store::CustomerStore,
};
use axum::{
  Json,
  body::Bytes,
  extract::{Path, State},
};

use crate::error::ApiError;

fn store_error<E>(e: E) -> ApiError
where
  E: std::error::Error + Send + Sync + 'static,
{
  ApiError::Store(Box::new(e))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /customers`
pub async fn list<S>(
  State(service): State<CustomerService<S>>,
) -> Result<Json<Vec<Customer>>, ApiError>
where
  S: CustomerStore,
{
  let customers = service.list().await.map_err(store_error)?;
  Ok(Json(customers))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /customers` — responds with the bare identifier, e.g. `17`.
pub async fn create<S>(
  State(service): State<CustomerService<S>>,
  body: Bytes,
) -> Result<Json<CustomerId>, ApiError>
where
  S: CustomerStore,
{
  let submission = Submission::from_json(&body)?;

  match service.register(submission).await.map_err(store_error)? {
    Registration::Accepted(customer) => Ok(Json(customer.customer_id)),
    Registration::Rejected(outcome) => Err(ApiError::Invalid(outcome)),
  }
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /customers/:id`
pub async fn get_one<S>(
  State(service): State<CustomerService<S>>,
  Path(id): Path<CustomerId>,
) -> Result<Json<Customer>, ApiError>
where
  S: CustomerStore,
{
  let customer = service
    .get(id)
    .await
    .map_err(store_error)?
    .ok_or_else(|| ApiError::NotFound(format!("customer {id} not found")))?;
  Ok(Json(customer))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /customers/:id`
pub async fn update_one<S>(
  State(service): State<CustomerService<S>>,
  Path(id): Path<CustomerId>,
  body: Bytes,
) -> Result<Json<Customer>, ApiError>
where
  S: CustomerStore,
{
  let submission = Submission::from_json(&body)?;

  match service.update(id, submission).await.map_err(store_error)? {
    Some(Registration::Accepted(customer)) => Ok(Json(customer)),
    Some(Registration::Rejected(outcome)) => Err(ApiError::Invalid(outcome)),
    None => Err(ApiError::NotFound(format!("customer {id} not found"))),
  }
}
