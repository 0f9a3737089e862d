//! JSON REST API for customer registration.
//!
//! Exposes an axum [`Router`] backed by any [`afi_core::store::CustomerStore`].
//! Transport concerns (binding, tracing layers) are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", afi_api::api_router(CustomerService::new(store.clone())))
//! ```

pub mod customers;
pub mod error;

use afi_core::{service::CustomerService, store::CustomerStore};
use axum::{Router, routing::get};

pub use error::ApiError;

/// Build a fully-materialised API router for `service`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(service: CustomerService<S>) -> Router<()>
where
  S: CustomerStore + 'static,
{
  Router::new()
    .route("/customers", get(customers::list::<S>).post(customers::create::<S>))
    .route(
      "/customers/{id}",
      get(customers::get_one::<S>).put(customers::update_one::<S>),
    )
    .with_state(service)
}
