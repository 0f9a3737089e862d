//! Core types and trait definitions for AFI customer registration.
//!
//! This crate is deliberately free of HTTP and database dependencies. It owns
//! the submission validator, the [`store::CustomerStore`] abstraction, and the
//! [`service::CustomerService`] that ties the two together.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod customer;
pub mod error;
pub mod service;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
