//! External backend integration.
//!
//! The backend is not part of this repository. The dashboard uses three of
//! its endpoints:
//!
//! - `POST /customer` - create a customer from the add-customer form
//! - `GET /getAllCustomers` - customer list (remote data source only)
//! - `GET /getAllShops` - shop list (remote data source only)
//!
//! Requests carry no timeout and are never retried.

mod client;
mod error;

pub use client::BackendClient;
pub use error::BackendError;
