//! Superadmin Core - Shared types and list logic.
//!
//! This crate provides the pieces of the superadmin dashboard that do no I/O:
//! - entity types for customers and shops
//! - the per-screen [`RecordStore`]
//! - the filter, sort and paginate [`view`] projection
//!
//! # Architecture
//!
//! The core crate contains only types, traits and pure functions - no HTTP
//! clients, no sessions, no templates. The `admin` crate wires these into
//! axum handlers.
//!
//! # Modules
//!
//! - [`types`] - Typed IDs, emails, customers and shops
//! - [`store`] - In-memory record store keyed by typed ID
//! - [`view`] - Search, categorical filters, locale-aware sort, pagination

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod store;
pub mod types;
pub mod view;

pub use store::{Record, RecordStore};
pub use types::*;
pub use view::{PageView, Projectable, SortField, SortOrder, ViewQuery, project};
