//! Superadmin dashboard library.
//!
//! This crate provides the dashboard as a library, allowing it to be tested
//! and embedded. The binary in `main.rs` adds tracing, Sentry and the
//! listener around [`app`].
//!
//! # Screens
//!
//! - Customer list with search, sort, pagination and list/card views
//! - Shop list with the same controls plus category and package filters
//! - Add-customer form posting to the external backend
//!
//! Deletes only touch the browser session's copy of a list; view and update
//! links hand off to an external router.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod backend;
pub mod components;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod navigation;
pub mod routes;
pub mod services;
pub mod sources;
pub mod state;

use axum::Router;

use crate::middleware::create_session_layer;
use crate::state::AppState;

/// Build the dashboard router with its session layer.
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());

    routes::routes().layer(session_layer).with_state(state)
}
