//! Business logic services for admin.
//!
//! # Services
//!
//! - `customer_form` - Add-customer form state machine
//! - `screen_store` - Per-session record stores behind the list screens
//! - `submissions` - In-flight form id tracking (duplicate submit guard)

pub mod customer_form;
pub mod screen_store;
pub mod submissions;

pub use customer_form::{CustomerForm, CustomerFormInput, FormOutcome, FormPhase, SubmitError};
pub use screen_store::ScreenRecord;
pub use submissions::{SubmissionGuard, SubmissionTracker};
