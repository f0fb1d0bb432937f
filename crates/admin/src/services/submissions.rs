//! In-flight form submission tracking.
//!
//! Each rendered add-customer form carries a unique form id. While a
//! submission for that id is talking to the backend, a second submission of
//! the same id is refused, so a double click or a resent request produces one
//! backend call.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use uuid::Uuid;

/// Set of form ids with a submission in flight.
#[derive(Debug, Clone, Default)]
pub struct SubmissionTracker {
    in_flight: Arc<Mutex<HashSet<Uuid>>>,
}

impl SubmissionTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `form_id` as in flight.
    ///
    /// Returns `None` if it already is. The id is released when the returned
    /// guard is dropped.
    #[must_use]
    pub fn begin(&self, form_id: Uuid) -> Option<SubmissionGuard> {
        let inserted = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(form_id);

        inserted.then(|| SubmissionGuard {
            tracker: self.clone(),
            form_id,
        })
    }

    fn release(&self, form_id: Uuid) {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&form_id);
    }
}

/// Keeps a form id marked in flight until dropped.
#[derive(Debug)]
pub struct SubmissionGuard {
    tracker: SubmissionTracker,
    form_id: Uuid,
}

impl Drop for SubmissionGuard {
    fn drop(&mut self) {
        self.tracker.release(self.form_id);
    }
}
