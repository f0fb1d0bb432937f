//! Add-customer form state.
//!
//! ```text
//! idle --submit--> submitting --complete(ok)--> idle (fields cleared)
//!                             --complete(err)-> idle (fields kept)
//! idle --submit(invalid)--> idle (fields kept, field error)
//! ```

use serde::Deserialize;
use superadmin_core::{NewCustomer, NewCustomerError};
use uuid::Uuid;

use crate::backend::BackendError;

/// Message shown after the backend accepted a customer.
pub const SUCCESS_MESSAGE: &str = "Customer added successfully!";

/// Message shown when the same form is submitted twice at once.
pub const DUPLICATE_MESSAGE: &str = "Error: This form is already being submitted.";

/// Posted form fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerFormInput {
    pub form_id: Option<Uuid>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

/// Whether a submission is talking to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

/// Result of the last submission, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// The backend accepted the customer.
    Added,
    /// Input failed validation; nothing was sent.
    Invalid { field: &'static str, message: String },
    /// The backend call failed.
    Failed { message: &'static str },
    /// Another submission of this form is in flight.
    Duplicate,
}

impl FormOutcome {
    /// Banner text.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Added => SUCCESS_MESSAGE,
            Self::Invalid { message, .. } => message,
            Self::Failed { message } => message,
            Self::Duplicate => DUPLICATE_MESSAGE,
        }
    }

    /// Whether the banner reports a problem.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        !matches!(self, Self::Added)
    }
}

/// Why [`CustomerForm::submit`] did not produce a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The form is already submitting.
    InFlight,
    /// Input failed validation.
    Invalid(NewCustomerError),
}

/// Add-customer form: field values, phase and last outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerForm {
    pub form_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    phase: FormPhase,
    outcome: Option<FormOutcome>,
}

impl Default for CustomerForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomerForm {
    /// Blank idle form with a fresh form id.
    #[must_use]
    pub fn new() -> Self {
        Self {
            form_id: Uuid::new_v4(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            phase: FormPhase::Idle,
            outcome: None,
        }
    }

    /// Idle form holding posted values.
    ///
    /// A submission without a form id gets a fresh one.
    #[must_use]
    pub fn from_input(input: CustomerFormInput) -> Self {
        Self {
            form_id: input.form_id.unwrap_or_else(Uuid::new_v4),
            name: input.name,
            email: input.email,
            phone: input.phone,
            address: input.address,
            phase: FormPhase::Idle,
            outcome: None,
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Outcome of the last submission.
    #[must_use]
    pub const fn outcome(&self) -> Option<&FormOutcome> {
        self.outcome.as_ref()
    }

    /// Field named by a validation error, if any.
    #[must_use]
    pub fn error_field(&self) -> Option<&'static str> {
        match self.outcome {
            Some(FormOutcome::Invalid { field, .. }) => Some(field),
            _ => None,
        }
    }

    /// Validate the fields and enter [`FormPhase::Submitting`].
    ///
    /// On a validation failure the form stays idle with an
    /// [`FormOutcome::Invalid`] outcome.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::InFlight`] if already submitting, or
    /// [`SubmitError::Invalid`] if a field is missing or malformed.
    pub fn submit(&mut self) -> Result<NewCustomer, SubmitError> {
        if self.phase == FormPhase::Submitting {
            return Err(SubmitError::InFlight);
        }

        match NewCustomer::new(&self.name, &self.email, &self.phone, &self.address) {
            Ok(customer) => {
                self.phase = FormPhase::Submitting;
                self.outcome = None;
                Ok(customer)
            }
            Err(e) => {
                self.outcome = Some(FormOutcome::Invalid {
                    field: e.field(),
                    message: format!("Error: {}", capitalize(&e.to_string())),
                });
                Err(SubmitError::Invalid(e))
            }
        }
    }

    /// Leave [`FormPhase::Submitting`] with the backend's answer.
    ///
    /// Success clears every field and issues a new form id; failure keeps the
    /// fields for another attempt.
    pub fn complete(&mut self, result: Result<(), &BackendError>) {
        self.phase = FormPhase::Idle;
        match result {
            Ok(()) => {
                *self = Self {
                    outcome: Some(FormOutcome::Added),
                    ..Self::new()
                };
            }
            Err(e) => {
                self.outcome = Some(FormOutcome::Failed {
                    message: e.user_message(),
                });
            }
        }
    }

    /// Abandon this submission because another one of the same form is in
    /// flight. Fields are kept.
    pub fn refuse_duplicate(&mut self) {
        self.phase = FormPhase::Idle;
        self.outcome = Some(FormOutcome::Duplicate);
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn filled() -> CustomerForm {
        CustomerForm::from_input(CustomerFormInput {
            form_id: Some(Uuid::new_v4()),
            name: "Jane Smith".to_string(),
            email: "jane.smith@example.com".to_string(),
            phone: "2345678901".to_string(),
            address: "1 Main St".to_string(),
        })
    }

    #[test]
    fn test_new_form_is_blank_and_idle() {
        let form = CustomerForm::new();
        assert_eq!(form.phase(), FormPhase::Idle);
        assert!(form.outcome().is_none());
        assert!(form.name.is_empty());
    }

    #[test]
    fn test_success_clears_fields_and_rotates_id() {
        let mut form = filled();
        let old_id = form.form_id;

        let payload = form.submit().unwrap();
        assert_eq!(payload.name, "Jane Smith");
        assert_eq!(form.phase(), FormPhase::Submitting);

        form.complete(Ok(()));
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.outcome(), Some(&FormOutcome::Added));
        assert_eq!(form.outcome().unwrap().message(), "Customer added successfully!");
        assert!(form.name.is_empty());
        assert!(form.address.is_empty());
        assert_ne!(form.form_id, old_id);
    }

    #[test]
    fn test_rejection_keeps_fields() {
        let mut form = filled();
        let id = form.form_id;
        form.submit().unwrap();

        form.complete(Err(&BackendError::Rejected { status: 500 }));
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.name, "Jane Smith");
        assert_eq!(form.form_id, id);

        let outcome = form.outcome().unwrap();
        assert!(outcome.is_error());
        assert_eq!(outcome.message(), "Error: Could not add customer.");
    }

    #[test]
    fn test_submit_while_submitting_is_refused() {
        let mut form = filled();
        form.submit().unwrap();
        assert_eq!(form.submit(), Err(SubmitError::InFlight));
    }

    #[test]
    fn test_invalid_input_stays_idle() {
        let mut form = filled();
        form.email = "not-an-email".to_string();

        let err = form.submit().unwrap_err();
        assert!(matches!(err, SubmitError::Invalid(_)));
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.error_field(), Some("email"));
        assert_eq!(form.email, "not-an-email");
        assert!(form.outcome().unwrap().message().starts_with("Error: Invalid email"));
    }

    #[test]
    fn test_missing_field_message() {
        let mut form = filled();
        form.name = "   ".to_string();
        form.submit().unwrap_err();
        assert_eq!(form.error_field(), Some("name"));
        assert_eq!(form.outcome().unwrap().message(), "Error: Name is required");
    }

    #[test]
    fn test_missing_form_id_gets_fresh_one() {
        let form = CustomerForm::from_input(CustomerFormInput::default());
        assert!(!form.form_id.is_nil());
    }

    #[test]
    fn test_duplicate_outcome() {
        let mut form = filled();
        form.submit().unwrap();
        form.refuse_duplicate();
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.outcome(), Some(&FormOutcome::Duplicate));
        assert!(form.outcome().unwrap().is_error());
        assert_eq!(form.name, "Jane Smith");
    }
}
