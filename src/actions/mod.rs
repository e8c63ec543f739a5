pub mod auth;
pub mod invoices;
pub mod properties;

pub use auth::{authenticate, AuthOutcome, LoginForm};

use crate::forms::FieldErrors;

/// State handed back to a form when an action does not complete: field
/// errors with a summary for validation failures, a bare summary for store
/// failures.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub errors: FieldErrors,
    pub message: Option<String>,
}

impl FormState {
    pub fn invalid(errors: FieldErrors, message: &str) -> Self {
        Self {
            errors,
            message: Some(message.to_string()),
        }
    }

    /// Store failure: generic message only, never field-attributed.
    pub fn failed(message: &str) -> Self {
        Self {
            errors: FieldErrors::new(),
            message: Some(message.to_string()),
        }
    }

    pub fn errors_for(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_validation_failure(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[derive(Debug)]
pub enum ActionOutcome {
    /// Mutation committed; navigate to the listing at this path.
    Redirect(&'static str),
    /// Mutation committed; stay in place (delete is invoked from the
    /// listing itself).
    Done,
    /// Nothing was written; re-render the form with this state.
    Rejected(FormState),
}
