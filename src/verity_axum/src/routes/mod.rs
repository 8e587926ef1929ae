//! Axum-specific route handlers.
//!
//! These routes use Axum's extractors, open the session, call the
//! framework-agnostic handlers and commit the session before answering.

pub mod check_code;
pub mod code_request_form;
pub mod code_verification_form;
pub mod error;
pub mod request_code;

pub use check_code::check_code;
pub use code_request_form::code_request_form;
pub use code_verification_form::code_verification_form;
pub use error::FlowError;
pub use request_code::request_code;

use axum::{Form, extract::rejection::FormRejection};

/// Unreadable form bodies are treated as if no field was submitted.
pub(crate) fn form_or_default<T: Default>(form: Result<Form<T>, FormRejection>) -> T {
    match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Form body rejected");
            T::default()
        }
    }
}
