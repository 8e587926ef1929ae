use verity_core::Route;

pub mod check_code;
pub mod code_request_form;
pub mod code_verification_form;
pub mod request_code;

/// Outcome of a form-display use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPage<V> {
    Render(V),
    Redirect(Route),
}
