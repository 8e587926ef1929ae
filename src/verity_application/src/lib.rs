//! The verification workflow, independent of any web framework.
//!
//! Each use case takes a [`RequestContext`](verity_core::RequestContext) and
//! answers with the [`Route`](verity_core::Route) to redirect to or a view
//! model to render.

pub mod use_cases;

pub use use_cases::{
    check_code::{CheckCodeUseCase, messages as check_messages},
    code_request_form::{CodeRequestFormUseCase, CodeRequestFormView},
    code_verification_form::{CodeVerificationFormUseCase, CodeVerificationFormView},
    request_code::{RequestCodeUseCase, messages as request_messages},
    FormPage,
};
