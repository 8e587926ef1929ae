//! HTML pages of the verification flow. Every interpolated value is escaped.

use askama::Template;
use verity_application::{CodeRequestFormView, CodeVerificationFormView};

#[derive(Template)]
#[template(path = "code_request_form.html")]
pub struct CodeRequestFormPage {
    pub view: CodeRequestFormView,
}

#[derive(Template)]
#[template(path = "code_verification_form.html")]
pub struct CodeVerificationFormPage {
    pub view: CodeVerificationFormView,
}
