//! Framework-agnostic code verification form handler.

use askama::Template;
use verity_application::{CodeVerificationFormUseCase, FormPage};
use verity_core::{FlowResponseBuilder, FlowResponseHelpers, RequestContext};

use crate::templates::CodeVerificationFormPage;

/// Renders the code form, or redirects to the start of the flow when no
/// phone number is bound to the session.
pub fn handle_code_verification_form<B>(context: RequestContext<'_>, builder: B) -> B::Response
where
    B: FlowResponseBuilder,
{
    let view = match CodeVerificationFormUseCase::new().execute(context) {
        FormPage::Render(view) => view,
        FormPage::Redirect(route) => return builder.redirect(route.path()),
    };

    match (CodeVerificationFormPage { view }).render() {
        Ok(html) => builder.ok_html(html),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render code verification form");
            builder.internal_error("Failed to render page")
        }
    }
}
