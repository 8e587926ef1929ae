//! Framework-agnostic code request form handler.

use askama::Template;
use verity_application::CodeRequestFormUseCase;
use verity_core::{FlowResponseBuilder, FlowResponseHelpers, RequestContext};

use crate::templates::CodeRequestFormPage;

/// Renders the username, password and phone number form with whatever the
/// previous request flashed.
pub fn handle_code_request_form<B>(context: RequestContext<'_>, builder: B) -> B::Response
where
    B: FlowResponseBuilder,
{
    let view = CodeRequestFormUseCase::new().execute(context);

    match (CodeRequestFormPage { view }).render() {
        Ok(html) => builder.ok_html(html),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render code request form");
            builder.internal_error("Failed to render page")
        }
    }
}
