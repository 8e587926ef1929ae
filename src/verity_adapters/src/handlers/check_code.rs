//! Framework-agnostic code check handler.

use verity_application::CheckCodeUseCase;
use verity_core::{FlowResponseBuilder, FlowResponseHelpers, RequestContext, VerificationProvider};

/// Handle a submitted code - framework agnostic.
///
/// `code` is the raw form field, `None` when the form did not carry one.
pub async fn handle_check_code<P, B>(
    provider: &P,
    context: RequestContext<'_>,
    code: Option<String>,
    builder: B,
) -> B::Response
where
    P: VerificationProvider,
    B: FlowResponseBuilder,
{
    let route = CheckCodeUseCase::new(provider).execute(context, code).await;

    builder.redirect(route.path())
}
