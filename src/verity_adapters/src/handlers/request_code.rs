//! Framework-agnostic code request handler.

use verity_application::RequestCodeUseCase;
use verity_core::{
    CodeRequestInput, FlowResponseBuilder, FlowResponseHelpers, RequestContext,
    VerificationProvider,
};

/// Handle a submitted code request form - framework agnostic.
///
/// Always answers with a redirect: to the code form when the provider sent a
/// code, back to the request form otherwise.
///
/// # Example
///
/// ```ignore
/// // In an Axum route:
/// let mut active = sessions.open(cookie).await?;
/// let response = handle_request_code(
///     &provider,
///     active.context(),
///     form.into(),
///     AxumResponseBuilder::new(),
/// )
/// .await;
/// sessions.commit(active).await?;
/// ```
pub async fn handle_request_code<P, B>(
    provider: &P,
    context: RequestContext<'_>,
    input: CodeRequestInput,
    builder: B,
) -> B::Response
where
    P: VerificationProvider,
    B: FlowResponseBuilder,
{
    let route = RequestCodeUseCase::new(provider)
        .execute(context, input)
        .await;

    builder.redirect(route.path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::RecordedResponse;
    use crate::provider::{MockVerificationProvider, ProviderCall};
    use secrecy::Secret;
    use verity_core::{Channel, FlashMessages, Session, keys};

    fn input(number: &str) -> CodeRequestInput {
        CodeRequestInput {
            username: Some("validuser".to_string()),
            password: Some(Secret::new("validpassword".to_string())),
            number: Some(number.to_string()),
        }
    }

    #[tokio::test]
    async fn test_redirects_to_verification_after_send() {
        let provider = MockVerificationProvider::new();
        let mut session = Session::default();
        let mut flash = FlashMessages::default();

        let response = handle_request_code(
            &provider,
            RequestContext::new(&mut session, &mut flash),
            input("+611234567890"),
            RecordedResponse::default(),
        )
        .await;

        assert_eq!(response.status, 302);
        assert_eq!(response.location.as_deref(), Some("/verify"));
        assert_eq!(session.get(keys::PHONE_NUMBER), Some("+611234567890"));
        assert_eq!(
            provider.calls().await,
            vec![ProviderCall::Start {
                to: "+611234567890".to_string(),
                channel: Channel::Sms,
            }]
        );
    }

    #[tokio::test]
    async fn test_redirects_back_on_invalid_number() {
        let provider = MockVerificationProvider::new();
        let mut session = Session::default();
        let mut flash = FlashMessages::default();

        let response = handle_request_code(
            &provider,
            RequestContext::new(&mut session, &mut flash),
            input("12345"),
            RecordedResponse::default(),
        )
        .await;

        assert_eq!(response.location.as_deref(), Some("/"));
        assert!(provider.calls().await.is_empty());
        assert!(flash.has_pending());
    }
}
