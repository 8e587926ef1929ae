use verity_core::{
    Channel, CodeRequestInput, RequestContext, Route, VerificationProvider, keys,
};

pub mod messages {
    pub const REQUEST_FAILED_PREFIX: &str = "Verification request failed. Reason: ";
}

/// Request code use case - validates the form and asks the provider to send
/// a one-time code by SMS
pub struct RequestCodeUseCase<'a, P>
where
    P: VerificationProvider,
{
    provider: &'a P,
}

impl<'a, P> RequestCodeUseCase<'a, P>
where
    P: VerificationProvider,
{
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// Execute the request code use case
    ///
    /// # Arguments
    /// * `context` - Session and flash storage of the current request
    /// * `input` - The submitted username, password and number
    ///
    /// # Returns
    /// The page to redirect to. The phone number is bound to the session only
    /// when the provider accepted the request.
    #[tracing::instrument(name = "RequestCodeUseCase::execute", skip_all)]
    pub async fn execute(&self, mut context: RequestContext<'_>, input: CodeRequestInput) -> Route {
        let form_data = input.redisplay_data();

        let request = match input.validate() {
            Ok(request) => request,
            Err(invalid) => {
                tracing::debug!(fields = ?invalid.errors.keys(), "Code request rejected");
                context.flash(keys::FORM_ERRORS, invalid.errors);
                context.flash(keys::FORM_DATA, invalid.data);
                return Route::CodeRequest;
            }
        };

        let phone_number = request.phone_number();
        match self
            .provider
            .start_verification(phone_number, Channel::Sms)
            .await
        {
            Ok(()) => {
                if let Some(session) = context.session.as_deref_mut() {
                    session.bind_phone_number(phone_number);
                }
                tracing::info!(to = %phone_number.masked(), "Verification code sent");
                Route::CodeVerification
            }
            Err(e) => {
                tracing::warn!(to = %phone_number.masked(), error = %e, "Verification request failed");
                context.flash(
                    keys::FORM_ERROR,
                    format!("{}{}", messages::REQUEST_FAILED_PREFIX, e.message()),
                );
                context.flash(keys::FORM_DATA, form_data);
                Route::CodeRequest
            }
        }
    }
}
