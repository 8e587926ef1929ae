use verity_core::{RequestContext, Route, VerificationCode, VerificationProvider, keys};

pub mod messages {
    pub const INVALID_CODE: &str = "Verification check failed: Invalid code.";
    pub const CHECK_SUCCEEDED: &str = "Verification check succeeded.";
    pub const CHECK_FAILED_PREFIX: &str = "Verification check failed. Reason: ";
}

/// Check code use case - verifies a submitted code against the number bound
/// to the session
pub struct CheckCodeUseCase<'a, P>
where
    P: VerificationProvider,
{
    provider: &'a P,
}

impl<'a, P> CheckCodeUseCase<'a, P>
where
    P: VerificationProvider,
{
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// Execute the check code use case
    ///
    /// # Arguments
    /// * `context` - Session and flash storage of the current request
    /// * `code` - The raw `code` form field, `None` when it was not submitted
    ///
    /// # Returns
    /// [`Route::CodeRequest`] when no verification is in progress, otherwise
    /// [`Route::CodeVerification`] with the outcome flashed
    #[tracing::instrument(name = "CheckCodeUseCase::execute", skip_all)]
    pub async fn execute(&self, mut context: RequestContext<'_>, code: Option<String>) -> Route {
        let Some(phone_number) = context.bound_phone_number() else {
            tracing::debug!("No phone number bound to session");
            return Route::CodeRequest;
        };

        let Ok(code) = VerificationCode::from_input(code.as_deref()) else {
            context.flash(keys::FORM_ERROR, messages::INVALID_CODE);
            return Route::CodeVerification;
        };

        match self
            .provider
            .check_verification(&code, &phone_number)
            .await
        {
            Ok(status) if status.is_approved() => {
                tracing::info!(to = %phone_number.masked(), "Verification approved");
                context.flash(keys::MESSAGE_SUCCESS, messages::CHECK_SUCCEEDED);
                if let Some(session) = context.session.as_deref_mut() {
                    session.clear();
                }
            }
            Ok(status) => {
                tracing::info!(to = %phone_number.masked(), %status, "Verification not approved");
                context.flash(
                    keys::FORM_ERROR,
                    format!("{}{}", messages::CHECK_FAILED_PREFIX, status),
                );
            }
            Err(e) => {
                tracing::warn!(to = %phone_number.masked(), error = %e, "Verification check failed");
                context.flash(
                    keys::FORM_ERROR,
                    format!("{}{}", messages::CHECK_FAILED_PREFIX, e.message()),
                );
            }
        }

        Route::CodeVerification
    }
}
