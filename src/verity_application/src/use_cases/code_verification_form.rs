use verity_core::{FlashValue, RequestContext, Route, keys};

use super::FormPage;

/// Everything the code verification form shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeVerificationFormView {
    pub error: Option<String>,
    pub success: Option<String>,
    /// Number the code was sent to, with the middle digits hidden.
    pub masked_number: String,
}

/// Builds the code verification form, or sends the user back to the start
/// when no verification is in progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct CodeVerificationFormUseCase;

impl CodeVerificationFormUseCase {
    pub fn new() -> Self {
        Self
    }

    #[tracing::instrument(name = "CodeVerificationFormUseCase::execute", skip_all)]
    pub fn execute(&self, mut context: RequestContext<'_>) -> FormPage<CodeVerificationFormView> {
        let Some(phone_number) = context.bound_phone_number() else {
            // Unread messages (e.g. a successful check) belong to the next page
            if let Some(flash) = context.flash.as_deref_mut() {
                flash.prolong();
            }
            return FormPage::Redirect(Route::CodeRequest);
        };

        FormPage::Render(CodeVerificationFormView {
            error: context
                .get_flash(keys::FORM_ERROR)
                .and_then(FlashValue::into_text),
            success: context
                .get_flash(keys::MESSAGE_SUCCESS)
                .and_then(FlashValue::into_text),
            masked_number: phone_number.masked(),
        })
    }
}
