use std::collections::BTreeMap;

use verity_core::{FlashValue, RequestContext, keys};

/// Everything the code request form shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeRequestFormView {
    pub error: Option<String>,
    pub field_errors: BTreeMap<String, String>,
    pub form_data: BTreeMap<String, String>,
    pub success: Option<String>,
}

impl CodeRequestFormView {
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }

    /// Previously submitted value of `field`, empty when there is none.
    pub fn value(&self, field: &str) -> &str {
        self.form_data.get(field).map(String::as_str).unwrap_or_default()
    }
}

/// Builds the code request form from whatever the previous request flashed.
#[derive(Debug, Default, Clone, Copy)]
pub struct CodeRequestFormUseCase;

impl CodeRequestFormUseCase {
    pub fn new() -> Self {
        Self
    }

    #[tracing::instrument(name = "CodeRequestFormUseCase::execute", skip_all)]
    pub fn execute(&self, mut context: RequestContext<'_>) -> CodeRequestFormView {
        CodeRequestFormView {
            error: context
                .get_flash(keys::FORM_ERROR)
                .and_then(FlashValue::into_text),
            field_errors: context
                .get_flash(keys::FORM_ERRORS)
                .and_then(FlashValue::into_fields)
                .unwrap_or_default(),
            form_data: context
                .get_flash(keys::FORM_DATA)
                .and_then(FlashValue::into_fields)
                .unwrap_or_default(),
            success: context
                .get_flash(keys::MESSAGE_SUCCESS)
                .and_then(FlashValue::into_text),
        }
    }
}
