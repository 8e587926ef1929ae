//! Axum-specific code request route.

use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::Response,
};
use axum_extra::extract::CookieJar;
use secrecy::Secret;
use serde::Deserialize;
use verity_adapters::handlers;
use verity_core::{CodeRequestInput, SessionStore, VerificationProvider};

use super::FlowError;
use crate::adapters::response_builder;
use crate::cookies::{commit_session, open_session};
use crate::state::FlowState;

/// Axum code request route.
///
/// Redirects to `/verify` once a code was sent, back to `/` otherwise.
#[tracing::instrument(name = "Request code", skip_all)]
pub async fn request_code<P, S>(
    State(state): State<FlowState<P, S>>,
    jar: CookieJar,
    form: Result<Form<CodeRequestForm>, FormRejection>,
) -> Result<(CookieJar, Response), FlowError>
where
    P: VerificationProvider + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    let form = super::form_or_default(form);
    let mut active = open_session(&state.sessions, &jar).await?;

    let response = handlers::handle_request_code(
        &state.provider,
        active.context(),
        form.into(),
        response_builder(),
    )
    .await;

    let jar = commit_session(&state.sessions, jar, active).await?;
    Ok((jar, response))
}

/// Submitted code request form. Every field may be missing.
#[derive(Debug, Default, Deserialize)]
pub struct CodeRequestForm {
    pub username: Option<String>,
    pub password: Option<Secret<String>>,
    pub number: Option<String>,
}

impl From<CodeRequestForm> for CodeRequestInput {
    fn from(form: CodeRequestForm) -> Self {
        Self {
            username: form.username,
            password: form.password,
            number: form.number,
        }
    }
}
