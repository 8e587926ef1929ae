//! Axum-specific code check route.

use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::Response,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use verity_adapters::handlers;
use verity_core::{SessionStore, VerificationProvider};

use super::FlowError;
use crate::adapters::response_builder;
use crate::cookies::{commit_session, open_session};
use crate::state::FlowState;

/// Axum code check route.
///
/// Redirects to `/` when no verification is in progress, to `/verify`
/// otherwise.
#[tracing::instrument(name = "Check code", skip_all)]
pub async fn check_code<P, S>(
    State(state): State<FlowState<P, S>>,
    jar: CookieJar,
    form: Result<Form<CheckCodeForm>, FormRejection>,
) -> Result<(CookieJar, Response), FlowError>
where
    P: VerificationProvider + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    let form = super::form_or_default(form);
    let mut active = open_session(&state.sessions, &jar).await?;

    let response = handlers::handle_check_code(
        &state.provider,
        active.context(),
        form.code,
        response_builder(),
    )
    .await;

    let jar = commit_session(&state.sessions, jar, active).await?;
    Ok((jar, response))
}

#[derive(Debug, Default, Deserialize)]
pub struct CheckCodeForm {
    pub code: Option<String>,
}
