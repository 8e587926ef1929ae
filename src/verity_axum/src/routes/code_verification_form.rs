//! Axum-specific code verification form route.

use axum::{extract::State, response::Response};
use axum_extra::extract::CookieJar;
use verity_adapters::handlers;
use verity_core::{SessionStore, VerificationProvider};

use super::FlowError;
use crate::adapters::response_builder;
use crate::cookies::{commit_session, open_session};
use crate::state::FlowState;

#[tracing::instrument(name = "Code verification form", skip_all)]
pub async fn code_verification_form<P, S>(
    State(state): State<FlowState<P, S>>,
    jar: CookieJar,
) -> Result<(CookieJar, Response), FlowError>
where
    P: VerificationProvider + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    let mut active = open_session(&state.sessions, &jar).await?;

    let response = handlers::handle_code_verification_form(active.context(), response_builder());

    let jar = commit_session(&state.sessions, jar, active).await?;
    Ok((jar, response))
}
