use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use verity_core::SessionStoreError;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Session store error: {0}")]
    SessionStore(#[from] SessionStoreError),
}

impl IntoResponse for FlowError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");

        let (status, message) = match self {
            FlowError::SessionStore(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong, please try again later",
            ),
        };

        (status, message).into_response()
    }
}
