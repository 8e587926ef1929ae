//! Axum implementation of the framework-agnostic response builder.

use axum::body::Body;
use axum::http::{Response, StatusCode, header};
use verity_core::FlowResponseBuilder;

/// Wraps Axum's response builder so it can implement
/// `verity_core::FlowResponseBuilder` without violating the orphan rule.
pub struct AxumResponseBuilder {
    builder: axum::http::response::Builder,
    body: Option<String>,
}

impl AxumResponseBuilder {
    /// Create a new Axum response builder
    pub fn new() -> Self {
        Self {
            builder: Response::builder(),
            body: None,
        }
    }
}

impl Default for AxumResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowResponseBuilder for AxumResponseBuilder {
    type Response = Response<Body>;

    fn status(mut self, code: u16) -> Self {
        self.builder = self.builder.status(code);
        self
    }

    fn header(mut self, name: &str, value: &str) -> Self {
        self.builder = self.builder.header(name, value);
        self
    }

    fn html_body(mut self, body: String) -> Self {
        self.builder = self
            .builder
            .header(header::CONTENT_TYPE, "text/html; charset=utf-8");
        self.body = Some(body);
        self
    }

    fn text_body(mut self, body: String) -> Self {
        self.builder = self
            .builder
            .header(header::CONTENT_TYPE, "text/plain; charset=utf-8");
        self.body = Some(body);
        self
    }

    fn build(self) -> Self::Response {
        let body = self.body.unwrap_or_default();
        self.builder.body(Body::from(body)).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to build response");
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            response
        })
    }
}

/// Helper function to create an Axum response builder
pub fn response_builder() -> AxumResponseBuilder {
    AxumResponseBuilder::new()
}
