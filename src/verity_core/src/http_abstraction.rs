//! Framework-agnostic HTTP response building for the verification flow.
//!
//! Handlers never touch a web framework directly. They receive a builder that
//! implements [`FlowResponseBuilder`] and produce the framework's own response
//! type through it.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  verity_core: FlowResponseBuilder trait  │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  verity_axum: AxumResponseBuilder        │
//! │  impl FlowResponseBuilder for it         │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  verity_adapters::handlers are generic   │
//! │  over the builder                        │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! fn after_check<B: FlowResponseBuilder>(builder: B) -> B::Response {
//!     builder.redirect(Route::CodeVerification.path())
//! }
//! ```

/// Trait for building HTTP responses.
///
/// Follows the builder pattern so calls can be chained:
/// ```ignore
/// builder
///     .status(302)
///     .header("location", "/verify")
///     .build()
/// ```
pub trait FlowResponseBuilder: Sized {
    /// The final response type produced by this builder
    type Response;

    /// Set the HTTP status code
    fn status(self, code: u16) -> Self;

    /// Add an HTTP header
    fn header(self, name: &str, value: &str) -> Self;

    /// Set an HTML body with `Content-Type: text/html; charset=utf-8`
    fn html_body(self, body: String) -> Self;

    /// Set a plain text body with `Content-Type: text/plain; charset=utf-8`
    fn text_body(self, body: String) -> Self;

    /// Build the final response
    fn build(self) -> Self::Response;
}

/// Convenience responses used by the flow handlers.
///
/// Automatically implemented for every [`FlowResponseBuilder`].
pub trait FlowResponseHelpers: FlowResponseBuilder {
    /// 302 Found with a `Location` header
    fn redirect(self, location: &str) -> Self::Response {
        self.status(302).header("location", location).build()
    }

    /// 200 OK with an HTML page
    fn ok_html(self, body: String) -> Self::Response {
        self.status(200).html_body(body).build()
    }

    /// 500 Internal Server Error with a short plain-text message
    fn internal_error(self, message: &str) -> Self::Response {
        self.status(500).text_body(message.to_string()).build()
    }
}

// Blanket implementation for all FlowResponseBuilder types
impl<T: FlowResponseBuilder> FlowResponseHelpers for T {}
