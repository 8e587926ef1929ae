//! Axum integration for the verity verification flow.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  verity_adapters: framework-agnostic     │
//! │  handlers and session manager            │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  verity_axum: Axum implementations       │
//! │  - AxumResponseBuilder                   │
//! │  - session cookie handling               │
//! │  - Axum route handlers                   │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use verity_axum::{FlowState, routes};
//!
//! let app = Router::new()
//!     .route(
//!         "/",
//!         get(routes::code_request_form::<P, S>).post(routes::request_code::<P, S>),
//!     )
//!     .with_state(FlowState::new(provider, sessions));
//! ```

pub mod adapters;
pub mod cookies;
pub mod routes;
pub mod state;

// Re-export for convenience
pub use adapters::{AxumResponseBuilder, response_builder};
pub use routes::FlowError;
pub use state::FlowState;
