//! Framework-agnostic verification flow handlers.
//!
//! Framework-specific routes open the session, extract the form, call one of
//! these handlers with their own response builder, then commit the session.

pub mod check_code;
pub mod code_request_form;
pub mod code_verification_form;
pub mod request_code;

pub use check_code::handle_check_code;
pub use code_request_form::handle_code_request_form;
pub use code_verification_form::handle_code_verification_form;
pub use request_code::handle_request_code;
