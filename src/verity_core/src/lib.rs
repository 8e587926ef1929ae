pub mod domain;
pub mod http_abstraction;
pub mod ports;
pub mod routes;
pub mod session;

// Re-export commonly used types for convenience
pub use domain::{
    channel::Channel,
    code_request::{CodeRequest, CodeRequestInput, InvalidCodeRequest},
    field_error::FieldError,
    input_filter::sanitize,
    password::Password,
    phone_number::PhoneNumber,
    username::Username,
    verification_code::VerificationCode,
    verification_status::VerificationStatus,
};

pub use ports::{
    session_store::{SessionStore, SessionStoreError},
    verification_provider::{ProviderError, VerificationProvider},
};

pub use session::{
    FlashMessages, FlashValue, RequestContext, Session, SessionId, SessionIdError, SessionRecord,
    keys,
};

pub use http_abstraction::{FlowResponseBuilder, FlowResponseHelpers};
pub use routes::Route;
