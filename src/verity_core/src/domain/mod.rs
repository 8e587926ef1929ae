pub mod channel;
pub mod code_request;
pub mod field_error;
pub mod input_filter;
pub mod password;
pub mod phone_number;
pub mod username;
pub mod verification_code;
pub mod verification_status;
